pub mod birthday_page;
pub mod registration_page;

pub use birthday_page::BirthdayWishPage;
pub use registration_page::RegistrationPage;
