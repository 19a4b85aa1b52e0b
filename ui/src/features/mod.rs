pub mod birthday;
pub mod registration;
