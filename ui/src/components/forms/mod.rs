pub mod birthday_wish_form;
pub mod option_selector;
pub mod registration_form;

pub use birthday_wish_form::*;
pub use option_selector::*;
pub use registration_form::*;
