pub mod course_info;
pub mod loading_indicator;
pub mod status_message;
pub mod wish_card;

pub use course_info::*;
pub use loading_indicator::*;
pub use status_message::*;
pub use wish_card::*;
