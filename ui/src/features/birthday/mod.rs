//! Birthday wish generator: type a friend's name, confirm it, get a wish card

pub mod types;

pub use types::*;
