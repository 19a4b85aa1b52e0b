//! User Interface Components
//!
//! This module contains the Dioxus components used by the form pages:
//!
//! - **forms**: the registration form, the wish generator, and shared dropdowns
//! - **display**: status banner, loading indicator, wish card and course info panel
//! - **inputs**: labeled text, textarea and checkbox inputs
//!
//! Components hold no state of their own beyond what their page passes in.

pub mod display;
pub mod forms;
pub mod inputs;
