//! This crate contains the shared UI for the course registration and birthday wish pages.

pub mod app;
pub use app::{BirthdayWishPage, RegistrationPage};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
