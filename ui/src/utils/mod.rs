//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **platform**: timer helpers shared by the browser and native test targets
//! - **serialization**: JSON helpers for diagnostic logging

pub mod console_macros;
pub mod platform;
pub mod serialization;

pub use platform::*;
pub use serialization::*;
