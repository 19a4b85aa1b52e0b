//! Infrastructure Services
//!
//! - **config**: Static configuration supplied to the pages at construction
//! - **errors**: Validation, submission and configuration error types
//! - **submission**: The registration submission capability and its simulated backend
//!
//! The services are designed to be WASM-first, using async traits without
//! Send/Sync bounds for compatibility.

pub mod config;
pub mod errors;
pub mod submission;
