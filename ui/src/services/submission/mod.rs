//! Registration submission capability
//!
//! The form only talks to [`RegistrationSubmitter`]. Production wires in the
//! [`SimulatedSubmitter`], which stands in for a real backend.

pub mod simulated;
pub mod traits;

pub use simulated::SimulatedSubmitter;
pub use traits::*;
