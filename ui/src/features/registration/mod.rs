//! Student course registration
//!
//! - **catalog**: majors and courses offered by the dropdowns
//! - **types**: the record, typed field updates, and the form state reducer
//! - **form_validation**: consent and required-field gate
//! - **orchestrator**: the submission flow run when the form is submitted

pub mod catalog;
pub mod form_validation;
pub mod orchestrator;
pub mod types;

pub use catalog::*;
pub use form_validation::*;
pub use orchestrator::submit_registration;
pub use types::*;
