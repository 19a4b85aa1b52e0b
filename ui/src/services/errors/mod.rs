use thiserror::Error;

use crate::features::registration::RegistrationField;

/// User-facing text shown for any failed submission
pub const SUBMISSION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// Input problems caught before a submission starts.
/// The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please agree to the terms and conditions")]
    TermsNotAccepted,

    #[error("Please fill in the required field: {0}")]
    MissingRequiredField(RegistrationField),
}

/// Failure reported by a submission backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionFailure {
    #[error("Registration rejected: {reason}")]
    Rejected { reason: String },

    #[error("Registration service unavailable: {reason}")]
    Unavailable { reason: String },
}

impl SubmissionFailure {
    pub fn user_message(&self) -> &'static str {
        SUBMISSION_FAILED_MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionFailure),

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

impl RegistrationError {
    /// Message for the status banner, if this error should show one
    pub fn user_message(&self) -> Option<String> {
        match self {
            RegistrationError::Validation(e) => Some(e.to_string()),
            RegistrationError::Submission(e) => Some(e.user_message().to_string()),
            RegistrationError::AlreadySubmitting => None,
        }
    }
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {field} must list at least one option")]
    EmptyOptions { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::TermsNotAccepted.to_string(),
            "Please agree to the terms and conditions"
        );
        assert_eq!(
            ValidationError::MissingRequiredField(RegistrationField::StudentId).to_string(),
            "Please fill in the required field: Student ID"
        );
    }

    #[test]
    fn test_submission_failure_shows_generic_message() {
        let error: RegistrationError = SubmissionFailure::Rejected {
            reason: "duplicate".to_string(),
        }
        .into();
        assert_eq!(
            error.user_message().as_deref(),
            Some("Registration failed. Please try again.")
        );
    }

    #[test]
    fn test_already_submitting_has_no_banner() {
        assert_eq!(RegistrationError::AlreadySubmitting.user_message(), None);
    }
}
