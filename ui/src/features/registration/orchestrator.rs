//! Drives a single registration submission from the submit click to the result banner

use super::form_validation::validate_submission;
use super::types::*;
use crate::services::errors::{RegistrationError, RegistrationResult};
use crate::services::submission::{RegistrationSubmitter, SubmissionAck};
use crate::{console_error, console_info, console_warn};

/// Run the submission flow against a snapshot of the form state.
///
/// Every state change goes out through `dispatch`, so the caller decides where the
/// state lives (a Dioxus signal in the app, a plain cell in tests). Validation
/// failures are reported before the form enters the submitting state. A
/// failed submission keeps the record, and a successful one resets it to the
/// defaults.
pub async fn submit_registration<S, D>(
    state: &RegistrationState,
    submitter: &S,
    dispatch: D,
) -> RegistrationResult<SubmissionAck>
where
    S: RegistrationSubmitter + ?Sized,
    D: Fn(RegistrationAction),
{
    if state.is_submitting {
        console_warn!("[Registration] Submission already in progress, ignoring");
        return Err(RegistrationError::AlreadySubmitting);
    }

    if let Err(e) = validate_submission(&state.record) {
        console_info!("[Registration] Submission blocked: {}", e);
        let error = RegistrationError::from(e);
        if let Some(text) = error.user_message() {
            dispatch(RegistrationAction::SetMessage(Some(StatusMessage::error(text))));
        }
        return Err(error);
    }

    dispatch(RegistrationAction::SetSubmitting(true));
    dispatch(RegistrationAction::SetMessage(None));

    console_info!(
        "[Registration] Submitting {} for course {}",
        state.record.student_id,
        state.record.course.code()
    );

    let result = submitter
        .submit(&state.record)
        .await
        .map_err(RegistrationError::from);

    match &result {
        Ok(ack) => {
            console_info!(
                "[Registration] Registration accepted for {}",
                ack.student_id
            );
            dispatch(RegistrationAction::SubmissionSucceeded);
        }
        Err(error) => {
            console_error!("[Registration] Submission failed: {}", error);
            if let Some(text) = error.user_message() {
                dispatch(RegistrationAction::SubmissionFailed(text));
            }
        }
    }

    dispatch(RegistrationAction::SetSubmitting(false));

    result
}
