//! Core traits for submitting a registration

use async_trait::async_trait;
use std::rc::Rc;

use crate::features::registration::{Course, RegistrationRecord};
use crate::services::errors::SubmissionFailure;

/// Receipt returned by a backend that accepted a registration
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionAck {
    pub student_id: String,
    pub course: Course,
}

impl SubmissionAck {
    pub fn for_record(record: &RegistrationRecord) -> Self {
        Self {
            student_id: record.student_id.clone(),
            course: record.course,
        }
    }
}

/// Anything that can accept a completed registration.
///
/// Futures are `?Send` because everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait RegistrationSubmitter {
    async fn submit(&self, record: &RegistrationRecord)
        -> Result<SubmissionAck, SubmissionFailure>;
}

/// Handle placed in Dioxus context so components can reach the submitter
pub type SharedSubmitter = Rc<dyn RegistrationSubmitter>;
