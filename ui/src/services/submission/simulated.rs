use async_trait::async_trait;

use super::traits::{RegistrationSubmitter, SubmissionAck};
use crate::features::registration::RegistrationRecord;
use crate::services::config::RegistrationConfig;
use crate::services::errors::SubmissionFailure;
use crate::utils::{sleep_ms, to_log_json};
use crate::{console_debug, console_log};

/// Waits a fixed delay, logs the record, and always accepts it.
/// Nothing leaves the browser.
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter {
    delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    pub fn from_config(config: &RegistrationConfig) -> Self {
        Self::new(config.submit_delay_ms)
    }
}

#[async_trait(?Send)]
impl RegistrationSubmitter for SimulatedSubmitter {
    async fn submit(
        &self,
        record: &RegistrationRecord,
    ) -> Result<SubmissionAck, SubmissionFailure> {
        console_debug!(
            "[SimulatedSubmitter] Waiting {}ms before acknowledging",
            self.delay_ms
        );
        sleep_ms(self.delay_ms).await;

        console_log!("[Registration] Registration data: {}", to_log_json(record));

        Ok(SubmissionAck::for_record(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_simulated_submitter_always_acknowledges() {
        let submitter = SimulatedSubmitter::new(0);
        let record = RegistrationRecord {
            student_id: "STU1".to_string(),
            ..RegistrationRecord::default()
        };

        let ack = submitter.submit(&record).await.unwrap();
        assert_eq!(ack.student_id, "STU1");
        assert_eq!(ack.course, record.course);
    }

    #[tokio::test]
    async fn test_simulated_submitter_waits_configured_delay() {
        let submitter = SimulatedSubmitter::new(30);
        let started = Instant::now();
        submitter
            .submit(&RegistrationRecord::default())
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_default_config_uses_fixed_delay() {
        let submitter = SimulatedSubmitter::from_config(&RegistrationConfig::default());
        assert_eq!(submitter.delay_ms, 1500);
    }
}
