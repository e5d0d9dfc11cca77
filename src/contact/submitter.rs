//! Submission capability and its simulated default

use super::field::FieldName;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Default artificial delay of the simulated backend
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Values handed to the submitter, keyed by field key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactPayload {
    fields: BTreeMap<&'static str, String>,
}

impl ContactPayload {
    pub fn insert(&mut self, field: FieldName, value: String) {
        self.fields.insert(field.key(), value);
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.fields.get(field.key()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Why a submission did not go through.
///
/// The form collapses every variant into the same error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("contact backend rejected the submission: {0}")]
    Rejected(String),
    #[error("contact backend unreachable: {0}")]
    Unavailable(String),
}

/// Delivers contact form data to a backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// Single-shot delivery; no retries
    async fn submit(&self, payload: ContactPayload) -> Result<(), SubmissionError>;
}

/// Stand-in backend: waits a fixed delay, logs the payload, and resolves
pub struct SimulatedSubmitter {
    delay: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Variant that always rejects after the delay, for exercising the error path
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl FormSubmitter for SimulatedSubmitter {
    async fn submit(&self, payload: ContactPayload) -> Result<(), SubmissionError> {
        let body = serde_json::to_string(&payload).unwrap_or_default();
        tracing::info!(
            fields = payload.len(),
            payload = %body,
            delay_ms = self.delay.as_millis() as u64,
            "Submitting contact form"
        );

        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(SubmissionError::Unavailable(
                "simulated backend failure".to_string(),
            ));
        }
        Ok(())
    }
}
