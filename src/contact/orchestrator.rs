//! Submission lifecycle for the contact form
//!
//! ```text
//! Idle ──submit(valid)──▶ Submitting ──Ok──▶ Success (fields reset)
//!  ▲  └─submit(invalid)─▶ Idle        └─Err─▶ Error   (fields kept)
//!  └──────────────── dismiss ◀──────────────┘
//! ```
//!
//! The async wait is split out of the state machine (`begin_submit` /
//! `complete_submit`) so an event loop can keep drawing while the
//! submitter runs; `submit` chains both for callers that can simply await.

use super::field::{FieldName, FormField};
use super::form_state::ContactFormState;
use super::schema::FormSchema;
use super::submitter::{ContactPayload, FormSubmitter, SubmissionError};
use super::telemetry::{attributes, Attributes, Telemetry};
use std::sync::Arc;

pub const SUCCESS_MESSAGE: &str = "Thank you! We'll contact you soon.";
pub const FALLBACK_PHONE: &str = "813-874-1508";

/// Status of the most recent submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Banner text for statuses that show one
    pub fn banner_message(&self) -> Option<String> {
        match self {
            Self::Success => Some(SUCCESS_MESSAGE.to_string()),
            Self::Error => Some(format!(
                "Error submitting form. Please call {FALLBACK_PHONE}"
            )),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// Contact form with injected delivery and analytics capabilities
pub struct ContactForm {
    state: ContactFormState,
    status: SubmissionStatus,
    submitter: Arc<dyn FormSubmitter>,
    telemetry: Arc<dyn Telemetry>,
}

impl ContactForm {
    pub fn new(
        schema: FormSchema,
        validate_on_change: bool,
        submitter: Arc<dyn FormSubmitter>,
        telemetry: Arc<dyn Telemetry>,
    ) -> Self {
        Self {
            state: ContactFormState::new(schema, validate_on_change),
            status: SubmissionStatus::Idle,
            submitter,
            telemetry,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ContactFormState {
        &mut self.state
    }

    /// Fields with their current value and error, in schema order
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &FormField)> + '_ {
        self.state.fields()
    }

    pub fn submitter(&self) -> Arc<dyn FormSubmitter> {
        Arc::clone(&self.submitter)
    }

    pub fn on_field_change(&mut self, field: FieldName, value: impl Into<String>) {
        self.state.set_field_value(field, value);
    }

    pub fn on_field_blur(&mut self, field: FieldName) {
        self.state.validate_field(field);
    }

    /// Gate and enter `Submitting`. Returns the payload to deliver, or
    /// `None` when a submission is already in flight or a field is invalid.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting() {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return None;
        }

        if !self.state.validate_all() {
            let invalid = self.state.invalid_fields();
            tracing::debug!(?invalid, "Contact form has invalid fields");
            self.telemetry.track(
                "contact_form_invalid",
                attributes([("fields", serde_json::Value::from(invalid))]),
            );
            return None;
        }

        let payload = self.state.payload();
        self.status = SubmissionStatus::Submitting;
        self.telemetry.track(
            "contact_form_submitted",
            attributes([
                ("eventCategory", serde_json::Value::from("conversion")),
                (
                    "hasPhone",
                    serde_json::Value::from(payload.get(FieldName::Phone).is_some()),
                ),
            ]),
        );
        Some(payload)
    }

    /// Resolve an in-flight submission. Ignored unless `Submitting`.
    pub fn complete_submit(&mut self, result: Result<(), SubmissionError>) {
        if !self.is_submitting() {
            tracing::warn!(status = ?self.status, "Submission result arrived outside Submitting");
            return;
        }

        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.state.reset();
                self.telemetry
                    .track("contact_form_succeeded", Attributes::new());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact form submission failed");
                self.status = SubmissionStatus::Error;
                self.telemetry.track(
                    "contact_form_failed",
                    attributes([("error", e.to_string())]),
                );
            }
        }
    }

    /// Validate, deliver through the submitter, and settle the status
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> SubmissionStatus {
        if let Some(payload) = self.begin_submit() {
            let result = self.submitter.submit(payload).await;
            self.complete_submit(result);
        }
        self.status
    }

    #[allow(dead_code)]
    pub async fn on_submit(&mut self) -> SubmissionStatus {
        self.submit().await
    }

    /// Hide the success/error banner. Field values are untouched.
    pub fn dismiss_status(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn on_dismiss_status(&mut self) {
        self.dismiss_status();
    }
}
