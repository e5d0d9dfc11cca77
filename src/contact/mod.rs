//! Contact form domain layer
//!
//! - `validators`: pure per-field rules
//! - `input_filter`: phone keystroke filtering and paste sanitizing
//! - `schema`: field sets and their constraints
//! - `form_state`: values, errors, and focus
//! - `orchestrator`: submission status machine
//! - `submitter` / `telemetry`: injected capabilities

mod field;
mod form_state;
mod input_filter;
mod orchestrator;
mod schema;
mod submitter;
mod telemetry;
mod validators;

pub use field::{FieldName, FormField};
pub use form_state::Form;
pub use input_filter::accepts_phone_key;
pub use orchestrator::{ContactForm, SubmissionStatus};
pub use schema::{FieldConstraint, FormSchema, FormVariant};
pub use submitter::{FormSubmitter, SimulatedSubmitter, SubmissionError};
pub use telemetry::{attributes, Telemetry, TracingTelemetry};
pub use validators::ValidationResult;

#[cfg(test)]
pub use submitter::MockFormSubmitter;
#[cfg(test)]
pub use telemetry::MockTelemetry;
