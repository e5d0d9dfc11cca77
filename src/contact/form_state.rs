//! Contact form state container
//!
//! Holds the authoritative value and last validation result of every
//! declared field. Validation only runs on blur and submit unless the form
//! was configured for immediate feedback.

use super::field::{FieldName, FormField};
use super::input_filter::sanitize_phone;
use super::schema::FormSchema;
use super::submitter::ContactPayload;
use super::validators::{validate, ValidationResult};
use std::collections::BTreeMap;

/// Focus navigation shared by the contact form rows
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactFormState {
    schema: FormSchema,
    fields: BTreeMap<FieldName, FormField>,
    validate_on_change: bool,
    /// Index into the schema's fields; `schema.len()` is the submit button row
    active_field_index: usize,
}

impl ContactFormState {
    pub fn new(schema: FormSchema, validate_on_change: bool) -> Self {
        let fields = schema
            .fields()
            .map(|f| (f, FormField::default()))
            .collect();
        Self {
            schema,
            fields,
            validate_on_change,
            active_field_index: 0,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn field(&self, name: FieldName) -> Option<&FormField> {
        self.fields.get(&name)
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.fields.get(&name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.fields.get(&name).and_then(|f| f.error())
    }

    /// Fields in schema order
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &FormField)> + '_ {
        self.schema
            .fields()
            .filter_map(|name| self.fields.get(&name).map(|f| (name, f)))
    }

    /// Overwrite a field's value. Unknown fields are ignored.
    ///
    /// A stale error is kept until the next validation pass decides it.
    pub fn set_field_value(&mut self, name: FieldName, value: impl Into<String>) {
        let mut value = value.into();
        if name == FieldName::Phone {
            value = sanitize_phone(&value);
        }
        let Some(field) = self.fields.get_mut(&name) else {
            return;
        };
        field.value = value;
        if self.validate_on_change {
            self.validate_field(name);
        }
    }

    /// Append a character to a field, running it through the same path as a full edit
    pub fn push_char(&mut self, name: FieldName, c: char) {
        let mut value = self.value(name).to_string();
        value.push(c);
        self.set_field_value(name, value);
    }

    pub fn pop_char(&mut self, name: FieldName) {
        let mut value = self.value(name).to_string();
        value.pop();
        self.set_field_value(name, value);
    }

    /// Validate one field against its constraint and store the result
    pub fn validate_field(&mut self, name: FieldName) -> ValidationResult {
        let Some(constraint) = self.schema.constraint(name).copied() else {
            return ValidationResult::Valid;
        };
        let Some(field) = self.fields.get_mut(&name) else {
            return ValidationResult::Valid;
        };
        let result = validate(name, &field.value, &constraint);
        field.validation = Some(result.clone());
        result
    }

    /// Validate every declared field; true iff all are valid
    pub fn validate_all(&mut self) -> bool {
        let names: Vec<FieldName> = self.schema.fields().collect();
        names
            .into_iter()
            .map(|name| self.validate_field(name).is_valid())
            .fold(true, |all, ok| all && ok)
    }

    /// Keys of fields whose last validation failed
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.fields()
            .filter(|(_, f)| f.error().is_some())
            .map(|(name, _)| name.key())
            .collect()
    }

    /// Restore every field to empty and forget all validation results
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.clear();
        }
        self.active_field_index = 0;
    }

    /// Snapshot of the current values for submission
    pub fn payload(&self) -> ContactPayload {
        let mut payload = ContactPayload::default();
        for (name, field) in self.fields() {
            let optional = self
                .schema
                .constraint(name)
                .is_some_and(|c| !c.required);
            let value = field.value.trim();
            if optional && value.is_empty() {
                continue;
            }
            payload.insert(name, value.to_string());
        }
        payload
    }

    /// Field under focus, or `None` when the submit button row is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        self.schema.fields().nth(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.schema.len()
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field_name().is_some_and(|f| f.is_multiline())
    }
}

impl Form for ContactFormState {
    fn field_count(&self) -> usize {
        self.schema.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.schema.len());
    }
}
