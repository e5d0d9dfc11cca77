//! Contact form field value objects

use super::validators::ValidationResult;

/// Identifies one input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl FieldName {
    /// Stable key used in payloads and telemetry
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    /// Human label, also used as the subject of error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Phone => "Phone number",
            Self::Message => "Message",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::FirstName => "John",
            Self::LastName => "Doe",
            Self::Email => "john@example.com",
            Self::Phone => "(813) 555-0123",
            Self::Message => "How can we help you?",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Current value of a single field plus its last validation outcome
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub value: String,
    /// `None` until the field has been validated at least once
    pub validation: Option<ValidationResult>,
}

impl FormField {
    /// Clear value and validation state
    pub fn clear(&mut self) {
        self.value.clear();
        self.validation = None;
    }

    /// Error message from the last validation pass, if it failed
    pub fn error(&self) -> Option<&str> {
        self.validation.as_ref().and_then(|v| v.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct() {
        let all = [
            FieldName::Name,
            FieldName::FirstName,
            FieldName::LastName,
            FieldName::Email,
            FieldName::Phone,
            FieldName::Message,
        ];
        let mut keys: Vec<_> = all.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), all.len());
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(FieldName::Message.is_multiline());
        assert!(!FieldName::Email.is_multiline());
        assert!(!FieldName::Phone.is_multiline());
    }

    #[test]
    fn test_clear_drops_validation() {
        let mut field = FormField {
            value: "x".to_string(),
            validation: Some(ValidationResult::Invalid("bad".to_string())),
        };
        assert_eq!(field.error(), Some("bad"));
        field.clear();
        assert!(field.value.is_empty());
        assert!(field.error().is_none());
    }
}
