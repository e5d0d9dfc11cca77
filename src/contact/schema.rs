//! Declarative field sets for the contact form
//!
//! The form has shipped with different field sets over time (a single name
//! field vs. first/last name, optional vs. required phone, format-only vs.
//! allow-listed email). Each set is described here as data so one
//! container and one validator serve all of them.

use super::field::FieldName;
use serde::{Deserialize, Serialize};

/// Which family of rules a field follows beyond its length bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email {
        /// Also require the top-level domain to be on the allow-list
        strict_tld: bool,
    },
    Phone,
}

/// Rule set attached to one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraint {
    pub required: bool,
    pub min_chars: Option<usize>,
    pub max_chars: Option<usize>,
    pub kind: FieldKind,
}

impl FieldConstraint {
    pub const fn person_name() -> Self {
        Self {
            required: true,
            min_chars: Some(2),
            max_chars: None,
            kind: FieldKind::Text,
        }
    }

    pub const fn email(strict_tld: bool) -> Self {
        Self {
            required: true,
            min_chars: None,
            max_chars: None,
            kind: FieldKind::Email { strict_tld },
        }
    }

    pub const fn phone(required: bool) -> Self {
        Self {
            required,
            min_chars: None,
            max_chars: None,
            kind: FieldKind::Phone,
        }
    }

    pub const fn message() -> Self {
        Self {
            required: true,
            min_chars: Some(10),
            max_chars: Some(1000),
            kind: FieldKind::Text,
        }
    }
}

/// Built-in field sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Name, email (format only), optional phone, message
    #[default]
    Simple,
    /// First and last name, allow-listed email, required phone, message
    Detailed,
}

/// Ordered list of fields and their constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    entries: Vec<(FieldName, FieldConstraint)>,
}

impl FormSchema {
    /// Build a schema from explicit entries; later duplicates are ignored
    pub fn new(entries: impl IntoIterator<Item = (FieldName, FieldConstraint)>) -> Self {
        let mut deduped: Vec<(FieldName, FieldConstraint)> = Vec::new();
        for (field, constraint) in entries {
            if !deduped.iter().any(|(f, _)| *f == field) {
                deduped.push((field, constraint));
            }
        }
        Self { entries: deduped }
    }

    pub fn for_variant(variant: FormVariant) -> Self {
        match variant {
            FormVariant::Simple => Self::new([
                (FieldName::Name, FieldConstraint::person_name()),
                (FieldName::Email, FieldConstraint::email(false)),
                (FieldName::Phone, FieldConstraint::phone(false)),
                (FieldName::Message, FieldConstraint::message()),
            ]),
            FormVariant::Detailed => Self::new([
                (FieldName::FirstName, FieldConstraint::person_name()),
                (FieldName::LastName, FieldConstraint::person_name()),
                (FieldName::Email, FieldConstraint::email(true)),
                (FieldName::Phone, FieldConstraint::phone(true)),
                (FieldName::Message, FieldConstraint::message()),
            ]),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    pub fn constraint(&self, field: FieldName) -> Option<&FieldConstraint> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, c)| c)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.constraint(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::for_variant(FormVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_variant_fields() {
        let schema = FormSchema::for_variant(FormVariant::Simple);
        let fields: Vec<_> = schema.fields().collect();
        assert_eq!(
            fields,
            vec![
                FieldName::Name,
                FieldName::Email,
                FieldName::Phone,
                FieldName::Message
            ]
        );
        assert!(!schema.constraint(FieldName::Phone).unwrap().required);
    }

    #[test]
    fn test_detailed_variant_fields() {
        let schema = FormSchema::for_variant(FormVariant::Detailed);
        let fields: Vec<_> = schema.fields().collect();
        assert_eq!(
            fields,
            vec![
                FieldName::FirstName,
                FieldName::LastName,
                FieldName::Email,
                FieldName::Phone,
                FieldName::Message
            ]
        );
        assert!(schema.constraint(FieldName::Phone).unwrap().required);
        assert_eq!(
            schema.constraint(FieldName::Email).unwrap().kind,
            FieldKind::Email { strict_tld: true }
        );
    }

    #[test]
    fn test_duplicate_entries_keep_first() {
        let schema = FormSchema::new([
            (FieldName::Phone, FieldConstraint::phone(true)),
            (FieldName::Phone, FieldConstraint::phone(false)),
        ]);
        assert_eq!(schema.len(), 1);
        assert!(schema.constraint(FieldName::Phone).unwrap().required);
    }

    #[test]
    fn test_schema_without_message() {
        let schema = FormSchema::new([
            (FieldName::Name, FieldConstraint::person_name()),
            (FieldName::Phone, FieldConstraint::phone(true)),
        ]);
        assert!(!schema.contains(FieldName::Message));
        assert!(schema.constraint(FieldName::Message).is_none());
    }

    #[test]
    fn test_variant_deserializes_lowercase() {
        let variant: FormVariant = serde_json::from_str("\"detailed\"").unwrap();
        assert_eq!(variant, FormVariant::Detailed);
    }
}
