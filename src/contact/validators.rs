//! Pure per-field validation rules

use super::field::FieldName;
use super::schema::{FieldConstraint, FieldKind};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

static PHONE_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9()+\-[:space:]]*$").expect("valid phone pattern"));

/// Top-level domains accepted by the strict email check
pub const ALLOWED_TLDS: &[&str] = &[
    "com", "net", "org", "edu", "gov", "mil", "co", "uk", "us", "ca", "au", "de", "fr", "jp",
    "cn", "in", "br", "ru", "solutions", "tech", "io", "app", "dev", "ai", "info", "biz", "xyz",
    "online", "store", "site", "website", "cloud", "digital", "email", "group", "studio",
    "agency", "marketing", "services", "consulting", "finance", "health", "legal", "media",
    "news", "global", "international", "world", "pro", "tv", "me", "cc", "fm", "gg", "be", "it",
    "es", "nl", "se", "no", "dk", "fi", "pl", "ch", "at", "ie", "nz", "sg", "hk", "ae", "sa",
    "za", "mx", "ar", "cl", "pe", "co.uk", "co.nz", "co.za", "com.au", "com.br", "com.mx",
    "org.uk", "net.au",
];

pub const MIN_PHONE_DIGITS: usize = 10;

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg),
        }
    }
}

/// Validate a raw value against its constraint
pub fn validate(field: FieldName, value: &str, constraint: &FieldConstraint) -> ValidationResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        if !constraint.required {
            return ValidationResult::Valid;
        }
        // Length-bounded text fields report their length rule instead
        if !matches!(constraint.kind, FieldKind::Text) {
            return ValidationResult::Invalid(format!("{} is required", field.label()));
        }
    }

    let kind_result = match constraint.kind {
        FieldKind::Text => ValidationResult::Valid,
        FieldKind::Email { strict_tld } => validate_email(trimmed, strict_tld),
        FieldKind::Phone => validate_phone(trimmed),
    };
    if !kind_result.is_valid() {
        return kind_result;
    }

    validate_length(field, trimmed, constraint)
}

fn validate_length(field: FieldName, trimmed: &str, constraint: &FieldConstraint) -> ValidationResult {
    let len = trimmed.chars().count();
    if let Some(min) = constraint.min_chars {
        if len < min {
            return ValidationResult::Invalid(format!(
                "{} must be at least {} characters",
                field.label(),
                min
            ));
        }
    }
    if let Some(max) = constraint.max_chars {
        if len > max {
            return ValidationResult::Invalid(format!(
                "{} cannot exceed {} characters",
                field.label(),
                max
            ));
        }
    }
    ValidationResult::Valid
}

/// Format check, then (optionally) the allow-listed TLD check
pub fn validate_email(value: &str, strict_tld: bool) -> ValidationResult {
    if !EMAIL_SHAPE.is_match(value) {
        return ValidationResult::Invalid("Please enter a valid email address".to_string());
    }
    if strict_tld && !has_allowed_tld(value) {
        return ValidationResult::Invalid(
            "Please enter a valid email address with a real domain".to_string(),
        );
    }
    ValidationResult::Valid
}

fn has_allowed_tld(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let domain = domain.to_ascii_lowercase();
    ALLOWED_TLDS.iter().any(|tld| {
        domain
            .strip_suffix(tld)
            .and_then(|rest| rest.strip_suffix('.'))
            .is_some_and(|host| !host.is_empty())
    })
}

/// Character-set check, then the minimum digit count
pub fn validate_phone(value: &str) -> ValidationResult {
    if !PHONE_CHARSET.is_match(value) {
        return ValidationResult::Invalid(
            "Phone number can only contain numbers, spaces, dashes, parentheses, and +"
                .to_string(),
        );
    }
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < MIN_PHONE_DIGITS {
        return ValidationResult::Invalid(format!(
            "Phone number must be at least {} digits",
            MIN_PHONE_DIGITS
        ));
    }
    ValidationResult::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn invalid(msg: &str) -> ValidationResult {
        ValidationResult::Invalid(msg.to_string())
    }

    mod names {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_two_chars_pass() {
            let c = FieldConstraint::person_name();
            assert!(validate(FieldName::Name, "Jo", &c).is_valid());
            assert!(validate(FieldName::Name, "John Doe", &c).is_valid());
        }

        #[test]
        fn test_short_and_empty_fail_with_length_message() {
            let c = FieldConstraint::person_name();
            let expected = invalid("Name must be at least 2 characters");
            assert_eq!(validate(FieldName::Name, "J", &c), expected);
            assert_eq!(validate(FieldName::Name, "", &c), expected);
            assert_eq!(validate(FieldName::Name, "  J  ", &c), expected);
        }

        #[test]
        fn test_split_name_labels() {
            let c = FieldConstraint::person_name();
            assert_eq!(
                validate(FieldName::FirstName, "", &c),
                invalid("First name must be at least 2 characters")
            );
            assert_eq!(
                validate(FieldName::LastName, "D", &c),
                invalid("Last name must be at least 2 characters")
            );
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            let c = FieldConstraint::person_name();
            assert_eq!(
                validate(FieldName::Name, "é", &c),
                invalid("Name must be at least 2 characters")
            );
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_address_passes() {
            let c = FieldConstraint::email(false);
            assert!(validate(FieldName::Email, "john@example.com", &c).is_valid());
        }

        #[test]
        fn test_malformed_addresses_fail() {
            let c = FieldConstraint::email(false);
            let expected = invalid("Please enter a valid email address");
            for bad in ["invalid-email", "john@", "@example.com", "john@example", "a b@c.com"] {
                assert_eq!(validate(FieldName::Email, bad, &c), expected, "{bad}");
            }
        }

        #[test]
        fn test_empty_required_email() {
            let c = FieldConstraint::email(false);
            assert_eq!(
                validate(FieldName::Email, "", &c),
                invalid("Email is required")
            );
        }

        #[test]
        fn test_simple_variant_accepts_any_tld() {
            assert!(validate_email("john@example.zz", false).is_valid());
        }

        #[test]
        fn test_strict_variant_rejects_unknown_tld() {
            assert_eq!(
                validate_email("john@example.zz", true),
                invalid("Please enter a valid email address with a real domain")
            );
        }

        #[test]
        fn test_strict_variant_accepts_listed_tlds() {
            for ok in [
                "john@example.com",
                "john@example.co.uk",
                "JOHN@EXAMPLE.IO",
                "a.b+c@mail.example.com.au",
            ] {
                assert!(validate_email(ok, true).is_valid(), "{ok}");
            }
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_formatted_number_passes() {
            let c = FieldConstraint::phone(true);
            assert!(validate(FieldName::Phone, "(813) 555-0123", &c).is_valid());
            assert!(validate(FieldName::Phone, "+1 813 555 0123", &c).is_valid());
        }

        #[test]
        fn test_non_ascii_digits_fail_charset() {
            let c = FieldConstraint::phone(true);
            let expected =
                invalid("Phone number can only contain numbers, spaces, dashes, parentheses, and +");
            // Arabic-Indic three appended to an otherwise valid number
            assert_eq!(validate(FieldName::Phone, "8135550123\u{0663}", &c), expected);
            assert_eq!(
                validate(FieldName::Phone, "\u{0668}\u{0661}\u{0663}\u{0665}\u{0665}\u{0665}\u{0660}\u{0661}\u{0662}\u{0663}", &c),
                expected
            );
            // Fullwidth digits
            assert_eq!(validate(FieldName::Phone, "８１３５５５０１２３", &c), expected);
        }

        #[test]
        fn test_too_few_digits_fails() {
            let c = FieldConstraint::phone(true);
            assert_eq!(
                validate(FieldName::Phone, "555-123", &c),
                invalid("Phone number must be at least 10 digits")
            );
        }

        #[test]
        fn test_disallowed_characters_fail() {
            let c = FieldConstraint::phone(true);
            let expected =
                invalid("Phone number can only contain numbers, spaces, dashes, parentheses, and +");
            for bad in ["813.555.0123", "813-555-01x3", "call 8135550123"] {
                assert_eq!(validate(FieldName::Phone, bad, &c), expected, "{bad}");
            }
        }

        #[test]
        fn test_optional_empty_passes() {
            let c = FieldConstraint::phone(false);
            assert!(validate(FieldName::Phone, "", &c).is_valid());
            assert!(validate(FieldName::Phone, "   ", &c).is_valid());
        }

        #[test]
        fn test_optional_but_present_is_checked() {
            let c = FieldConstraint::phone(false);
            assert!(!validate(FieldName::Phone, "555", &c).is_valid());
        }

        #[test]
        fn test_required_empty_fails() {
            let c = FieldConstraint::phone(true);
            assert_eq!(
                validate(FieldName::Phone, "", &c),
                invalid("Phone number is required")
            );
        }
    }

    mod message {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_bounds_inclusive() {
            let c = FieldConstraint::message();
            assert!(validate(FieldName::Message, &"a".repeat(10), &c).is_valid());
            assert!(validate(FieldName::Message, &"a".repeat(1000), &c).is_valid());
        }

        #[test]
        fn test_too_short() {
            let c = FieldConstraint::message();
            assert_eq!(
                validate(FieldName::Message, "hello", &c),
                invalid("Message must be at least 10 characters")
            );
        }

        #[test]
        fn test_too_long() {
            let c = FieldConstraint::message();
            assert_eq!(
                validate(FieldName::Message, &"a".repeat(1001), &c),
                invalid("Message cannot exceed 1000 characters")
            );
        }

        #[test]
        fn test_whitespace_padding_is_trimmed() {
            let c = FieldConstraint::message();
            let padded = format!("   {}   ", "a".repeat(5));
            assert_eq!(
                validate(FieldName::Message, &padded, &c),
                invalid("Message must be at least 10 characters")
            );
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let c = FieldConstraint::email(true);
        let first = validate(FieldName::Email, "john@example.zz", &c);
        let second = validate(FieldName::Email, "john@example.zz", &c);
        assert_eq!(first, second);
    }
}
