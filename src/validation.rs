//! Form field rules shared by the booking and contact forms

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// `local-part@domain.tld`, no whitespace and a single `@`
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}

/// Custom `validator` rule for email fields.
///
/// An empty value fails with code `required`, a non-empty value of the wrong
/// shape with code `email`. Only the latter is shown inline.
pub fn validate_email_shape(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("Email is required"));
        return Err(err);
    }
    if !is_valid_email(value) {
        let mut err = ValidationError::new("email");
        err.message = Some(Cow::Borrowed("Invalid email format"));
        return Err(err);
    }
    Ok(())
}

/// Parse a participant count the way a number input is read: leading
/// whitespace skipped, optional sign, then the leading run of digits.
/// Anything without digits, or negative, counts as zero.
pub fn parse_count(raw: &str) -> u32 {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if digits.is_empty() || negative {
        return 0;
    }

    digits
        .bytes()
        .fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add(u32::from(b - b'0')))
}

/// State of an email field after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStatus {
    Valid,
    /// Empty field: blocks submission but shows no inline marker
    Missing,
    /// Non-empty and malformed: shown inline
    Malformed,
}

/// Outcome of validating first name, last name and email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityCheck {
    pub first_name_ok: bool,
    pub last_name_ok: bool,
    pub email: EmailStatus,
}

impl IdentityCheck {
    pub fn passing() -> Self {
        Self {
            first_name_ok: true,
            last_name_ok: true,
            email: EmailStatus::Valid,
        }
    }

    /// Build from the errors reported by `Validate::validate`
    pub fn from_errors(result: Result<(), ValidationErrors>) -> Self {
        let mut check = Self::passing();
        let Err(errors) = result else {
            return check;
        };

        for (field, errs) in errors.field_errors() {
            let field: &str = &field;
            match field {
                "first_name" => check.first_name_ok = false,
                "last_name" => check.last_name_ok = false,
                "email" => {
                    check.email = if errs.iter().any(|e| e.code == "required") {
                        EmailStatus::Missing
                    } else {
                        EmailStatus::Malformed
                    }
                }
                _ => {}
            }
        }
        check
    }

    pub fn is_valid(&self) -> bool {
        self.first_name_ok && self.last_name_ok && self.email == EmailStatus::Valid
    }

    pub fn shows_first_name_error(&self) -> bool {
        !self.first_name_ok
    }

    pub fn shows_last_name_error(&self) -> bool {
        !self.last_name_ok
    }

    pub fn shows_email_error(&self) -> bool {
        self.email == EmailStatus::Malformed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("  anna.muller@example.de "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validate_email_shape_codes() {
        assert!(validate_email_shape("a@b.com").is_ok());
        assert_eq!(validate_email_shape("   ").unwrap_err().code, "required");
        assert_eq!(validate_email_shape("nope").unwrap_err().code, "email");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("2"), 2);
        assert_eq!(parse_count(" 12"), 12);
        assert_eq!(parse_count("+4"), 4);
        assert_eq!(parse_count("3abc"), 3);
        assert_eq!(parse_count("2.7"), 2);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("-1"), 0);
        assert_eq!(parse_count("-0"), 0);
        assert_eq!(parse_count("99999999999999"), u32::MAX);
    }

    #[test]
    fn test_identity_check_display_flags() {
        let check = IdentityCheck {
            first_name_ok: false,
            last_name_ok: true,
            email: EmailStatus::Missing,
        };
        assert!(!check.is_valid());
        assert!(check.shows_first_name_error());
        assert!(!check.shows_last_name_error());
        assert!(!check.shows_email_error());
    }
}
