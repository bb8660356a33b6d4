// Built-in rule checks
//
// Each check returns `Err(Violation)` for a broken rule so callers can feed
// the result straight into `Violations::check` without short-circuiting.

use crate::Violation;

/// Validates that an optional string is present and not blank
pub struct NotEmpty;

impl NotEmpty {
    pub fn check(value: Option<&str>, message: impl Into<String>) -> Result<(), Violation> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(()),
            _ => Err(Violation::new(message).with_context("constraint", "notEmpty")),
        }
    }

    /// Validates that a byte sequence is not empty
    pub fn check_bytes(value: &[u8], message: impl Into<String>) -> Result<(), Violation> {
        if value.is_empty() {
            Err(Violation::new(message).with_context("constraint", "notEmpty"))
        } else {
            Ok(())
        }
    }
}

/// Validates maximum string length, counted in characters.
///
/// The limit itself is allowed. Absent values always pass.
pub struct MaxLength(pub usize);

impl MaxLength {
    pub fn check(
        &self,
        value: Option<&str>,
        message: impl FnOnce(usize) -> String,
    ) -> Result<(), Violation> {
        let Some(value) = value else {
            return Ok(());
        };

        let actual = value.chars().count();
        if actual > self.0 {
            Err(Violation::new(message(actual))
                .with_context("constraint", "maxLength")
                .with_context("limit", self.0)
                .with_context("actual", actual))
        } else {
            Ok(())
        }
    }
}

/// Validates maximum collection size. `len > limit` fails.
pub struct MaxItems(pub usize);

impl MaxItems {
    pub fn check(
        &self,
        len: usize,
        message: impl FnOnce(usize) -> String,
    ) -> Result<(), Violation> {
        if len > self.0 {
            Err(Violation::new(message(len))
                .with_context("constraint", "maxItems")
                .with_context("limit", self.0)
                .with_context("actual", len))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(NotEmpty::check(Some("name"), "required").is_ok());
        assert!(NotEmpty::check(Some("   "), "required").is_err());
        assert!(NotEmpty::check(None, "required").is_err());
    }

    #[test]
    fn test_not_empty_bytes() {
        assert!(NotEmpty::check_bytes(b"x", "required").is_ok());
        assert!(NotEmpty::check_bytes(b"", "required").is_err());
    }

    #[test]
    fn test_max_length_boundary_inclusive() {
        let rule = MaxLength(5);
        assert!(rule.check(Some("12345"), |n| format!("{}", n)).is_ok());

        let err = rule.check(Some("123456"), |n| format!("actual {}", n)).unwrap_err();
        assert_eq!(err.message, "actual 6");
        assert_eq!(err.context.get("limit").map(String::as_str), Some("5"));
    }

    #[test]
    fn test_max_length_counts_characters() {
        // four characters, nine bytes
        assert!(MaxLength(4).check(Some("ééé€"), |_| String::new()).is_ok());
    }

    #[test]
    fn test_max_length_absent() {
        assert!(MaxLength(0).check(None, |_| String::new()).is_ok());
    }

    #[test]
    fn test_max_items() {
        assert!(MaxItems(25).check(25, |_| String::new()).is_ok());
        assert!(MaxItems(25).check(26, |_| String::new()).is_err());
    }
}
