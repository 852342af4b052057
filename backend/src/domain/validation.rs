//! Field constraints for submitted employee data.
//!
//! Violations are collected rather than short-circuited so clients see every
//! problem at once, and are reported in a fixed field order: name, email,
//! department, then anything else.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub(crate) const NAME_REQUIRED: &str = "Name is required";
pub(crate) const EMAIL_REQUIRED: &str = "Email is required";
pub(crate) const EMAIL_INVALID: &str = "Email should be valid";
pub(crate) const DEPARTMENT_REQUIRED: &str = "Department is required";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// A single violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: String,
    message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Reporting priority of a field; lower sorts first.
pub fn field_rank(field: &str) -> u8 {
    match field {
        "name" => 0,
        "email" => 1,
        "department" => 2,
        _ => u8::MAX,
    }
}

/// Order violations by [`field_rank`], keeping submission order within a
/// rank.
pub fn sort_violations(violations: &mut [FieldViolation]) {
    violations.sort_by_key(|violation| field_rank(violation.field()));
}

/// Non-empty, ordered set of violations for one submission.
///
/// # Examples
/// ```
/// use employees::domain::{FieldViolation, ValidationErrors};
///
/// let errors = ValidationErrors::new(vec![
///     FieldViolation::new("department", "Department is required"),
///     FieldViolation::new("name", "Name is required"),
/// ]);
/// assert_eq!(
///     errors.messages(),
///     vec!["name: Name is required", "department: Department is required"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new(mut violations: Vec<FieldViolation>) -> Self {
        sort_violations(&mut violations);
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// `"<field>: <message>"` strings in reporting order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Whether `value` is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub(crate) fn check_required(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<&str>,
    message: &str,
) {
    if is_blank(value) {
        violations.push(FieldViolation::new(field, message));
    }
}

pub(crate) fn check_email(violations: &mut Vec<FieldViolation>, value: Option<&str>) {
    match value {
        Some(email) if !email.trim().is_empty() => {
            if !is_valid_email(email) {
                violations.push(FieldViolation::new("email", EMAIL_INVALID));
            }
        }
        _ => violations.push(FieldViolation::new("email", EMAIL_REQUIRED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("john@example.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("invalid-email", false)]
    #[case("missing@", false)]
    #[case("@example.com", false)]
    #[case("two@@example.com", false)]
    #[case("spaces in@example.com", false)]
    fn email_syntax(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid);
    }

    #[rstest]
    fn sort_puts_unknown_fields_last_and_is_stable() {
        let mut violations = vec![
            FieldViolation::new("zeta", "first other"),
            FieldViolation::new("department", "d"),
            FieldViolation::new("alpha", "second other"),
            FieldViolation::new("email", "e"),
            FieldViolation::new("name", "n"),
        ];
        sort_violations(&mut violations);
        let fields: Vec<&str> = violations.iter().map(FieldViolation::field).collect();
        assert_eq!(fields, ["name", "email", "department", "zeta", "alpha"]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn blank_email_is_required_not_invalid(#[case] email: Option<&str>) {
        let mut violations = Vec::new();
        check_email(&mut violations, email);
        assert_eq!(violations, vec![FieldViolation::new("email", EMAIL_REQUIRED)]);
    }

    #[rstest]
    fn violation_display_prefixes_field() {
        let violation = FieldViolation::new("name", NAME_REQUIRED);
        assert_eq!(violation.to_string(), "name: Name is required");
    }
}
