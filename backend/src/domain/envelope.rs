//! Uniform success/failure wrapper returned by every employee operation.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::messages::{MessageCatalog, MessageKey};

/// Outcome tag carried by every [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Failure,
}

/// Response envelope.
///
/// ## Invariants
/// - A [`Status::Failure`] envelope carries either no data or a diagnostic
///   list, never a domain payload. The constructors in this module uphold
///   this; there is no public way to build a failure around an `Employee`.
///
/// Serialises as `{"status":"SUCCESS","message":"...","data":...}` with
/// `data` always present (`null` when empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Borrow the payload, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Whether the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

impl Envelope<Vec<String>> {
    /// Failure envelope listing diagnostics, used for validation errors.
    pub fn diagnostics(message: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            status: Status::Failure,
            message: message.into(),
            data: Some(entries),
        }
    }
}

/// Build a SUCCESS envelope around `data` with a message rendered from
/// `template` and `args`.
///
/// # Examples
/// ```
/// use employees::domain::{MessageCatalog, MessageKey, Status, build_success_response};
///
/// let envelope = build_success_response(
///     MessageCatalog::global(),
///     Some(vec![1, 2, 3]),
///     MessageKey::EmployeeCountRetrieved,
///     &[&3],
/// );
/// assert_eq!(envelope.status, Status::Success);
/// assert_eq!(envelope.message, "Total of 3 employee records retrieved successfully");
/// ```
pub fn build_success_response<T>(
    catalog: &MessageCatalog,
    data: Option<T>,
    template: MessageKey,
    args: &[&dyn Display],
) -> Envelope<T> {
    Envelope {
        status: Status::Success,
        message: catalog.render(template, args),
        data,
    }
}

/// Build a FAILURE envelope whose message is the template text followed by
/// the failure's diagnostic text. The payload is always empty.
pub fn build_error_response<T>(
    catalog: &MessageCatalog,
    failure: &dyn Display,
    template: MessageKey,
) -> Envelope<T> {
    Envelope {
        status: Status::Failure,
        message: format!("{} {failure}", catalog.template(template)),
        data: None,
    }
}
