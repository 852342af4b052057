//! HTTP adapter mapping for employee errors.
//!
//! Purpose: keep [`EmployeeError`] HTTP-agnostic while letting Actix handlers
//! turn each failure kind into its status code and body shape:
//!
//! | kind            | status | body                                   |
//! |-----------------|--------|----------------------------------------|
//! | `NotFound`      | 404    | raw message as `text/plain`            |
//! | `Validation`    | 400    | envelope listing each violated field   |
//! | `InvalidInput`  | 400    | generic failure envelope               |
//! | `Unclassified`  | 400    | generic failure envelope               |
//!
//! Request decoding failures (bad path identifiers, unreadable JSON) reuse
//! the generic failure envelope through [`json_config`] and [`path_config`].

use std::fmt;

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, web};
use tracing::warn;

use crate::domain::{
    EmployeeError, Envelope, MessageCatalog, MessageKey, build_error_response,
};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, EmployeeError>;

fn failure_envelope(failure: &dyn fmt::Display) -> Envelope<()> {
    build_error_response(
        MessageCatalog::global(),
        failure,
        MessageKey::ExceptionOccurred,
    )
}

impl ResponseError for EmployeeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) | Self::Validation(_) | Self::Unclassified(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Self::NotFound(message) => builder
                .content_type(ContentType::plaintext())
                .body(message.clone()),
            Self::Validation(errors) => builder.json(Envelope::diagnostics(
                MessageCatalog::global().template(MessageKey::ValidationFailed),
                errors.messages(),
            )),
            Self::InvalidInput(_) | Self::Unclassified(_) => builder.json(failure_envelope(self)),
        }
    }
}

fn decode_failure<E>(error: E) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    warn!(%error, "request could not be decoded");
    let response = HttpResponse::BadRequest().json(failure_envelope(&error));
    InternalError::from_response(error, response).into()
}

/// JSON extractor settings answering unreadable bodies with a failure
/// envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error, _req| decode_failure(error))
}

/// Path extractor settings answering malformed identifiers with a failure
/// envelope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|error, _req| decode_failure(error))
}
