//! Domain primitives, ports and services.
//!
//! Purpose: define the employee entity, the uniform response envelope, the
//! message catalogue and the failure taxonomy, independent of HTTP and of the
//! storage engine.
//!
//! Public surface:
//! - Employee / EmployeeDraft / EmployeeId: persisted record, validated
//!   input, identifier.
//! - Envelope / Status: success/failure wrapper.
//! - MessageCatalog / MessageKey: shared template text.
//! - EmployeeError / ErrorKind: failure taxonomy.
//! - EmployeeServiceImpl: the repository-backed service.

pub mod employee;
pub mod employee_service;
pub mod envelope;
pub mod error;
pub mod messages;
pub mod ports;
pub mod validation;

pub use self::employee::{Employee, EmployeeDraft, EmployeeId};
pub use self::employee_service::EmployeeServiceImpl;
pub use self::envelope::{Envelope, Status, build_error_response, build_success_response};
pub use self::error::{EmployeeError, ErrorKind};
pub use self::messages::{MessageCatalog, MessageKey};
pub use self::validation::{FieldViolation, ValidationErrors, field_rank, sort_violations};
