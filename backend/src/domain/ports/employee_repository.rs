//! Driven port for employee persistence.
//!
//! The [`EmployeeRepository`] trait is the generic CRUD surface the service
//! relies on. Adapters translate it to a concrete datastore; they hold no
//! business rules.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "employee repository query failed: {message}",
        /// The addressed row does not exist.
        Missing { id: EmployeeId } =>
            "no employee entity with id {id} exists",
    }
}

/// Record handed to [`EmployeeRepository::save`].
///
/// Without an identifier the datastore assigns one and inserts; with an
/// identifier the stored row is overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: Option<EmployeeId>,
    pub draft: EmployeeDraft,
}

impl EmployeeRecord {
    /// A record that has never been stored.
    pub fn unsaved(draft: EmployeeDraft) -> Self {
        Self { id: None, draft }
    }
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id()),
            draft: employee.to_draft(),
        }
    }
}

/// Generic CRUD access to the employee table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert or overwrite a record, returning it as stored.
    async fn save(&self, record: &EmployeeRecord) -> Result<Employee, EmployeeRepositoryError>;

    /// Every stored employee in storage order.
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Fetch one employee; `None` when the identifier is unknown.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Delete by identifier.
    ///
    /// Returns [`EmployeeRepositoryError::Missing`] when no row matched.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError>;
}
