//! Driving port for employee use-cases.
//!
//! HTTP handlers depend on this trait rather than on a concrete service so
//! they can be exercised against mocks.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeError, EmployeeId, Envelope};

/// Create, read, update and delete employees, answering with envelopes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Persist a new employee. `None` models an absent submission and fails
    /// with [`EmployeeError::InvalidInput`].
    async fn create(
        &self,
        employee: Option<EmployeeDraft>,
    ) -> Result<Envelope<Employee>, EmployeeError>;

    /// Every stored employee.
    async fn get_all(&self) -> Result<Envelope<Vec<Employee>>, EmployeeError>;

    /// Exactly one employee, or [`EmployeeError::NotFound`].
    async fn get_by_id(&self, id: EmployeeId) -> Result<Envelope<Employee>, EmployeeError>;

    /// Overwrite name, email and department of an existing employee.
    async fn update(
        &self,
        id: EmployeeId,
        employee: EmployeeDraft,
    ) -> Result<Envelope<Employee>, EmployeeError>;

    /// Remove an employee. Datastore failures are surfaced unchanged.
    async fn delete(&self, id: EmployeeId) -> Result<Envelope<()>, EmployeeError>;
}
