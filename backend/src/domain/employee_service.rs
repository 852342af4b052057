//! Employee service implementing the driving port.
//!
//! Business rules live here: the null check on create, the existence check
//! shared by read and update, and the field copy on update. Everything else
//! is delegated to the repository port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{EmployeeRecord, EmployeeRepository, EmployeeService};
use crate::domain::{
    Employee, EmployeeDraft, EmployeeError, EmployeeId, Envelope, MessageCatalog, MessageKey,
    build_success_response,
};

/// Repository-backed [`EmployeeService`].
#[derive(Clone)]
pub struct EmployeeServiceImpl<R> {
    repo: Arc<R>,
    messages: &'static MessageCatalog,
}

impl<R> EmployeeServiceImpl<R> {
    /// Create a service over `repo` using the process-wide catalogue.
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_catalog(repo, MessageCatalog::global())
    }

    /// Create a service with an explicit catalogue reference.
    pub fn with_catalog(repo: Arc<R>, messages: &'static MessageCatalog) -> Self {
        Self { repo, messages }
    }
}

impl<R> EmployeeServiceImpl<R>
where
    R: EmployeeRepository,
{
    async fn find_existing(&self, id: EmployeeId) -> Result<Employee, EmployeeError> {
        debug!(%id, "looking up employee");
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            EmployeeError::not_found(self.messages.template(MessageKey::EmployeeNotFound))
        })
    }
}

#[async_trait]
impl<R> EmployeeService for EmployeeServiceImpl<R>
where
    R: EmployeeRepository,
{
    async fn create(
        &self,
        employee: Option<EmployeeDraft>,
    ) -> Result<Envelope<Employee>, EmployeeError> {
        let Some(draft) = employee else {
            return Err(EmployeeError::invalid_input(
                self.messages.template(MessageKey::EmployeeCannotBeNull),
            ));
        };

        let saved = self.repo.save(&EmployeeRecord::unsaved(draft)).await?;
        debug!(id = %saved.id(), "employee inserted");
        let id = saved.id();
        Ok(build_success_response(
            self.messages,
            Some(saved),
            MessageKey::CreatedEmployee,
            &[&id],
        ))
    }

    async fn get_all(&self) -> Result<Envelope<Vec<Employee>>, EmployeeError> {
        let employees = self.repo.find_all().await?;
        let count = employees.len();
        debug!(count, "employees loaded");
        Ok(build_success_response(
            self.messages,
            Some(employees),
            MessageKey::EmployeeCountRetrieved,
            &[&count],
        ))
    }

    async fn get_by_id(&self, id: EmployeeId) -> Result<Envelope<Employee>, EmployeeError> {
        let employee = self.find_existing(id).await?;
        Ok(build_success_response(
            self.messages,
            Some(employee),
            MessageKey::RetrievedEmployee,
            &[&id],
        ))
    }

    async fn update(
        &self,
        id: EmployeeId,
        employee: EmployeeDraft,
    ) -> Result<Envelope<Employee>, EmployeeError> {
        let mut existing = self.find_existing(id).await?;
        existing.apply(employee);
        let saved = self.repo.save(&EmployeeRecord::from(&existing)).await?;
        debug!(%id, "employee overwritten");
        Ok(build_success_response(
            self.messages,
            Some(saved),
            MessageKey::UpdatedEmployee,
            &[],
        ))
    }

    async fn delete(&self, id: EmployeeId) -> Result<Envelope<()>, EmployeeError> {
        self.repo.delete_by_id(id).await?;
        debug!(%id, "employee removed");
        Ok(build_success_response(
            self.messages,
            None,
            MessageKey::DeletedEmployee,
            &[],
        ))
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
