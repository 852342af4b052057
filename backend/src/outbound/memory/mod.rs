//! In-process `EmployeeRepository` adapter.
//!
//! Backs the service when no database URL is configured and gives
//! integration tests a real repository without a PostgreSQL cluster.
//! Identifiers are assigned from a counter that never reuses a value, matching
//! a `BIGSERIAL` column.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{EmployeeRecord, EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<EmployeeId, Employee>,
    last_id: i64,
}

/// Mutex-guarded, identifier-ordered employee table.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    table: Mutex<Table>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, EmployeeRepositoryError> {
        self.table
            .lock()
            .map_err(|_| EmployeeRepositoryError::connection("employee table lock poisoned"))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, record: &EmployeeRecord) -> Result<Employee, EmployeeRepositoryError> {
        let mut table = self.lock()?;
        let id = match record.id {
            Some(id) => {
                table.last_id = table.last_id.max(id.get());
                id
            }
            None => {
                table.last_id += 1;
                EmployeeId::new(table.last_id)
            }
        };
        let employee = Employee::new(id, record.draft.clone());
        table.rows.insert(id, employee.clone());
        debug!(%id, "in-memory employee saved");
        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        match self.lock()?.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(EmployeeRepositoryError::missing(id)),
        }
    }
}
