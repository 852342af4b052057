//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! One statement per operation; each runs in the database's implicit
//! transaction. Inserts without an identifier let the `BIGSERIAL` column
//! assign one, saves with an identifier upsert on the primary key.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EmployeeRecord, EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{EmployeeChanges, EmployeeRow, NewEmployeeRow, StoredEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Diesel-backed implementation of the `EmployeeRepository` port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    map_basic_pool_error(error, |message| {
        EmployeeRepositoryError::connection(format!("pool checkout failed: {message}"))
    })
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    map_basic_diesel_error(
        error,
        EmployeeRepositoryError::query,
        EmployeeRepositoryError::connection,
    )
}

/// Convert a database row into a domain employee.
fn row_to_employee(row: EmployeeRow) -> Employee {
    Employee::from_stored(EmployeeId::new(row.id), row.name, row.email, row.department)
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn save(&self, record: &EmployeeRecord) -> Result<Employee, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let draft = &record.draft;

        let row: EmployeeRow = match record.id {
            None => {
                let new_row = NewEmployeeRow {
                    name: draft.name(),
                    email: draft.email(),
                    department: draft.department(),
                };
                diesel::insert_into(employees::table)
                    .values(&new_row)
                    .returning(EmployeeRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?
            }
            Some(id) => {
                let stored = StoredEmployeeRow {
                    id: id.get(),
                    name: draft.name(),
                    email: draft.email(),
                    department: draft.department(),
                };
                let changes = EmployeeChanges {
                    name: draft.name(),
                    email: draft.email(),
                    department: draft.department(),
                };
                diesel::insert_into(employees::table)
                    .values(&stored)
                    .on_conflict(employees::id)
                    .do_update()
                    .set(&changes)
                    .returning(EmployeeRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?
            }
        };

        debug!(id = row.id, "employee row written");
        Ok(row_to_employee(row))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_employee).collect())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_employee))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(employees::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(EmployeeRepositoryError::missing(id));
        }
        Ok(())
    }
}
