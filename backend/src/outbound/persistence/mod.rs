//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapters**: the repository only translates between Diesel rows and
//!   domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async-safe pooling**: connections come from a `bb8` pool through
//!   `diesel-async`.
//! - **Strongly typed errors**: Diesel and pool failures map onto
//!   [`EmployeeRepositoryError`](crate::domain::ports::EmployeeRepositoryError).
//!
//! # Example
//!
//! ```no_run
//! use employees::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/employees")).await?;
//! let repo = DieselEmployeeRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_employee_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
