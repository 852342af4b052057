//! Domain ports for the hexagonal boundary.
//!
//! - [`EmployeeRepository`] is driven: persistence adapters implement it.
//! - [`EmployeeService`] is driving: inbound adapters call it.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_repository;
mod employee_service;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRecord, EmployeeRepository, EmployeeRepositoryError};
#[cfg(test)]
pub use employee_service::MockEmployeeService;
pub use employee_service::EmployeeService;
