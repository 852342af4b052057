//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EmployeeService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeService>,
}

impl HttpState {
    /// Construct state around an employee service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employees::domain::EmployeeServiceImpl;
    /// use employees::inbound::http::state::HttpState;
    /// use employees::outbound::memory::InMemoryEmployeeRepository;
    ///
    /// let repo = Arc::new(InMemoryEmployeeRepository::new());
    /// let state = HttpState::new(Arc::new(EmployeeServiceImpl::new(repo)));
    /// let _employees = state.employees.clone();
    /// ```
    pub fn new(employees: Arc<dyn EmployeeService>) -> Self {
        Self { employees }
    }
}
