//! Fixed catalogue of message templates.
//!
//! The same templates feed both log lines and envelope messages so operators
//! and clients see identical wording. The catalogue is built once on first
//! access and only ever handed out by shared reference.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::OnceLock;

/// Key identifying a template in the [`MessageCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    CreatingEmployee,
    CreatedEmployee,
    RetrievingEmployees,
    RetrievedEmployees,
    EmployeeCountRetrieved,
    RetrievingEmployee,
    RetrievedEmployee,
    UpdatingEmployee,
    UpdatedEmployee,
    DeletingEmployee,
    DeletedEmployee,
    EmployeeNotFound,
    EmployeeCannotBeNull,
    CreateFailed,
    ListFailed,
    FetchFailed,
    UpdateFailed,
    DeleteFailed,
    ValidationFailed,
    ExceptionOccurred,
}

impl MessageKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::CreatingEmployee,
        Self::CreatedEmployee,
        Self::RetrievingEmployees,
        Self::RetrievedEmployees,
        Self::EmployeeCountRetrieved,
        Self::RetrievingEmployee,
        Self::RetrievedEmployee,
        Self::UpdatingEmployee,
        Self::UpdatedEmployee,
        Self::DeletingEmployee,
        Self::DeletedEmployee,
        Self::EmployeeNotFound,
        Self::EmployeeCannotBeNull,
        Self::CreateFailed,
        Self::ListFailed,
        Self::FetchFailed,
        Self::UpdateFailed,
        Self::DeleteFailed,
        Self::ValidationFailed,
        Self::ExceptionOccurred,
    ];

    const fn default_template(self) -> &'static str {
        match self {
            Self::CreatingEmployee => "Creating new employee",
            Self::CreatedEmployee => "Employee created successfully with ID: {}",
            Self::RetrievingEmployees => "Retrieving employee records",
            Self::RetrievedEmployees => "Retrieved employee records",
            Self::EmployeeCountRetrieved => "Total of {} employee records retrieved successfully",
            Self::RetrievingEmployee => "Retrieving employee record",
            Self::RetrievedEmployee => "Retrieved employee record with ID: {}",
            Self::UpdatingEmployee => "Updating employee record",
            Self::UpdatedEmployee => "Updated employee record",
            Self::DeletingEmployee => "Deleting employee record",
            Self::DeletedEmployee => "Employee deleted from the database",
            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeCannotBeNull => "Employee cannot be null",
            Self::CreateFailed => "Exception occurred while creating an employee",
            Self::ListFailed => "Exception occurred while retrieving employees",
            Self::FetchFailed => "Exception occurred while retrieving employee",
            Self::UpdateFailed => "Exception occurred while updating employee",
            Self::DeleteFailed => "Exception occurred while deleting employee",
            Self::ValidationFailed => "Validation failed",
            Self::ExceptionOccurred => "Exception occurred. Reason :",
        }
    }
}

/// Read-only mapping from [`MessageKey`] to template text.
///
/// Templates use `{}` as a positional placeholder.
///
/// # Examples
/// ```
/// use employees::domain::{MessageCatalog, MessageKey};
///
/// let catalog = MessageCatalog::global();
/// assert_eq!(
///     catalog.render(MessageKey::CreatedEmployee, &[&7]),
///     "Employee created successfully with ID: 7"
/// );
/// ```
#[derive(Debug)]
pub struct MessageCatalog {
    templates: HashMap<MessageKey, &'static str>,
}

static CATALOG: OnceLock<MessageCatalog> = OnceLock::new();

impl MessageCatalog {
    fn build() -> Self {
        let templates = MessageKey::ALL
            .into_iter()
            .map(|key| (key, key.default_template()))
            .collect();
        Self { templates }
    }

    /// Process-wide catalogue, initialised on first use.
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(Self::build)
    }

    /// Raw template text for `key`.
    pub fn template(&self, key: MessageKey) -> &'static str {
        self.templates
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_template())
    }

    /// Render `key`, substituting `args` into the placeholders in order.
    ///
    /// Surplus placeholders are left untouched and surplus arguments are
    /// ignored.
    pub fn render(&self, key: MessageKey, args: &[&dyn Display]) -> String {
        render_template(self.template(key), args)
    }
}

fn render_template(template: &str, args: &[&dyn Display]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("{}") {
        let (head, tail) = rest.split_at(pos);
        rendered.push_str(head);
        match args.next() {
            Some(arg) => rendered.push_str(&arg.to_string()),
            None => rendered.push_str("{}"),
        }
        rest = tail.get(2..).unwrap_or_default();
    }
    rendered.push_str(rest);
    rendered
}
