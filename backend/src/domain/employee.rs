//! Employee entity and validated input.
//!
//! An [`Employee`] is always a persisted record and therefore always carries
//! an identifier. Submissions for create and update travel as
//! [`EmployeeDraft`], which has no identifier and can only be built through
//! validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{
    DEPARTMENT_REQUIRED, FieldViolation, NAME_REQUIRED, ValidationErrors, check_email,
    check_required,
};

/// Datastore-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated employee fields awaiting persistence.
///
/// # Examples
/// ```
/// use employees::domain::EmployeeDraft;
///
/// let draft = EmployeeDraft::try_from_parts(Some("Ada"), Some("ada@example.com"), Some("R&D"))
///     .expect("valid draft");
/// assert_eq!(draft.name(), "Ada");
///
/// let errors = EmployeeDraft::try_from_parts(Some(""), Some("nope"), None)
///     .expect_err("invalid draft");
/// assert_eq!(errors.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    name: String,
    email: String,
    department: String,
}

impl EmployeeDraft {
    /// Validate raw field values, reporting every violation at once.
    pub fn try_from_parts(
        name: Option<&str>,
        email: Option<&str>,
        department: Option<&str>,
    ) -> Result<Self, ValidationErrors> {
        let mut violations: Vec<FieldViolation> = Vec::new();
        check_required(&mut violations, "name", name, NAME_REQUIRED);
        check_email(&mut violations, email);
        check_required(&mut violations, "department", department, DEPARTMENT_REQUIRED);

        match (name, email, department) {
            (Some(name), Some(email), Some(department)) if violations.is_empty() => Ok(Self {
                name: name.to_owned(),
                email: email.to_owned(),
                department: department.to_owned(),
            }),
            _ => Err(ValidationErrors::new(violations)),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn department(&self) -> &str {
        self.department.as_str()
    }
}

/// Persisted employee record.
///
/// Serialises as `{"id":1,"name":"...","email":"...","department":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    #[schema(value_type = i64, example = 1)]
    id: EmployeeId,
    #[schema(example = "John Doe")]
    name: String,
    #[schema(example = "john@example.com")]
    email: String,
    #[schema(example = "HR")]
    department: String,
}

impl Employee {
    /// Materialise a stored record from its identifier and fields.
    pub fn new(id: EmployeeId, draft: EmployeeDraft) -> Self {
        let EmployeeDraft {
            name,
            email,
            department,
        } = draft;
        Self {
            id,
            name,
            email,
            department,
        }
    }

    /// Rebuild a record read back from storage. Fields are taken as stored;
    /// validation only applies to inbound submissions.
    pub(crate) fn from_stored(
        id: EmployeeId,
        name: String,
        email: String,
        department: String,
    ) -> Self {
        Self {
            id,
            name,
            email,
            department,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn department(&self) -> &str {
        self.department.as_str()
    }

    /// Overwrite name, email and department in place. The identifier is
    /// never touched.
    pub fn apply(&mut self, draft: EmployeeDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.department = draft.department;
    }

    /// Fields of this record as a draft, detached from the identifier.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}
