//! Employee HTTP handlers.
//!
//! ```text
//! POST   /employees        {"name":"John Doe","email":"john@example.com","department":"HR"}
//! GET    /employees
//! GET    /employees/{id}
//! PUT    /employees/{id}   {"name":...,"email":...,"department":...}
//! DELETE /employees/{id}
//! ```
//!
//! Every success is an [`Envelope`]; failures are translated by the
//! [`ResponseError`](actix_web::ResponseError) impl in
//! [`error`](crate::inbound::http::error).

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::{
    Employee, EmployeeDraft, EmployeeError, EmployeeId, Envelope, MessageCatalog, MessageKey,
    ValidationErrors,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{json_config, path_config};
use crate::inbound::http::state::HttpState;

/// Employee fields as submitted on the wire.
///
/// Every field is optional so that an absent field is reported as a
/// validation failure instead of a decode error. `id` is accepted for
/// symmetry with responses and otherwise ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct EmployeePayload {
    pub id: Option<i64>,
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "john@example.com")]
    pub email: Option<String>,
    #[schema(example = "HR")]
    pub department: Option<String>,
}

impl TryFrom<EmployeePayload> for EmployeeDraft {
    type Error = ValidationErrors;

    fn try_from(value: EmployeePayload) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.name.as_deref(),
            value.email.as_deref(),
            value.department.as_deref(),
        )
    }
}

fn template(key: MessageKey) -> &'static str {
    MessageCatalog::global().template(key)
}

fn parse_body(payload: Option<EmployeePayload>) -> Result<Option<EmployeeDraft>, EmployeeError> {
    payload
        .map(EmployeeDraft::try_from)
        .transpose()
        .map_err(EmployeeError::from)
}

/// Log the outcome of a service call, returning it unchanged.
fn logged<T>(outcome: ApiResult<Envelope<T>>, failure: MessageKey) -> ApiResult<Envelope<T>> {
    match &outcome {
        Ok(envelope) => info!("{}", envelope.message),
        Err(err) => error!(error = %err, kind = ?err.kind(), "{}", template(failure)),
    }
    outcome
}

/// Register the employee routes and their extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use employees::inbound::http::employees::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(create_employee)
        .service(list_employees)
        .service(get_employee)
        .service(update_employee)
        .service(delete_employee);
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Employee created", body = Envelope<Employee>),
        (status = 400, description = "Absent body, invalid fields or datastore failure", body = Envelope<Vec<String>>)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<Option<EmployeePayload>>,
) -> ApiResult<HttpResponse> {
    info!("{}", template(MessageKey::CreatingEmployee));
    let outcome = match parse_body(payload.into_inner()) {
        Ok(draft) => state.employees.create(draft).await,
        Err(err) => Err(err),
    };
    let envelope = logged(outcome, MessageKey::CreateFailed)?;
    Ok(HttpResponse::Created().json(envelope))
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = Envelope<Vec<Employee>>),
        (status = 400, description = "Datastore failure, `data` is null", body = Envelope<Vec<String>>)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Envelope<Vec<Employee>>>> {
    info!("{}", template(MessageKey::RetrievingEmployees));
    let envelope = logged(state.employees.get_all().await, MessageKey::ListFailed)?;
    info!("{}", template(MessageKey::RetrievedEmployees));
    Ok(web::Json(envelope))
}

/// Fetch one employee by identifier.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "The employee", body = Envelope<Employee>),
        (status = 400, description = "Malformed identifier or datastore failure, `data` is null", body = Envelope<Vec<String>>),
        (status = 404, description = "No such employee", body = String, content_type = "text/plain")
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Envelope<Employee>>> {
    let id = EmployeeId::new(path.into_inner());
    info!(%id, "{}", template(MessageKey::RetrievingEmployee));
    let envelope = logged(state.employees.get_by_id(id).await, MessageKey::FetchFailed)?;
    Ok(web::Json(envelope))
}

/// Overwrite an employee's name, email and department.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Employee updated", body = Envelope<Employee>),
        (status = 400, description = "Absent body, invalid fields or datastore failure", body = Envelope<Vec<String>>),
        (status = 404, description = "No such employee", body = String, content_type = "text/plain")
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<Option<EmployeePayload>>,
) -> ApiResult<web::Json<Envelope<Employee>>> {
    let id = EmployeeId::new(path.into_inner());
    info!(%id, "{}", template(MessageKey::UpdatingEmployee));
    let outcome = match parse_body(payload.into_inner()) {
        Ok(Some(draft)) => state.employees.update(id, draft).await,
        Ok(None) => Err(EmployeeError::invalid_input(template(
            MessageKey::EmployeeCannotBeNull,
        ))),
        Err(err) => Err(err),
    };
    let envelope = logged(outcome, MessageKey::UpdateFailed)?;
    Ok(web::Json(envelope))
}

/// Remove an employee.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee deleted, `data` is null", body = Envelope<Vec<String>>),
        (status = 400, description = "Malformed identifier or datastore failure, `data` is null", body = Envelope<Vec<String>>)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Envelope<()>>> {
    let id = EmployeeId::new(path.into_inner());
    info!(%id, "{}", template(MessageKey::DeletingEmployee));
    let envelope = logged(state.employees.delete(id).await, MessageKey::DeleteFailed)?;
    Ok(web::Json(envelope))
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
