//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the employee endpoints, the health probes and the
//! payload schemas. The document backs Swagger UI in debug builds and is
//! exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Employee, Status};
use crate::inbound::http::employees::EmployeePayload;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee records API",
        description = "Create, list, fetch, update and delete employee records. \
            Every success is wrapped in a status/message/data envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Employee, EmployeePayload, Status)),
    tags(
        (name = "employees", description = "Employee record management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
