//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use employees::Trace;
#[cfg(debug_assertions)]
use employees::doc::ApiDoc;
use employees::domain::EmployeeServiceImpl;
use employees::domain::ports::EmployeeService;
use employees::inbound::http::employees::configure;
use employees::inbound::http::health::{HealthState, live, ready};
use employees::inbound::http::state::HttpState;
use employees::outbound::memory::InMemoryEmployeeRepository;
use employees::outbound::persistence::DieselEmployeeRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Pick the repository adapter: PostgreSQL when a pool is configured,
/// in-memory otherwise.
fn build_employee_service(config: &ServerConfig) -> Arc<dyn EmployeeService> {
    match &config.db_pool {
        Some(pool) => {
            info!("storing employees in PostgreSQL");
            Arc::new(EmployeeServiceImpl::new(Arc::new(
                DieselEmployeeRepository::new(pool.clone()),
            )))
        }
        None => {
            info!("no database configured; storing employees in memory");
            Arc::new(EmployeeServiceImpl::new(Arc::new(
                InMemoryEmployeeRepository::new(),
            )))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the Actix HTTP server.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(build_employee_service(&config)));
    let server_health_state = health_state.clone();
    let ServerConfig { host, port, .. } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind((host.as_str(), port))?
    .run();

    info!(%host, port, "listening");
    health_state.mark_ready();
    Ok(server)
}
