//! End-to-end HTTP coverage of the employee endpoints over the in-memory
//! repository.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use employees::Trace;
use employees::domain::{Employee, EmployeeServiceImpl, Envelope, Status};
use employees::inbound::http::employees::configure;
use employees::inbound::http::state::HttpState;
use employees::outbound::memory::InMemoryEmployeeRepository;
use rstest::rstest;
use serde_json::{Value, json};

fn app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repo = Arc::new(InMemoryEmployeeRepository::new());
    let state = HttpState::new(Arc::new(EmployeeServiceImpl::new(repo)));
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}

fn john() -> Value {
    json!({"name": "John Doe", "email": "john@example.com", "department": "HR"})
}

#[actix_web::test]
async fn create_then_fetch_round_trip() {
    let app = actix_test::init_service(app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/employees")
        .set_json(john())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key("trace-id"));
    let created: Envelope<Employee> = actix_test::read_body_json(response).await;
    let employee = created.data().expect("created employee").clone();
    assert_eq!(employee.name(), "John Doe");
    assert_eq!(
        created.message,
        format!("Employee created successfully with ID: {}", employee.id())
    );

    let request = actix_test::TestRequest::get()
        .uri(&format!("/employees/{}", employee.id()))
        .to_request();
    let fetched: Envelope<Employee> = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(fetched.status, Status::Success);
    assert_eq!(fetched.data(), Some(&employee));
}

#[rstest]
#[case(
    json!({"name": "", "email": "invalid-email", "department": ""}),
    json!(["name: Name is required", "email: Email should be valid", "department: Department is required"])
)]
#[case(
    json!({"name": "Ada", "email": "", "department": "R&D"}),
    json!(["email: Email is required"])
)]
#[actix_web::test]
async fn invalid_submission_is_rejected_and_not_stored(
    #[case] payload: Value,
    #[case] expected: Value,
) {
    let app = actix_test::init_service(app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/employees")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"status": "FAILURE", "message": "Validation failed", "data": expected})
    );

    let request = actix_test::TestRequest::get().uri("/employees").to_request();
    let listed: Envelope<Vec<Employee>> = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(listed.data().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn unknown_identifier_is_plain_text_not_found() {
    let app = actix_test::init_service(app()).await;

    let request = actix_test::TestRequest::get().uri("/employees/999").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = actix_test::read_body(response).await;
    assert_eq!(&body[..], b"Employee not found");
}

#[actix_web::test]
async fn list_reports_count_in_insertion_order() {
    let app = actix_test::init_service(app()).await;
    for name in ["Ada", "Grace", "Linus"] {
        let request = actix_test::TestRequest::post()
            .uri("/employees")
            .set_json(json!({"name": name, "email": "dev@example.com", "department": "Eng"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = actix_test::TestRequest::get().uri("/employees").to_request();
    let listed: Envelope<Vec<Employee>> = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(
        listed.message,
        "Total of 3 employee records retrieved successfully"
    );
    let names: Vec<&str> = listed
        .data()
        .expect("employee list")
        .iter()
        .map(Employee::name)
        .collect();
    assert_eq!(names, ["Ada", "Grace", "Linus"]);
}

#[actix_web::test]
async fn update_overwrites_fields_but_keeps_identifier() {
    let app = actix_test::init_service(app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/employees")
        .set_json(john())
        .to_request();
    let created: Envelope<Employee> = actix_test::call_and_read_body_json(&app, request).await;
    let id = created.data().expect("created").id();

    let request = actix_test::TestRequest::put()
        .uri(&format!("/employees/{id}"))
        .set_json(json!({
            "id": 12345,
            "name": "Jane Roe",
            "email": "jane@example.com",
            "department": "Finance",
        }))
        .to_request();
    let updated: Envelope<Employee> = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(updated.message, "Updated employee record");
    let employee = updated.data().expect("updated");
    assert_eq!(employee.id(), id);
    assert_eq!(employee.email(), "jane@example.com");

    let request = actix_test::TestRequest::put()
        .uri("/employees/999")
        .set_json(john())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_removes_record_and_second_delete_fails() {
    let app = actix_test::init_service(app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/employees")
        .set_json(john())
        .to_request();
    let created: Envelope<Employee> = actix_test::call_and_read_body_json(&app, request).await;
    let id = created.data().expect("created").id();

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/employees/{id}"))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(
        body,
        json!({"status": "SUCCESS", "message": "Employee deleted from the database", "data": null})
    );

    let request = actix_test::TestRequest::get()
        .uri(&format!("/employees/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/employees/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let failure: Envelope<()> = actix_test::read_body_json(response).await;
    assert_eq!(failure.status, Status::Failure);
    assert!(failure.message.starts_with("Exception occurred. Reason :"));
}

#[actix_web::test]
async fn null_body_is_invalid_input() {
    let app = actix_test::init_service(app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/employees")
        .insert_header(("content-type", "application/json"))
        .set_payload("null")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "status": "FAILURE",
            "message": "Exception occurred. Reason : Employee cannot be null",
            "data": null,
        })
    );
}

#[actix_web::test]
async fn identifiers_are_never_reused_after_delete() {
    let app = actix_test::init_service(app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/employees")
        .set_json(john())
        .to_request();
    let first: Envelope<Employee> = actix_test::call_and_read_body_json(&app, request).await;
    let first_id = first.data().expect("first").id();

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/employees/{first_id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = actix_test::TestRequest::post()
        .uri("/employees")
        .set_json(john())
        .to_request();
    let second: Envelope<Employee> = actix_test::call_and_read_body_json(&app, request).await;
    assert!(second.data().expect("second").id() > first_id);
}
