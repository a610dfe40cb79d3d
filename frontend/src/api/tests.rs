#![cfg(not(coverage))]

use super::*;
use crate::state::session::SessionStore;
use crate::test_support::helpers::{attendance_json, employee_json};
use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

fn api_client(server: &MockServer, session: SessionStore) -> ApiClient {
    ApiClient::with_session(session).with_base_url(server.base_url())
}

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn login_stores_token_and_later_calls_carry_bearer() {
    let server = MockServer::start_async().await;
    let login_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/admin/login")
                .header("content-type", "application/x-www-form-urlencoded")
                .body_contains("username=admin");
            then.status(200)
                .json_body(json!({ "access_token": "tok1", "token_type": "bearer" }));
        })
        .await;
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/employees")
                .header("Authorization", "Bearer tok1");
            then.status(200).json_body(json!([]));
        })
        .await;

    let session = SessionStore::in_memory();
    let client = api_client(&server, session.clone());
    let login = client
        .login(LoginRequest {
            username: "admin".into(),
            password: "admin@123".into(),
        })
        .await
        .unwrap();
    assert_eq!(login.access_token, "tok1");
    assert_eq!(session.get_token().as_deref(), Some("tok1"));

    let employees = client.list_employees().await.unwrap();
    assert!(employees.is_empty());
    login_mock.assert_async().await;
    list_mock.assert_async().await;
}

#[tokio::test]
async fn rejected_login_keeps_existing_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/admin/login");
            then.status(401)
                .json_body(json!({ "detail": "Invalid credentials" }));
        })
        .await;

    let session = SessionStore::with_token("still-valid");
    let client = api_client(&server, session.clone());
    let err = client
        .login(LoginRequest {
            username: "admin".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert!(err.is_auth());
    assert_eq!(err.detail(), Some("Invalid credentials"));
    assert_eq!(session.get_token().as_deref(), Some("still-valid"));
}

#[tokio::test]
async fn login_without_token_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/admin/login");
            then.status(200).json_body(json!({ "access_token": "" }));
        })
        .await;

    let session = SessionStore::in_memory();
    let client = api_client(&server, session.clone());
    let err = client
        .login(LoginRequest {
            username: "admin".into(),
            password: "admin@123".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code(), "DECODE_ERROR");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/employees");
            then.status(401)
                .json_body(json!({ "detail": "Could not validate credentials" }));
        })
        .await;

    let session = SessionStore::with_token("expired");
    let client = api_client(&server, session.clone());
    let err = client.list_employees().await.unwrap_err();

    assert!(err.is_auth());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn employee_endpoints_round_trip() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/employees");
            then.status(200)
                .json_body(json!([employee_json(1, "E001", "Jane Doe")]));
        })
        .await;
    let create_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/employees").json_body(json!({
                "employee_id": "E002",
                "full_name": "John Roe",
                "email": "john@example.com",
                "department": "Sales"
            }));
            then.status(201)
                .json_body(employee_json(2, "E002", "John Roe"));
        })
        .await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/employees/2");
            then.status(204);
        })
        .await;

    let client = api_client(&server, SessionStore::with_token("tok"));
    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].full_name, "Jane Doe");

    let created = client
        .create_employee(&CreateEmployee {
            employee_id: "E002".into(),
            full_name: "John Roe".into(),
            email: "john@example.com".into(),
            department: "Sales".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 2);

    client.delete_employee(2).await.unwrap();
    create_mock.assert_async().await;
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn null_list_body_is_treated_as_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/employees");
            then.status(200)
                .header("content-type", "application/json")
                .body("null");
        })
        .await;

    let client = api_client(&server, SessionStore::with_token("tok"));
    assert!(client.list_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn validation_and_server_errors_are_classified() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/employees");
            then.status(400)
                .json_body(json!({ "detail": "Employee ID already exists" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/dashboard");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let session = SessionStore::with_token("tok");
    let client = api_client(&server, session.clone());
    let err = client
        .create_employee(&CreateEmployee {
            employee_id: "E001".into(),
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            department: "HR".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(err.user_message("Failed"), "Employee ID already exists");

    let err = client.dashboard_summary().await.unwrap_err();
    assert_eq!(err.code(), "SERVER_ERROR");
    assert_eq!(err.status(), Some(503));
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn attendance_endpoints_pass_ranges_and_ids() {
    let server = MockServer::start_async().await;
    let mark_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/attendance").json_body(json!({
                "employee_id": 1,
                "date": "2025-02-03",
                "status": "Present"
            }));
            then.status(201)
                .json_body(attendance_json(10, 1, "2025-02-03", "Present"));
        })
        .await;
    let range_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/attendance")
                .query_param("start_date", "2025-02-01")
                .query_param("end_date", "2025-02-28");
            then.status(200)
                .json_body(json!([attendance_json(10, 1, "2025-02-03", "Present")]));
        })
        .await;
    let employee_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/employees/1/attendance");
            then.status(200).json_body(json!([
                attendance_json(10, 1, "2025-02-03", "Present"),
                attendance_json(11, 1, "2025-02-04", "Absent")
            ]));
        })
        .await;

    let client = api_client(&server, SessionStore::with_token("tok"));
    let record = client
        .mark_attendance(&MarkAttendance {
            employee_id: 1,
            date: date("2025-02-03"),
            status: AttendanceStatus::Present,
        })
        .await
        .unwrap();
    assert_eq!(record.status, AttendanceStatus::Present);

    let in_range = client
        .list_attendance(DateRange::new(
            Some(date("2025-02-01")),
            Some(date("2025-02-28")),
        ))
        .await
        .unwrap();
    assert_eq!(in_range.len(), 1);

    let history = client
        .list_attendance_by_employee(1, DateRange::default())
        .await
        .unwrap();
    assert_eq!(history[1].status, AttendanceStatus::Absent);

    mark_mock.assert_async().await;
    range_mock.assert_async().await;
    employee_mock.assert_async().await;
}

#[tokio::test]
async fn summary_endpoints_decode() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/dashboard");
            then.status(200)
                .json_body(json!({ "total_employees": 3, "total_attendance_rows": 12 }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/present-days");
            then.status(200).json_body(json!([
                { "employee_id": 1, "full_name": "Jane Doe", "present_days": 5 },
                { "employee_id": 2, "present_days": 0 }
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/employees/1/present-days");
            then.status(200).json_body(json!({ "present_days": 5 }));
        })
        .await;

    let client = api_client(&server, SessionStore::with_token("tok"));
    let counts = client.dashboard_summary().await.unwrap();
    assert_eq!(
        counts,
        DashboardCounts {
            total_employees: 3,
            total_attendance_rows: 12
        }
    );

    let totals = client.present_days().await.unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].full_name.as_deref(), Some("Jane Doe"));
    assert!(totals[1].full_name.is_none());

    let single = client.present_days_for_employee(1).await.unwrap();
    assert_eq!(single.present_days, 5);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = ApiClient::with_session(SessionStore::with_token("tok"))
        .with_base_url("http://127.0.0.1:9");
    let err = client.list_employees().await.unwrap_err();
    assert!(err.is_network());
}
