//! HTTP round-trip tests for every employee route
//!
//! JSON / query string → handler → InMemoryEmployeeStore → HTTP response → JSON.

use axum::http::StatusCode;
use axum_test::TestServer;
use employee_api::prelude::*;
use serde_json::{Value, json};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn make_server() -> TestServer {
    let store = InMemoryEmployeeStore::with_validator(EmployeeValidator::pinned(today()));
    let app = ServerBuilder::new().with_service(store).build();
    TestServer::new(app)
}

fn employee_json(name: &str) -> Value {
    json!({
        "name": name,
        "surname": "Smith",
        "email": "anna@example.com",
        "phone": "05551234567",
        "address": "12 Baker Street",
        "age": 34,
        "dateOfBirth": "1990-03-10"
    })
}

async fn create(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/employees/body").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

fn field_names(body: &Value) -> Vec<String> {
    body["details"]["fields"]
        .as_array()
        .expect("validation details")
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect()
}

// ==============================================================
// Health
// ==============================================================

#[tokio::test]
async fn test_health() {
    let server = make_server();

    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

// ==============================================================
// Listing
// ==============================================================

#[tokio::test]
async fn test_list_all_starts_empty() {
    let server = make_server();

    let response = server.get("/api/employees/all").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_all_returns_insertion_order() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;
    create(&server, employee_json("Bob")).await;

    let body: Value = server.get("/api/employees/all").await.json();
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Anna", "Bob"]);
}

// ==============================================================
// Create
// ==============================================================

#[tokio::test]
async fn test_create_from_body() {
    let server = make_server();

    let response = server
        .post("/api/employees/body")
        .json(&employee_json("Anna"))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "/api/employees/route/1"
    );

    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Anna");
    assert_eq!(body["dateOfBirth"], "1990-03-10");
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let server = make_server();

    let mut body = employee_json("Anna");
    body["id"] = json!(40);
    let created = create(&server, body).await;

    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn test_create_from_pascal_case_body() {
    let server = make_server();

    let response = server
        .post("/api/employees/body")
        .json(&json!({
            "Name": "Anna",
            "Surname": "Smith",
            "Email": "anna@example.com",
            "Phone": "05551234567",
            "Address": "12 Baker Street",
            "Age": 34,
            "DateOfBirth": "1990-03-10"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["name"], "Anna");
    assert_eq!(body["age"], 34);
    assert_eq!(body["dateOfBirth"], "1990-03-10");
}

#[tokio::test]
async fn test_create_from_query() {
    let server = make_server();

    let response = server
        .post("/api/employees/query")
        .add_query_param("name", "Anna")
        .add_query_param("surname", "Smith")
        .add_query_param("email", "anna@example.com")
        .add_query_param("phone", "05551234567")
        .add_query_param("address", "12 Baker Street")
        .add_query_param("age", "34")
        .add_query_param("dateOfBirth", "1990-03-10T00:00:00")
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "/api/employees/route/1"
    );
    let body: Value = response.json();
    assert_eq!(body["dateOfBirth"], "1990-03-10");
}

#[tokio::test]
async fn test_location_resolves_to_created_record() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;

    let response = server
        .post("/api/employees/body")
        .json(&employee_json("Bob"))
        .await;
    let location = response.header("location").to_str().unwrap().to_string();

    let fetched: Value = server.get(&location).await.json();
    assert_eq!(fetched["id"], 2);
    assert_eq!(fetched["name"], "Bob");
}

#[tokio::test]
async fn test_create_invalid_returns_every_failing_field() {
    let server = make_server();

    let response = server
        .post("/api/employees/body")
        .json(&json!({
            "name": "Al",
            "surname": "Smith",
            "email": "not-an-email",
            "phone": "123",
            "address": "12 Baker Street",
            "age": 34,
            "dateOfBirth": "1990-03-10"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let fields = field_names(&body);
    assert!(fields.contains(&"name".to_string()));
    assert!(fields.contains(&"email".to_string()));
    assert!(fields.contains(&"phone".to_string()));
    assert!(!fields.contains(&"surname".to_string()));

    // Nothing was stored
    let all: Value = server.get("/api/employees/all").await.json();
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_create_with_empty_body_reports_required_fields() {
    let server = make_server();

    let response = server.post("/api/employees/body").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let fields = field_names(&response.json());
    for field in ["name", "surname", "email", "phone", "address", "age", "dateOfBirth"] {
        assert!(fields.contains(&field.to_string()), "missing {field}");
    }
}

#[tokio::test]
async fn test_create_age_mismatch() {
    let server = make_server();

    let mut body = employee_json("Anna");
    body["age"] = json!(40);
    let response = server.post("/api/employees/body").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["details"]["fields"][0]["message"],
        "Age must match the calculated age based on Date of Birth"
    );
}

// ==============================================================
// Get
// ==============================================================

#[tokio::test]
async fn test_get_by_route_and_query() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;

    let by_route: Value = server.get("/api/employees/route/1").await.json();
    let by_query: Value = server
        .get("/api/employees/query-by-id")
        .add_query_param("id", 1)
        .await
        .json();

    assert_eq!(by_route, by_query);
    assert_eq!(by_route["name"], "Anna");
}

#[tokio::test]
async fn test_get_missing_returns_404() {
    let server = make_server();

    let response = server.get("/api/employees/route/99").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Employee not found");
    assert_eq!(body["details"]["id"], 99);

    let response = server
        .get("/api/employees/query-by-id")
        .add_query_param("id", 99)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

// ==============================================================
// Replace
// ==============================================================

#[tokio::test]
async fn test_replace_from_body() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;

    let response = server
        .put("/api/employees/body")
        .add_query_param("id", 1)
        .json(&json!({
            "name": "Olga",
            "surname": "Ivanova",
            "email": "olga@example.com",
            "phone": "05550000000",
            "address": "Nevsky 1",
            "age": 24,
            "dateOfBirth": "2000-01-01"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Olga");
    assert_eq!(body["age"], 24);
}

#[tokio::test]
async fn test_replace_from_query_is_validated() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;

    let response = server
        .put("/api/employees/query")
        .add_query_param("id", 1)
        .add_query_param("name", "Olga")
        .add_query_param("surname", "Ivanova")
        .add_query_param("email", "olga@example.com")
        .add_query_param("phone", "05550000000")
        .add_query_param("address", "Nevsky 1")
        .add_query_param("age", "17")
        .add_query_param("dateOfBirth", "2000-01-01")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(field_names(&response.json()).contains(&"age".to_string()));

    let unchanged: Value = server.get("/api/employees/route/1").await.json();
    assert_eq!(unchanged["name"], "Anna");
}

#[tokio::test]
async fn test_replace_from_body_rejects_bad_phone() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;

    let mut body = employee_json("Olga");
    body["phone"] = json!("555-12");
    let response = server
        .put("/api/employees/body")
        .add_query_param("id", 1)
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(field_names(&body), vec!["phone"]);
    assert_eq!(
        body["details"]["fields"][0]["message"],
        "Invalid phone number format. Must be 10-15 digits."
    );

    let unchanged: Value = server.get("/api/employees/route/1").await.json();
    assert_eq!(unchanged["name"], "Anna");
    assert_eq!(unchanged["phone"], "05551234567");
}

#[tokio::test]
async fn test_replace_from_query_valid() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;

    let response = server
        .put("/api/employees/query")
        .add_query_param("id", 1)
        .add_query_param("name", "Olga")
        .add_query_param("surname", "Ivanova")
        .add_query_param("email", "olga@example.com")
        .add_query_param("phone", "05550000000")
        .add_query_param("address", "Nevsky 1")
        .add_query_param("age", "24")
        .add_query_param("dateOfBirth", "2000-01-01")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["surname"], "Ivanova");
}

#[tokio::test]
async fn test_replace_missing_returns_404() {
    let server = make_server();

    let response = server
        .put("/api/employees/body")
        .add_query_param("id", 5)
        .json(&employee_json("Anna"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

// ==============================================================
// Partial updates
// ==============================================================

#[tokio::test]
async fn test_patch_from_query_bypasses_validation() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;

    let response = server
        .patch("/api/employees/query")
        .add_query_param("id", 1)
        .add_query_param("name", "Al")
        .add_query_param("email", "")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Al");
    // Empty values are not applied on this path
    assert_eq!(body["email"], "anna@example.com");
    assert_eq!(body["phone"], "05551234567");
}

#[tokio::test]
async fn test_patch_from_body_bypasses_validation() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;

    let response = server
        .patch("/api/employees/body")
        .add_query_param("id", 1)
        .json(&json!({
            "Name": "Al",
            "Phone": "12",
            "Email": 7,
            "Address": "ignored"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Al");
    assert_eq!(body["phone"], "12");
    assert_eq!(body["email"], "anna@example.com");
    assert_eq!(body["address"], "12 Baker Street");
}

#[tokio::test]
async fn test_patch_from_body_applies_empty_text() {
    let server = make_server();
    create(&server, employee_json("Anna")).await;

    let body: Value = server
        .patch("/api/employees/body")
        .add_query_param("id", 1)
        .json(&json!({ "Email": "" }))
        .await
        .json();

    assert_eq!(body["email"], "");
}

#[tokio::test]
async fn test_patch_missing_returns_404() {
    let server = make_server();

    server
        .patch("/api/employees/query")
        .add_query_param("id", 3)
        .add_query_param("name", "Anna")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .patch("/api/employees/body")
        .add_query_param("id", 3)
        .json(&json!({ "Name": "Anna" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ==============================================================
// Filter / sort
// ==============================================================

#[tokio::test]
async fn test_list_filtered_by_name_and_sorted() {
    let server = make_server();
    for (name, age, dob) in [
        ("Anna", 30, "1994-01-10"),
        ("Bob", 18, "2005-09-01"),
        ("Susan", 45, "1979-02-02"),
    ] {
        let mut body = employee_json(name);
        body["age"] = json!(age);
        body["dateOfBirth"] = json!(dob);
        create(&server, body).await;
    }

    let body: Value = server
        .get("/api/employees/list-filtered")
        .add_query_param("sortField", "age")
        .add_query_param("sortOrder", "desc")
        .await
        .json();
    let ages: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["age"].as_i64().unwrap())
        .collect();
    assert_eq!(ages, vec![45, 30, 18]);

    let body: Value = server
        .get("/api/employees/list-filtered")
        .add_query_param("name", "an")
        .await
        .json();
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Anna", "Susan"]);

    let body: Value = server
        .get("/api/employees/list-filtered")
        .add_query_param("sortField", "salary")
        .add_query_param("sortOrder", "asc")
        .await
        .json();
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
