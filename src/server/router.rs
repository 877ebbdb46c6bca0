//! Router builder utilities for employee routes

use crate::server::handlers::{
    AppState, EMPLOYEES_PATH, create_from_body, create_from_query, get_by_query, get_by_route,
    list_all, list_filtered, patch_from_body, patch_from_query, replace_from_body,
    replace_from_query,
};
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

/// Build employee routes
///
/// All routes live under `/api/employees`:
/// - GET   /all                - List every employee
/// - GET   /query-by-id?id=    - Get one employee by query parameter
/// - GET   /route/{id}         - Get one employee by path segment
/// - POST  /query              - Create from query parameters
/// - POST  /body               - Create from a JSON body
/// - PUT   /query?id=          - Replace from query parameters
/// - PUT   /body?id=           - Replace from a JSON body
/// - PATCH /query?id=          - Partial update of name, email, phone from query parameters
/// - PATCH /body?id=           - Partial update from a `Name`/`Email`/`Phone` JSON map
/// - GET   /list-filtered      - Filter by name and sort by name, age or email
pub fn build_employee_routes(state: AppState) -> Router {
    let employees = Router::new()
        .route("/all", get(list_all))
        .route("/query-by-id", get(get_by_query))
        .route("/route/{id}", get(get_by_route))
        .route(
            "/query",
            post(create_from_query)
                .put(replace_from_query)
                .patch(patch_from_query),
        )
        .route(
            "/body",
            post(create_from_body)
                .put(replace_from_body)
                .patch(patch_from_body),
        )
        .route("/list-filtered", get(list_filtered))
        .with_state(state);

    Router::new().nest(EMPLOYEES_PATH, employees)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
