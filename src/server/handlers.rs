//! HTTP handlers for employee operations
//!
//! Each handler parses its inputs, calls one [`EmployeeService`] operation
//! and formats the result. Extractor rejections are taken as `Result` values
//! and turned into `ApiError` so every failure shares one response shape.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::{
    Employee, EmployeeFields, EmployeeId, EmployeePatch, EmployeeQuery, EmployeeService,
};

/// Base path of every employee route
pub const EMPLOYEES_PATH: &str = "/api/employees";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn EmployeeService>,
}

impl AppState {
    pub fn new(service: Arc<dyn EmployeeService>) -> Self {
        Self { service }
    }
}

/// `?id=` on lookups and updates
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: EmployeeId,
}

/// Patch body keyed by `Name`, `Email` and `Phone`
///
/// Keys are matched exactly. Values that are not JSON strings are dropped,
/// as are unknown keys.
#[derive(Debug, Default, Deserialize)]
pub struct UntypedPatchBody {
    #[serde(rename = "Name", default, deserialize_with = "text_only")]
    pub name: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "text_only")]
    pub email: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "text_only")]
    pub phone: Option<String>,
}

fn text_only<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl From<UntypedPatchBody> for EmployeePatch {
    fn from(body: UntypedPatchBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            phone: body.phone,
        }
    }
}

/// Where a created record can be fetched
pub fn location_of(id: EmployeeId) -> String {
    format!("{}/route/{}", EMPLOYEES_PATH, id)
}

fn created(employee: Employee) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location_of(employee.id))],
        Json(employee),
    )
        .into_response()
}

/// GET /api/employees/all
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    Ok(Json(state.service.list_all().await?))
}

/// GET /api/employees/query-by-id?id={id}
pub async fn get_by_query(
    State(state): State<AppState>,
    query: std::result::Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<Employee>> {
    let Query(IdQuery { id }) = query?;
    Ok(Json(state.service.get_by_id(id).await?))
}

/// GET /api/employees/route/{id}
pub async fn get_by_route(
    State(state): State<AppState>,
    path: std::result::Result<Path<EmployeeId>, PathRejection>,
) -> Result<Json<Employee>> {
    let Path(id) = path?;
    Ok(Json(state.service.get_by_id(id).await?))
}

/// POST /api/employees/query?name=..&surname=..&dateOfBirth=..
pub async fn create_from_query(
    State(state): State<AppState>,
    fields: std::result::Result<Query<EmployeeFields>, QueryRejection>,
) -> Result<Response> {
    let Query(fields) = fields?;
    Ok(created(state.service.create(fields).await?))
}

/// POST /api/employees/body
pub async fn create_from_body(
    State(state): State<AppState>,
    fields: std::result::Result<Json<EmployeeFields>, JsonRejection>,
) -> Result<Response> {
    let Json(fields) = fields?;
    Ok(created(state.service.create(fields).await?))
}

/// PUT /api/employees/query?id={id}&name=..
pub async fn replace_from_query(
    State(state): State<AppState>,
    id: std::result::Result<Query<IdQuery>, QueryRejection>,
    fields: std::result::Result<Query<EmployeeFields>, QueryRejection>,
) -> Result<Json<Employee>> {
    let Query(IdQuery { id }) = id?;
    let Query(fields) = fields?;
    Ok(Json(state.service.replace(id, fields).await?))
}

/// PUT /api/employees/body?id={id}
pub async fn replace_from_body(
    State(state): State<AppState>,
    id: std::result::Result<Query<IdQuery>, QueryRejection>,
    fields: std::result::Result<Json<EmployeeFields>, JsonRejection>,
) -> Result<Json<Employee>> {
    let Query(IdQuery { id }) = id?;
    let Json(fields) = fields?;
    Ok(Json(state.service.replace(id, fields).await?))
}

/// PATCH /api/employees/query?id={id}&name=..&email=..&phone=..
pub async fn patch_from_query(
    State(state): State<AppState>,
    id: std::result::Result<Query<IdQuery>, QueryRejection>,
    patch: std::result::Result<Query<EmployeePatch>, QueryRejection>,
) -> Result<Json<Employee>> {
    let Query(IdQuery { id }) = id?;
    let Query(patch) = patch?;
    Ok(Json(state.service.partial_update_validated(id, patch).await?))
}

/// PATCH /api/employees/body?id={id}
pub async fn patch_from_body(
    State(state): State<AppState>,
    id: std::result::Result<Query<IdQuery>, QueryRejection>,
    body: std::result::Result<Json<UntypedPatchBody>, JsonRejection>,
) -> Result<Json<Employee>> {
    let Query(IdQuery { id }) = id?;
    let Json(body) = body?;
    Ok(Json(
        state.service.partial_update_untyped(id, body.into()).await?,
    ))
}

/// GET /api/employees/list-filtered?name=..&sortField=..&sortOrder=..
pub async fn list_filtered(
    State(state): State<AppState>,
    query: std::result::Result<Query<EmployeeQuery>, QueryRejection>,
) -> Result<Json<Vec<Employee>>> {
    let Query(query) = query?;
    Ok(Json(state.service.filter_sort(&query).await?))
}
