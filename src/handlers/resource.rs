//! Resource CRUD handlers: list, create, read, update, delete. The collection is picked by the first path segment.

use crate::error::{AppError, ErrorBody};
use crate::openapi::{NewRecord, RecordSchema};
use crate::resource::ResourceKind;
use crate::response::{self, MessageBody};
use crate::service::CrudService;
use crate::state::AppState;
use crate::store::Fields;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Segments that name no collection, or a collection switched off in config, are a plain 404.
fn resolve_kind(state: &AppState, segment: &str) -> Result<ResourceKind, AppError> {
    ResourceKind::from_path_segment(segment)
        .filter(|k| state.store.is_enabled(*k))
        .ok_or_else(AppError::unknown_resource)
}

/// Only integer ids are routable, so anything else is the kind's 404.
fn parse_id(kind: ResourceKind, id_str: &str) -> Result<u64, AppError> {
    id_str.parse().map_err(|_| AppError::not_found(kind))
}

fn body_to_fields(value: Value) -> Result<Fields, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

#[utoipa::path(
    get,
    path = "/{resource}",
    tag = "resources",
    params(("resource" = String, Path, description = "packages or customers")),
    responses(
        (status = 200, description = "All records in creation order", body = [RecordSchema]),
        (status = 404, description = "Unknown collection", body = ErrorBody)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&state, &path_segment)?;
    let rows = CrudService::list(&state.store, kind)?;
    Ok(response::ok(rows))
}

#[utoipa::path(
    post,
    path = "/{resource}",
    tag = "resources",
    params(("resource" = String, Path, description = "packages or customers")),
    request_body = NewRecord,
    responses(
        (status = 201, description = "Record stored with a server-assigned id", body = RecordSchema),
        (status = 400, description = "Body is not a JSON object", body = ErrorBody),
        (status = 404, description = "Unknown collection", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&state, &path_segment)?;
    let fields = body_to_fields(body)?;
    let row = CrudService::create(&state.store, kind, fields)?;
    Ok(response::created(row))
}

#[utoipa::path(
    get,
    path = "/{resource}/{id}",
    tag = "resources",
    params(
        ("resource" = String, Path, description = "packages or customers"),
        ("id" = u64, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "The record", body = RecordSchema),
        (status = 404, description = "No record with this id", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&state, &path_segment)?;
    let id = parse_id(kind, &id_str)?;
    let row = CrudService::read(&state.store, kind, id)?;
    Ok(response::ok(row))
}

#[utoipa::path(
    put,
    path = "/{resource}/{id}",
    tag = "resources",
    params(
        ("resource" = String, Path, description = "packages or customers"),
        ("id" = u64, Path, description = "Record id")
    ),
    request_body = NewRecord,
    responses(
        (status = 200, description = "Supplied fields merged into the record", body = RecordSchema),
        (status = 400, description = "Body is not a JSON object", body = ErrorBody),
        (status = 404, description = "No record with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&state, &path_segment)?;
    let id = parse_id(kind, &id_str)?;
    let fields = body_to_fields(body)?;
    let row = CrudService::update(&state.store, kind, id, fields)?;
    Ok(response::ok(row))
}

#[utoipa::path(
    delete,
    path = "/{resource}/{id}",
    tag = "resources",
    params(
        ("resource" = String, Path, description = "packages or customers"),
        ("id" = u64, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Deleted (message style)", body = MessageBody),
        (status = 204, description = "Deleted (no_content style)"),
        (status = 404, description = "No record with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = resolve_kind(&state, &path_segment)?;
    let id = parse_id(kind, &id_str)?;
    CrudService::delete(&state.store, kind, id)?;
    Ok(response::deleted(kind, state.config.delete_style))
}
