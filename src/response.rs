//! Response helpers. Records go out bare (no envelope), errors as `{"error": ...}`.

use crate::config::DeleteStyle;
use crate::resource::ResourceKind;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// Successful delete, answered according to the configured style.
pub fn deleted(kind: ResourceKind, style: DeleteStyle) -> Response {
    match style {
        DeleteStyle::Message => ok(MessageBody {
            message: format!("{} deleted successfully", kind.display_name()),
        })
        .into_response(),
        DeleteStyle::NoContent => StatusCode::NO_CONTENT.into_response(),
    }
}
