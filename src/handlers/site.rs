//! Welcome page and favicon. Both read from the static dir and fall back when the file is absent.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::io::ErrorKind;
use std::path::Path;

pub const WELCOME_HTML: &str =
    "<h1>Welcome to ACME Travels API</h1><p>Use /packages to see available vacation packages.</p>";

const INDEX_FILE: &str = "index.html";
const FAVICON_FILE: &str = "favicon.ico";

/// Read a file, treating "not there" as `None` rather than an error.
async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, AppError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::Internal(format!("reading {}: {}", path.display(), e))),
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "site",
    responses((status = 200, description = "Welcome page", body = String, content_type = "text/html"))
)]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = state.config.static_dir.join(INDEX_FILE);
    match read_optional(&path).await? {
        Some(bytes) => Ok(Html(String::from_utf8_lossy(&bytes).into_owned())),
        None => Ok(Html(WELCOME_HTML.to_string())),
    }
}

#[utoipa::path(
    get,
    path = "/favicon.ico",
    tag = "site",
    responses(
        (status = 200, description = "Icon from the static dir"),
        (status = 204, description = "No icon configured")
    )
)]
pub async fn favicon(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.config.static_dir.join(FAVICON_FILE);
    Ok(match read_optional(&path).await? {
        Some(bytes) => ([(header::CONTENT_TYPE, "image/x-icon")], bytes).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
