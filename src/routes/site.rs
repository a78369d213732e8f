//! Site routes: welcome page, favicon, OpenAPI document.

use crate::handlers::site::{favicon, home};
use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn site_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/favicon.ico", get(favicon))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
