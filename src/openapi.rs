//! OpenAPI document served at `/openapi.json`, generated from the handler annotations.

use crate::error::ErrorBody;
use crate::handlers;
use crate::response::MessageBody;
use axum::Json;
use utoipa::{OpenApi, ToSchema};

/// Documented fields of a request body. Nothing is enforced: any JSON object is accepted and stored as-is.
#[derive(ToSchema)]
#[schema(example = json!({
    "name": "Hawaii Beach Getaway",
    "duration": "7 days",
    "price": 2500,
    "description": "A week-long escape to the beautiful beaches of Hawaii."
}))]
#[allow(dead_code)]
pub struct NewRecord {
    name: Option<String>,
    duration: Option<String>,
    price: Option<f64>,
    description: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

/// A stored record: the submitted fields plus the server-assigned `id`.
#[derive(ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Hawaii Beach Getaway",
    "duration": "7 days",
    "price": 2500,
    "description": "A week-long escape to the beautiful beaches of Hawaii."
}))]
#[allow(dead_code)]
pub struct RecordSchema {
    id: u64,
    name: Option<String>,
    duration: Option<String>,
    price: Option<f64>,
    description: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ACME Travels API",
        description = "In-memory CRUD for vacation packages and customers."
    ),
    paths(
        handlers::site::home,
        handlers::site::favicon,
        handlers::resource::list,
        handlers::resource::create,
        handlers::resource::read,
        handlers::resource::update,
        handlers::resource::delete,
    ),
    components(schemas(NewRecord, RecordSchema, ErrorBody, MessageBody)),
    tags(
        (name = "resources", description = "Package and customer collections"),
        (name = "site", description = "Welcome page and favicon")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
