//! ACME Travels: in-memory REST backend for vacation packages and customers.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod resource;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DeleteStyle, ServerConfig};
pub use error::{AppError, ConfigError};
pub use openapi::ApiDoc;
pub use resource::ResourceKind;
pub use routes::{app, common_routes, resource_routes, site_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::{Fields, Record, ResourceStore};
