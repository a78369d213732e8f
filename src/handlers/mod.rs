//! HTTP handlers for resource CRUD and the site pages.

pub mod resource;
pub mod site;
pub use resource::*;
pub use site::*;
