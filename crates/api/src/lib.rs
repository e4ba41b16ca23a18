pub mod handlers;
pub mod models;
pub mod errors;
pub mod routes;

pub use handlers::*;
pub use models::*;
pub use errors::ApiError;
pub use routes::{build_route_table, routes, MAPPINGS_PATH, RESOURCE_URL_PATH};
