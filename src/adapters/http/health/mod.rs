//! HTTP adapter for the health endpoint.

pub mod handlers;
pub mod routes;

pub use handlers::{HealthResponse, HealthState};
pub use routes::health_routes;
