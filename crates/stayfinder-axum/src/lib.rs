//! Axum web adapter for stayfinder.
//!
//! Thin HTTP plumbing around the core services: hotels CRUD, the search
//! endpoint, API-key authentication on `/api/*`, and the bootstrap
//! composition root that wires a storage backend to the services.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; these are exercised by the
// integration tests under tests/
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, StorageConfig, bootstrap, serve};
pub use routes::create_router;
