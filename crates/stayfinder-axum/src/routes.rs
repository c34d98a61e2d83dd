//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::validate_api_key;
use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// All API routes without the `/api` prefix (for nesting under `/api`).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hotels",
            get(handlers::hotels::list).post(handlers::hotels::create),
        )
        .route(
            "/hotels/{id}",
            get(handlers::hotels::get)
                .put(handlers::hotels::update)
                .delete(handlers::hotels::remove),
        )
        .route("/search", get(handlers::search::search))
}

/// Build the full router: unauthenticated `/health`, plus `/api` with the
/// API-key layer (when a key is configured) and CORS applied to `/api`
/// only.
pub fn create_router(ctx: AxumContext, api_key: Option<&str>, cors: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    let mut api = api_routes();
    if let Some(key) = api_key {
        let expected: Arc<str> = Arc::from(key);
        api = api.route_layer(middleware::from_fn(move |req: Request, next: Next| {
            let expected = expected.clone();
            async move { validate_api_key(expected, req, next).await }
        }));
    }

    Router::new()
        .route("/health", get(health))
        .nest("/api", api.layer(build_cors_layer(cors)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
