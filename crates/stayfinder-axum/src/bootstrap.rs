//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter: it validates settings, picks a storage backend and
//! constructs the services the handlers use.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;

use stayfinder_core::ports::HotelRepository;
use stayfinder_core::services::{DistanceWeightedScoreCalculator, HotelSearchService, HotelService};
use stayfinder_core::settings::SearchSettings;
use stayfinder_db::CoreFactory;

use crate::routes::create_router;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Which `HotelRepository` implementation to run against.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// The authoritative PostGIS backend.
    Postgres { database_url: String },
    /// The in-memory planar substitute, for environments without PostGIS.
    Memory { projection_srid: i32 },
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// API key required on `/api/*` routes. `None` disables auth
    /// (development mode).
    pub api_key: Option<String>,
    /// Storage backend selection.
    pub storage: StorageConfig,
    /// Proximity search settings.
    pub search: SearchSettings,
    /// CORS configuration.
    pub cors: CorsConfig,
}

/// Application context for the Axum adapter: the composed services.
pub struct AxumContext {
    /// Hotel CRUD service.
    pub hotels: HotelService,
    /// Proximity search service.
    pub search: HotelSearchService,
}

/// Wire up the services for the configured backend.
///
/// Search settings are validated here, once; a bad configuration aborts
/// boot instead of failing per-request.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    config.search.validate()?;

    let repo: Arc<dyn HotelRepository> = match &config.storage {
        StorageConfig::Postgres { database_url } => {
            let pool = CoreFactory::create_pool(database_url).await?;
            CoreFactory::hotel_repository(pool)
        }
        StorageConfig::Memory { projection_srid } => {
            CoreFactory::memory_hotel_repository(*projection_srid)?
        }
    };

    tracing::info!(
        backend = match &config.storage {
            StorageConfig::Postgres { .. } => "postgres",
            StorageConfig::Memory { .. } => "memory",
        },
        max_distance_m = config.search.max_distance_m,
        candidate_limit = config.search.limit,
        page_size = config.search.page_size,
        auth_enabled = config.api_key.is_some(),
        "stayfinder bootstrap complete"
    );

    let calculator = Arc::new(DistanceWeightedScoreCalculator::default());

    Ok(AxumContext {
        hotels: HotelService::new(repo.clone()),
        search: HotelSearchService::new(repo, calculator, config.search),
    })
}

/// Bootstrap and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = create_router(ctx, config.api_key.as_deref(), &config.cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "stayfinder listening");

    axum::serve(listener, app).await?;
    Ok(())
}
