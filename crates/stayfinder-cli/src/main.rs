//! CLI entry point - the composition root.
//!
//! Parses arguments and environment (a `.env` file is honored), picks the
//! storage backend, and hands a validated `ServerConfig` to the axum
//! adapter. No domain logic lives here.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stayfinder_axum::{CorsConfig, ServerConfig, StorageConfig, serve};
use stayfinder_core::settings::{
    DEFAULT_CANDIDATE_LIMIT, DEFAULT_MAX_DISTANCE_M, DEFAULT_PAGE_SIZE, SearchSettings,
};

/// Hotel-listing backend with geospatial nearby search.
#[derive(Debug, Parser)]
#[command(name = "stayfinder", version, about)]
struct Cli {
    /// Port for the HTTP server.
    #[arg(long, env = "STAYFINDER_PORT", default_value_t = 8080)]
    port: u16,

    /// PostgreSQL/PostGIS connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Run against the in-memory planar backend instead of PostGIS.
    /// Intended for local development and offline testing.
    #[arg(long, env = "STAYFINDER_MEMORY_BACKEND")]
    memory: bool,

    /// Projected SRID the in-memory backend indexes in. Must be a
    /// registered projected system covering the data's region.
    #[arg(long, env = "STAYFINDER_PROJECTION_SRID", default_value_t = 32633)]
    projection_srid: i32,

    /// API key required on /api routes. Omit to disable authentication.
    #[arg(long, env = "STAYFINDER_API_KEY")]
    api_key: Option<String>,

    /// Maximum search distance in meters.
    #[arg(long, env = "STAYFINDER_MAX_DISTANCE", default_value_t = DEFAULT_MAX_DISTANCE_M)]
    max_distance: f64,

    /// Maximum number of candidates fetched per search before ranking.
    #[arg(long, env = "STAYFINDER_LIMIT", default_value_t = DEFAULT_CANDIDATE_LIMIT)]
    limit: i64,

    /// Entries per result page.
    #[arg(long, env = "STAYFINDER_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Allowed CORS origins, comma separated. All origins when omitted.
    #[arg(long, env = "STAYFINDER_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stayfinder=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let storage = if cli.memory {
        StorageConfig::Memory {
            projection_srid: cli.projection_srid,
        }
    } else {
        let database_url = cli.database_url.ok_or_else(|| {
            anyhow::anyhow!("either --database-url (DATABASE_URL) or --memory is required")
        })?;
        StorageConfig::Postgres { database_url }
    };

    let cors = if cli.cors_origins.is_empty() {
        CorsConfig::AllowAll
    } else {
        CorsConfig::AllowOrigins(cli.cors_origins)
    };

    let config = ServerConfig {
        port: cli.port,
        api_key: cli.api_key,
        storage,
        search: SearchSettings {
            max_distance_m: cli.max_distance,
            limit: cli.limit,
            page_size: cli.page_size,
        },
        cors,
    };

    serve(config).await
}
