//! Construction Service Library
//!
//! HTTP CRUD service for buildings, floors and apartments backed by SeaORM
//! with an optional Redis read-through cache.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::ConstructionConfig;
use crate::infra::{Database, EntityCache, RedisCache};

/// Run the HTTP server, overriding the configured host and port.
pub async fn run_server(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ConstructionConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;

    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConstructionConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Connect the database (applying migrations) and the optional cache.
pub async fn build_state(config: &ConstructionConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;

    let cache = RedisCache::from_config(&config.cache)
        .await
        .map(|cache| Arc::new(cache) as Arc<dyn EntityCache>);
    if cache.is_none() {
        info!("Running without entity cache");
    }

    Ok(AppState::new(db, cache))
}

async fn run_server_with_config(config: ConstructionConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config).await?;
    let app = create_router(state);

    let addr: SocketAddr = config.service.addr().parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
