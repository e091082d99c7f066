//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;

use posts_core::PostService;
use posts_core::ports::{IdentityResolver, PostRepository};
use posts_infra::{HttpIdentityResolver, InMemoryPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    pub fn new(repo: Arc<dyn PostRepository>, identity: Arc<dyn IdentityResolver>) -> Self {
        Self {
            posts: PostService::new(repo, identity.clone()),
            identity,
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let identity = HttpIdentityResolver::new(config.identity.clone())
            .context("failed to build identity service client")?;
        tracing::info!(users_api = %config.identity.base_url, "Identity service configured");

        let repo = build_repository(config).await?;

        tracing::info!("Application state initialized");
        Ok(Self::new(repo, Arc::new(identity)))
    }
}

#[cfg(feature = "postgres")]
async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
    use migration::{Migrator, MigratorTrait};
    use posts_infra::database::{DatabaseConfig, connect};
    use posts_infra::PostgresPostRepository;

    let Some(settings) = &config.database else {
        tracing::warn!("No database configured. Running with in-memory store.");
        return Ok(Arc::new(InMemoryPostRepository::new()));
    };

    let db_config = DatabaseConfig {
        max_connections: settings.max_connections,
        min_connections: settings.min_connections,
        ..DatabaseConfig::new(settings.url.clone())
    };

    let conn = match connect(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            return Ok(Arc::new(InMemoryPostRepository::new()));
        }
    };

    if config.auto_migrate {
        Migrator::up(&conn, None)
            .await
            .context("database migration failed")?;
        tracing::info!("Database migration completed");
    }

    Ok(Arc::new(PostgresPostRepository::new(conn)))
}

#[cfg(not(feature = "postgres"))]
async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
    if config.database.is_some() {
        tracing::warn!("Database configured but postgres feature is disabled - ignoring");
    }
    tracing::info!("Running without postgres feature - using in-memory repository");
    Ok(Arc::new(InMemoryPostRepository::new()))
}
