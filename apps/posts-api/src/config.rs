//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use posts_infra::IdentityConfig;
use posts_infra::identity::MAX_TIMEOUT;

use crate::middleware::cors::CorsConfig;

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseSettings>,
    pub auto_migrate: bool,
    pub identity: IdentityConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let parse_or = |key: &str, default: u32| {
            get(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        let database = database_url(&get).map(|url| DatabaseSettings {
            url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", 20),
            min_connections: parse_or("DB_MIN_CONNECTIONS", 2),
        });

        let timeout_secs = get("USERS_API_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
            .unwrap_or(MAX_TIMEOUT)
            .min(MAX_TIMEOUT);

        let identity = IdentityConfig {
            base_url: get("USERS_API_URL").unwrap_or_else(|| IdentityConfig::default().base_url),
            timeout: timeout_secs,
        };

        let cors = match get("CORS_ALLOWED_ORIGINS") {
            Some(origins) => CorsConfig::with_origins(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            None => CorsConfig::default(),
        };

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(8080),
            database,
            auto_migrate: get("AUTO_MIGRATE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            identity,
            cors,
        }
    }
}

/// Resolve the database URL.
///
/// `DATABASE_URL` wins. Otherwise the URL is assembled from
/// `DATABASE_HOST`, `DATABASE_PORT`, `DATABASE_USERNAME`, `DATABASE_PASSWORD`,
/// `DATABASE_NAME` and the optional `DATABASE_SSLMODE`; all but the last are
/// required.
fn database_url(get: &impl Fn(&str) -> Option<String>) -> Option<String> {
    if let Some(url) = get("DATABASE_URL").filter(|u| !u.is_empty()) {
        return Some(url);
    }

    let part = |key: &str| get(key).filter(|v| !v.is_empty());
    let host = part("DATABASE_HOST")?;
    let port = part("DATABASE_PORT")?;
    let username = part("DATABASE_USERNAME")?;
    let password = part("DATABASE_PASSWORD")?;
    let name = part("DATABASE_NAME")?;

    let mut url = format!("postgres://{username}:{password}@{host}:{port}/{name}");
    if let Some(mode) = part("DATABASE_SSLMODE") {
        url.push_str("?sslmode=");
        url.push_str(&mode);
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert!(config.auto_migrate);
        assert_eq!(config.identity.timeout, MAX_TIMEOUT);
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_database_url_takes_precedence() {
        let config = config(&[
            ("DATABASE_URL", "postgres://u:p@db/posts"),
            ("DATABASE_HOST", "ignored"),
            ("DB_MAX_CONNECTIONS", "50"),
        ]);

        let db = config.database.unwrap();
        assert_eq!(db.url, "postgres://u:p@db/posts");
        assert_eq!(db.max_connections, 50);
        assert_eq!(db.min_connections, 2);
    }

    #[test]
    fn test_database_url_from_parts() {
        let config = config(&[
            ("DATABASE_HOST", "db"),
            ("DATABASE_PORT", "5432"),
            ("DATABASE_USERNAME", "app"),
            ("DATABASE_PASSWORD", "secret"),
            ("DATABASE_NAME", "posts"),
            ("DATABASE_SSLMODE", "disable"),
        ]);

        assert_eq!(
            config.database.unwrap().url,
            "postgres://app:secret@db:5432/posts?sslmode=disable"
        );
    }

    #[test]
    fn test_incomplete_parts_mean_no_database() {
        let config = config(&[("DATABASE_HOST", "db"), ("DATABASE_PORT", "5432")]);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_identity_timeout_is_capped() {
        let long = config(&[
            ("USERS_API_URL", "http://users:9000"),
            ("USERS_API_TIMEOUT_SECS", "120"),
        ]);

        assert_eq!(long.identity.base_url, "http://users:9000");
        assert_eq!(long.identity.timeout, MAX_TIMEOUT);

        let short = config(&[("USERS_API_TIMEOUT_SECS", "5")]);
        assert_eq!(short.identity.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_cors_origins_and_migrate_flag() {
        let config = config(&[
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example"),
            ("AUTO_MIGRATE", "false"),
        ]);

        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(!config.auto_migrate);
    }
}
