//! Construction service configuration.

use std::env;

use common::{CacheConfig, DatabaseConfig, ServiceConfig};

/// Construction service configuration.
#[derive(Debug, Clone, Default)]
pub struct ConstructionConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
}

impl ConstructionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: env::var("CONSTRUCTION_HOST").unwrap_or(defaults.service.host),
                port: parse_var("CONSTRUCTION_PORT").unwrap_or(defaults.service.port),
            },
            database: DatabaseConfig {
                url: env::var("CONSTRUCTION_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
            cache: CacheConfig {
                url: env::var("CONSTRUCTION_REDIS_URL")
                    .or_else(|_| env::var("REDIS_URL"))
                    .ok()
                    .filter(|url| !url.is_empty()),
                default_ttl_seconds: parse_var("CACHE_TTL_SECONDS")
                    .unwrap_or(defaults.cache.default_ttl_seconds),
            },
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_the_cache() {
        let config = ConstructionConfig::default();
        assert_eq!(config.service.port, 8081);
        assert_eq!(config.service.addr(), "0.0.0.0:8081");
        assert_eq!(config.database.max_connections, 10);
        assert!(!config.cache.is_enabled());
        assert_eq!(config.cache.default_ttl_seconds, 3600);
    }
}
