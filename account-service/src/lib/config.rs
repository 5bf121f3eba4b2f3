use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Known placeholder secret shipped in sample config; startup refuses it.
pub const PLACEHOLDER_SECRET: &str = "change-me-in-production";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_ttl_minutes")]
    pub access_ttl_minutes: i64,
    #[serde(default = "default_refresh_ttl_days")]
    pub refresh_ttl_days: i64,
}

fn default_access_ttl_minutes() -> i64 {
    30
}

fn default_refresh_ttl_days() -> i64 {
    7
}

impl JwtConfig {
    /// Access token lifetime as a duration.
    pub fn access_ttl(&self) -> Duration {
        Duration::minutes(self.access_ttl_minutes)
    }

    /// Refresh token lifetime as a duration.
    pub fn refresh_ttl(&self) -> Duration {
        Duration::days(self.refresh_ttl_days)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// Fails fast when the signing secret is missing, empty, or still the
    /// known placeholder, so a misconfigured process never starts serving.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be configured".to_string(),
            ));
        }

        if self.jwt.secret == PLACEHOLDER_SECRET {
            return Err(ConfigError::Message(
                "jwt.secret is still the placeholder value and must be replaced".to_string(),
            ));
        }

        if self.jwt.access_ttl_minutes <= 0 || self.jwt.refresh_ttl_days <= 0 {
            return Err(ConfigError::Message(
                "token lifetimes must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/accounts".to_string(),
            },
            server: ServerConfig { http_port: 8080 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                access_ttl_minutes: 30,
                refresh_ttl_days: 7,
            },
        }
    }

    #[test]
    fn test_validate_accepts_real_secret() {
        let config = config_with_secret("an_actual_secret_of_32_bytes_min!");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        assert!(config_with_secret("").validate().is_err());
        assert!(config_with_secret("   ").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_placeholder_secret() {
        assert!(config_with_secret(PLACEHOLDER_SECRET).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_ttls() {
        let mut config = config_with_secret("an_actual_secret_of_32_bytes_min!");
        config.jwt.access_ttl_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ttl_conversions() {
        let config = config_with_secret("an_actual_secret_of_32_bytes_min!");
        assert_eq!(config.jwt.access_ttl(), Duration::minutes(30));
        assert_eq!(config.jwt.refresh_ttl(), Duration::days(7));
    }
}
