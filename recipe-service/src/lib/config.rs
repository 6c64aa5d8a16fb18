use std::env;

use auth::TokenCodecConfig;
use auth::REFRESH_TOKEN_LIFETIME_HOURS;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Placeholder secret shipped in `config/default.toml`.
pub const PLACEHOLDER_SECRET: &str = "change-me-in-production";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_environment")]
    pub environment: String,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    #[serde(default = "default_access_expiration_hours")]
    pub access_expiration_hours: i64,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_access_expiration_hours() -> i64 {
    24
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__ACCESS_SECRET, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__ACCESS_SECRET=... overrides jwt.access_secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Reject settings that are unsafe to run with.
    ///
    /// # Errors
    /// * `Message` - Access lifetime outside 1..=168 hours, or placeholder/shared secrets in production
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=REFRESH_TOKEN_LIFETIME_HOURS).contains(&self.jwt.access_expiration_hours) {
            return Err(ConfigError::Message(format!(
                "jwt.access_expiration_hours must be between 1 and {} (the refresh token lifetime)",
                REFRESH_TOKEN_LIFETIME_HOURS
            )));
        }

        if self.is_production() {
            if self.jwt.access_secret == PLACEHOLDER_SECRET
                || self.jwt.refresh_secret == PLACEHOLDER_SECRET
            {
                return Err(ConfigError::Message(
                    "jwt secrets must be changed in production".to_string(),
                ));
            }
            if self.jwt.access_secret == self.jwt.refresh_secret {
                return Err(ConfigError::Message(
                    "jwt access and refresh secrets must differ in production".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn token_codec_config(&self) -> TokenCodecConfig {
        TokenCodecConfig {
            access_secret: self.jwt.access_secret.clone(),
            refresh_secret: self.jwt.refresh_secret.clone(),
            access_lifetime_hours: self.jwt.access_expiration_hours,
        }
    }
}
