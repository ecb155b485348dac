use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

/// Shortest accepted HS256 signing secret, in bytes.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Longest admin token lifetime accepted from config (30 days).
pub const MAX_ACCESS_TOKEN_EXPIRY_SECS: i64 = 30 * 24 * 60 * 60;

/// Longest login lockout window accepted from config (7 days).
pub const MAX_LOGIN_WINDOW_MINUTES: i64 = 7 * 24 * 60;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    /// Admin token signing configuration
    pub jwt: JwtAuthConfig,
    /// First-run admin account
    #[serde(default)]
    pub admin: AdminBootstrapConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,

    /// Serve from process memory instead of Postgres (development only).
    #[serde(default)]
    pub in_memory: bool,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

impl From<&DatabaseConfig> for persistence::db::DatabaseConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            connect_timeout_secs: config.connect_timeout_secs,
            idle_timeout_secs: config.idle_timeout_secs,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Failed admin logins tolerated inside the window before lockout.
    #[serde(default = "default_max_login_attempts")]
    pub max_login_attempts: u32,

    #[serde(default = "default_login_window_minutes")]
    pub login_window_minutes: i64,

    #[serde(default)]
    pub hsts_enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtAuthConfig {
    /// HS256 signing secret
    pub secret: String,

    /// Access token expiration in seconds (default: 28800 = 8 hours)
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_secs: i64,

    /// Leeway in seconds for clock skew tolerance
    #[serde(default = "default_jwt_leeway")]
    pub leeway_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminBootstrapConfig {
    #[serde(default)]
    pub bootstrap_username: String,

    #[serde(default)]
    pub bootstrap_password: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_request_timeout() -> u64 {
    30
}
fn default_max_body_size() -> usize {
    1_048_576
}
fn default_max_connections() -> u32 {
    10
}
fn default_min_connections() -> u32 {
    1
}
fn default_connect_timeout() -> u64 {
    10
}
fn default_idle_timeout() -> u64 {
    600
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_max_login_attempts() -> u32 {
    5
}
fn default_login_window_minutes() -> i64 {
    15
}
fn default_access_token_expiry() -> i64 {
    28_800
}
fn default_jwt_leeway() -> u64 {
    30
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with GT__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("GT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("security.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Defaults are embedded so tests do not depend on the working directory.
    /// Validation is skipped to allow partial configs.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "127.0.0.1"
            port = 5000
            request_timeout_secs = 30
            max_body_size = 1048576

            [database]
            url = ""
            in_memory = true
            max_connections = 5
            min_connections = 1
            connect_timeout_secs = 10
            idle_timeout_secs = 600

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []
            max_login_attempts = 5
            login_window_minutes = 15
            hsts_enabled = false

            [jwt]
            secret = "test-secret-that-is-at-least-32-bytes-long"
            access_token_expiry_secs = 3600
            leeway_secs = 30

            [admin]
            bootstrap_username = ""
            bootstrap_password = ""
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.database.in_memory && self.database.url.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "GT__DATABASE__URL environment variable must be set".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigValidationError::InvalidValue(
                "min_connections cannot exceed max_connections".to_string(),
            ));
        }

        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigValidationError::InvalidValue(format!(
                "jwt.secret must be at least {} bytes (set GT__JWT__SECRET)",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.jwt.access_token_expiry_secs <= 0
            || self.jwt.access_token_expiry_secs > MAX_ACCESS_TOKEN_EXPIRY_SECS
        {
            return Err(ConfigValidationError::InvalidValue(format!(
                "jwt.access_token_expiry_secs must be between 1 and {}",
                MAX_ACCESS_TOKEN_EXPIRY_SECS
            )));
        }

        if self.security.max_login_attempts == 0 || self.security.login_window_minutes <= 0 {
            return Err(ConfigValidationError::InvalidValue(
                "max_login_attempts and login_window_minutes must be positive".to_string(),
            ));
        }

        if self.security.login_window_minutes > MAX_LOGIN_WINDOW_MINUTES {
            return Err(ConfigValidationError::InvalidValue(format!(
                "security.login_window_minutes must be at most {}",
                MAX_LOGIN_WINDOW_MINUTES
            )));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_with_defaults() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert!(config.database.in_memory);
        assert_eq!(config.security.max_login_attempts, 5);
        assert_eq!(config.security.login_window_minutes, 15);
        assert!(config.admin.bootstrap_username.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::load_for_test(&[
            ("server.port", "9000"),
            ("logging.level", "debug"),
            ("security.max_login_attempts", "3"),
        ])
        .expect("Failed to load config");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.security.max_login_attempts, 3);
    }

    #[test]
    fn test_config_validation_missing_db_url() {
        let config =
            Config::load_for_test(&[("database.in_memory", "false")]).expect("Failed to load");
        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("GT__DATABASE__URL"));
    }

    #[test]
    fn test_config_validation_invalid_pool_settings() {
        let config = Config::load_for_test(&[
            ("database.min_connections", "100"),
            ("database.max_connections", "10"),
        ])
        .expect("Failed to load config");

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("min_connections"));
    }

    #[test]
    fn test_config_validation_short_jwt_secret() {
        let config =
            Config::load_for_test(&[("jwt.secret", "too-short")]).expect("Failed to load");
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("jwt.secret"));
    }

    #[test]
    fn test_config_validation_zero_login_attempts() {
        let config = Config::load_for_test(&[("security.max_login_attempts", "0")])
            .expect("Failed to load");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_login_window_upper_bound() {
        let config = Config::load_for_test(&[(
            "security.login_window_minutes",
            "1000000000000",
        )])
        .expect("Failed to load");
        let result = config.validate();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("login_window_minutes"));

        let config = Config::load_for_test(&[("security.login_window_minutes", "10080")])
            .expect("Failed to load");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_token_expiry_upper_bound() {
        let config = Config::load_for_test(&[(
            "jwt.access_token_expiry_secs",
            "9223372036854775807",
        )])
        .expect("Failed to load");
        let result = config.validate();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("access_token_expiry_secs"));
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::load_for_test(&[("server.port", "3000")]).expect("Failed to load");
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");

        let bad = Config::load_for_test(&[("server.host", "not a host")]).expect("Failed to load");
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_database_config_conversion() {
        let config = Config::load_for_test(&[("database.url", "postgres://localhost/label")])
            .expect("Failed to load");
        let pool_config: persistence::db::DatabaseConfig = (&config.database).into();
        assert_eq!(pool_config.url, "postgres://localhost/label");
        assert_eq!(pool_config.max_connections, 5);
    }
}
