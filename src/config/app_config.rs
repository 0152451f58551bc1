use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub storage: StorageSettings,
    pub cors: CorsConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Token signing and password hashing settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    /// `bcrypt` or `argon2`
    pub password_scheme: String,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `memory` or `postgres`
    pub backend: String,
    pub database_url: Option<String>,
    pub max_connections: u32,
    /// Load the demo catalog when running in memory
    pub seed_demo_movies: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Empty or `*` allows any origin
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub dir: String,
}

/// Secret used when none is configured; fine for local runs only
pub const DEV_JWT_SECRET: &str = "jks_jwt_super_secret";

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_days: 5,
            password_scheme: "bcrypt".to_string(),
            bcrypt_cost: 10,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[hidden]")
            .field("token_ttl_days", &self.token_ttl_days)
            .field("password_scheme", &self.password_scheme)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl AuthConfig {
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            database_url: None,
            max_connections: 10,
            seed_demo_movies: true,
        }
    }
}

impl StorageSettings {
    /// Configured URL, falling back to `DATABASE_URL`
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .filter(|url| !url.is_empty())
            .or_else(|| std::env::var("DATABASE_URL").ok())
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: "public".to_string(),
        }
    }
}

impl AppConfig {
    /// Layers `config/default`, `config/local` and `APP_*` environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Same layering, reading variables from `vars` instead of the process environment
    fn load_from(vars: Option<config::Map<String, String>>) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                // APP_AUTH__JWT_SECRET -> auth.jwt_secret
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_run_in_memory() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, "memory");
        assert_eq!(config.auth.token_ttl_days, 5);
        assert_eq!(config.auth.password_scheme, "bcrypt");
        assert_eq!(config.auth.bcrypt_cost, 10);
        assert!(config.auth.uses_dev_secret());
        assert!(config.cors.allows_any_origin());
        assert_eq!(config.static_files.dir, "public");
    }

    #[test]
    fn test_partial_sources_fill_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("auth.jwt_secret", "production-secret")
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.auth.jwt_secret, "production-secret");
        assert_eq!(config.auth.token_ttl_days, 5);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_environment_overrides_nested_keys() {
        let config = AppConfig::load_from(env(&[
            ("APP_AUTH__JWT_SECRET", "production-secret-xyz"),
            ("APP_STORAGE__BACKEND", "postgres"),
            ("APP_SERVER__PORT", "9090"),
            (
                "APP_CORS__ALLOWED_ORIGINS",
                "http://localhost:1234,https://example.com",
            ),
            ("UNRELATED__AUTH__JWT_SECRET", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.auth.jwt_secret, "production-secret-xyz");
        assert!(!config.auth.uses_dev_secret());
        assert_eq!(config.storage.backend, "postgres");
        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:1234", "https://example.com"]
        );
    }

    #[test]
    fn test_double_underscore_after_prefix_is_not_read() {
        let config = AppConfig::load_from(env(&[("APP__AUTH__JWT_SECRET", "wrong-shape")])).unwrap();

        assert!(config.auth.uses_dev_secret());
    }

    #[test]
    fn test_malformed_environment_value_is_an_error() {
        let result = AppConfig::load_from(env(&[("APP_SERVER__PORT", "eighty")]));

        assert!(result.is_err());
    }

    #[test]
    fn test_auth_debug_hides_secret() {
        let output = format!("{:?}", AuthConfig::default());
        assert!(!output.contains(DEV_JWT_SECRET));
    }

    #[test]
    fn test_explicit_origins() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://movies.example.com".to_string()],
        };
        assert!(!cors.allows_any_origin());
    }
}
