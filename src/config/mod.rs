//! Layered application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, CorsConfig, LogFormat, LoggingConfig, ServerConfig, StaticFilesConfig,
    StorageSettings, DEV_JWT_SECRET,
};
