use std::env;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::quiz::{CatalogError, QuestionCatalog};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogSource,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalog = match env::var("QUIZ_CATALOG") {
            Err(_) => CatalogSource::Standard,
            Ok(value) if value.trim().is_empty() || value.eq_ignore_ascii_case("standard") => {
                CatalogSource::Standard
            }
            Ok(path) => CatalogSource::File(PathBuf::from(path)),
        };

        Ok(Self {
            environment,
            catalog,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Which question set a deployment serves. The live product shipped two
/// differently numbered question sets, so the active one is configuration,
/// not code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Standard,
    File(PathBuf),
}

impl CatalogSource {
    pub fn load(&self) -> Result<QuestionCatalog, ConfigError> {
        match self {
            CatalogSource::Standard => Ok(QuestionCatalog::standard()),
            CatalogSource::File(path) => {
                let file = File::open(path).map_err(|source| ConfigError::CatalogFile {
                    path: path.clone(),
                    source,
                })?;
                QuestionCatalog::from_json_reader(BufReader::new(file)).map_err(|source| {
                    ConfigError::CatalogParse {
                        path: path.clone(),
                        source,
                    }
                })
            }
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    CatalogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    CatalogParse {
        path: PathBuf,
        source: CatalogError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CatalogFile { path, .. } => {
                write!(f, "unable to open catalog file {}", path.display())
            }
            ConfigError::CatalogParse { path, .. } => {
                write!(f, "invalid catalog in {}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::CatalogFile { source, .. } => Some(source),
            ConfigError::CatalogParse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("QUIZ_CATALOG");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.catalog, CatalogSource::Standard);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn standard_keyword_maps_to_builtin_catalog() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("QUIZ_CATALOG", "Standard");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.catalog, CatalogSource::Standard);
        let catalog = config.catalog.load().expect("builtin catalog loads");
        assert_eq!(catalog.len(), 11);
        reset_env();
    }

    #[test]
    fn missing_catalog_file_surfaces_config_error() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/catalog.json"));
        let err = source.load().expect_err("missing file must fail");
        assert!(matches!(err, ConfigError::CatalogFile { .. }));
    }
}
