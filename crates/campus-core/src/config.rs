//! Configuration management for the campus assistant
//!
//! Loads configuration with priority:
//! 1. config.toml (or specified config file)
//! 2. Environment variables (fallback)
//! 3. Defaults

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Campus assistant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusConfig {
    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub warehouse: WarehouseConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Weather provider configuration
///
/// The API key is deliberately optional: a missing key is reported by the
/// weather tool at call time, not treated as a startup failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key (can reference env var with ${VAR_NAME})
    pub api_key: Option<String>,

    /// Base URL of the weather provider
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

/// Model/LLM configuration for the hosting runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model provider (gemini, anthropic, openai, etc.)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// API key (can reference env var with ${VAR_NAME})
    pub api_key: Option<String>,

    /// Model name
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

/// Analytical warehouse configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// Postgres connection string (can reference env var with ${VAR_NAME})
    pub connection_string: Option<String>,

    /// Table holding historical name occurrence counts
    #[serde(default = "default_names_table")]
    pub names_table: String,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub otel_endpoint: Option<String>,
    pub service_name: Option<String>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            model_name: default_model_name(),
        }
    }
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            names_table: default_names_table(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            otel_endpoint: None,
            service_name: None,
        }
    }
}

impl CampusConfig {
    /// Load configuration with the following priority:
    /// 1. Specified config file (if provided)
    /// 2. config.toml in current directory
    /// 3. Environment variables (fallback)
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            // Try to find config.toml in current directory or parent directories
            Self::find_config_file()?
        };

        tracing::debug!("Loading configuration from: {:?}", config_path);

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let mut config: CampusConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        // Resolve environment variable references
        config.resolve_env_vars();

        Ok(config)
    }

    /// Build configuration from environment variables alone, with no
    /// config file on disk.
    pub fn from_env() -> Self {
        let mut config = Self {
            weather: WeatherConfig::default(),
            model: ModelConfig::default(),
            warehouse: WarehouseConfig::default(),
            observability: ObservabilityConfig::default(),
        };
        config.resolve_env_vars();
        config
    }

    /// Find config.toml by searching current directory and parents
    fn find_config_file() -> Result<PathBuf> {
        let mut current = env::current_dir()?;

        loop {
            let config_path = current.join("config.toml");
            if config_path.exists() {
                return Ok(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        Err(anyhow!(
            "config.toml not found. Create one with: cp config.toml.example config.toml"
        ))
    }

    /// Resolve ${VAR_NAME} references to environment variables
    fn resolve_env_vars(&mut self) {
        self.weather.api_key =
            resolve_optional_key(self.weather.api_key.take(), "WEATHER_API_KEY");
        self.model.api_key = resolve_optional_key(self.model.api_key.take(), "GEMINI_API_KEY");
        self.warehouse.connection_string =
            resolve_optional_key(self.warehouse.connection_string.take(), "WAREHOUSE_URL");
    }

    /// Get the model API key with clear error message
    pub fn model_api_key(&self) -> Result<String> {
        self.model.api_key.clone().ok_or_else(|| {
            anyhow!(
                "Model API key not found. Set it in config.toml:\n\
                [model]\n\
                api_key = \"your-key\"\n\
                \n\
                Or set environment variable:\n\
                export GEMINI_API_KEY=\"your-key\""
            )
        })
    }

    /// Create test-friendly defaults (no credentials required)
    pub fn test_defaults() -> Self {
        Self {
            weather: WeatherConfig {
                api_key: Some("test-weather-key".to_string()),
                base_url: default_weather_base_url(),
            },
            model: ModelConfig {
                provider: "test".to_string(),
                api_key: Some("test-api-key".to_string()),
                model_name: "test-model".to_string(),
            },
            warehouse: WarehouseConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Resolve a single optional key: `${VAR_NAME}` references are looked up in
/// the environment, plain values pass through, and an absent value falls
/// back to the named environment variable.
fn resolve_optional_key(value: Option<String>, fallback_var: &str) -> Option<String> {
    match value {
        Some(v) if v.starts_with("${") && v.ends_with('}') => {
            let var_name = &v[2..v.len() - 1];
            env::var(var_name).ok()
        }
        Some(v) if v.is_empty() => env::var(fallback_var).ok(),
        Some(v) => Some(v),
        None => env::var(fallback_var).ok(),
    }
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model_name() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_weather_base_url() -> String {
    "http://api.weatherapi.com".to_string()
}

fn default_names_table() -> String {
    "usa_names".to_string()
}
