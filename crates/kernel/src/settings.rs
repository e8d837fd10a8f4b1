use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "PAYROLL_ENV";
const CONFIG_DIR_ENV: &str = "PAYROLL_CONFIG_DIR";
const ENV_PREFIX: &str = "PAYROLL";

/// Deployment environment the client is pointed at.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    fn parse(name: &str) -> anyhow::Result<Self> {
        match name {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .map(|cwd| cwd.join("config"))
                .with_context(|| "unable to resolve current directory")?,
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Layer `base.toml`, `{environment}.toml` and `PAYROLL_*` variables from
    /// an explicit config directory.
    pub fn load_from(config_dir: &Path, environment: &str) -> anyhow::Result<Self> {
        let parsed_environment = Environment::parse(environment)?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = parsed_environment;
        anyhow::ensure!(
            settings.api.request_timeout_ms > 0,
            "api.request_timeout_ms must be greater than zero"
        );

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "ApiSettings::default_base_url")]
    pub base_url: String,
    #[serde(default = "ApiSettings::default_base_path")]
    pub base_path: String,
    #[serde(default = "ApiSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ApiSettings {
    fn default_base_url() -> String {
        "http://localhost:8080".to_string()
    }

    fn default_base_path() -> String {
        "/api".to_string()
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }

    /// Origin joined with the API base path, without a trailing slash.
    pub fn endpoint(&self) -> String {
        let origin = self.base_url.trim_end_matches('/');
        let path = self.base_path.trim_matches('/');
        if path.is_empty() {
            origin.to_string()
        } else {
            format!("{}/{}", origin, path)
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            base_path: Self::default_base_path(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "TelemetrySettings::default_log_level")]
    pub log_level: String,
}

impl TelemetrySettings {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_level: Self::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
