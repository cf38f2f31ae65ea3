use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

use config::{Config, Environment, File};

use secrecy::Secret;

use serde::Deserialize;
use serde_aux::prelude::*;

use url::Url;

use crate::client::ContentClient;
use crate::store::FileStorage;

/// Runtime environment, either `Dev` for local development, or `Prod` for release
#[derive(Debug)]
pub enum Runtime {
    Dev,
    Prod,
}

impl Runtime {
    pub fn as_str(&self) -> &str {
        match self {
            Runtime::Dev => "dev",
            Runtime::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Runtime {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("{} is not a valid runtime environment", other),
        }
    }
}

/// Application settings wrapper
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub content: ContentSettings,
    pub storage: StorageSettings,
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load application settings from the settings directory
    pub fn load() -> anyhow::Result<Self> {
        // Get the path to the settings directory
        let path = env::current_dir()?.join("settings");
        // Get the current environment based on the `APP_ENV` environment variable, default to `Dev`
        let runtime: Runtime = env::var("APP_ENV")
            .unwrap_or_else(|_| "dev".into())
            .try_into()?;

        Self::load_from(runtime, &path)
    }
    /// Load application settings from a specified path and runtime
    pub fn load_from(runtime: Runtime, base_path: &Path) -> anyhow::Result<Self> {
        Config::builder()
            // Include the base settings
            .add_source(File::from(base_path.join("base")).required(true))
            // Include the runtime settings
            .add_source(File::from(base_path.join(runtime.as_str())).required(true))
            // Override/include any settings from environment variables
            // NOTE: Should be used for the content API token. Takes the form `APP_<settings category>__<setting name>`.
            .add_source(
                Environment::with_prefix("app")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .context("Failed to load/deserialize settings")
    }
}

#[derive(Debug, Deserialize)]
pub struct ContentSettings {
    api_base_url: String,
    space_id: String,
    environment: String,
    access_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    api_timeout_milliseconds: u64,
}

impl ContentSettings {
    /// The base URL of the content delivery API
    pub fn api_base_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.api_base_url).context("Failed to parse content API base URL")
    }
    /// The content API request timeout duration
    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_milliseconds)
    }
    /// Build the content API client these settings describe
    pub fn client(&self) -> anyhow::Result<ContentClient> {
        ContentClient::new(
            self.api_base_url()?,
            &self.space_id,
            &self.environment,
            self.access_token.clone(),
            self.api_timeout(),
        )
        .context("Failed to create content API client")
    }
}

#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    data_dir: PathBuf,
}

impl StorageSettings {
    /// Directory holding one JSON file per collection
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

#[derive(Debug, Deserialize)]
pub struct TelemetrySettings {
    log_filter: String,
}

impl TelemetrySettings {
    /// `tracing` env-filter directives, overridden by `RUST_LOG` when set
    pub fn log_filter(&self) -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| self.log_filter.clone())
    }
}
