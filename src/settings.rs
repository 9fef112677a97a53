use std::env;
use std::path::PathBuf;

use anyhow::Result;
use config::{Config, File};
use directories::ProjectDirs;
use homesearch_provider_factset::FactSetSettings;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Host configuration assembled from config files, environment variables, and
/// CLI overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    pub factset: FactSetHostSettings,
}

/// FactSet section of the host configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FactSetHostSettings {
    pub proxy_endpoint: String,
    pub icon: Option<String>,
    pub busy_icon: Option<String>,
}

impl FactSetHostSettings {
    /// Convert into the provider's own settings shape.
    #[must_use]
    pub fn into_settings(self) -> FactSetSettings {
        FactSetSettings {
            proxy_endpoint: self.proxy_endpoint,
            icon: self.icon,
            busy_icon: self.busy_icon,
        }
    }
}

/// Build a [`HostSettings`] by combining default locations with CLI overrides.
pub fn load(cli: &CliArgs) -> Result<HostSettings> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("homesearch")
            .separator("__")
            .try_parsing(true),
    );

    let mut settings: HostSettings = builder.build()?.try_deserialize()?;

    if let Some(endpoint) = &cli.proxy_endpoint {
        settings.factset.proxy_endpoint = endpoint.clone();
    }

    Ok(settings)
}

/// Discover the default configuration file locations that should be consulted.
fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Some(dirs) = ProjectDirs::from("", "", "homesearch") {
        files.push(dirs.config_dir().join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".homesearch.toml"));
        files.push(current_dir.join("homesearch.toml"));
    }

    files
}
