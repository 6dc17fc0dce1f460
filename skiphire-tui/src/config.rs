//! Configuration file and command-line overrides.
//!
//! Config stored at: `<config dir>/skiphire/config.toml`

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub(crate) enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SourceKind {
    #[default]
    Embedded,
    File,
    Remote,
}

#[derive(Parser, Debug)]
#[command(name = "skiphire")]
#[command(version)]
#[command(about = "Browse, filter, and pick a skip to hire")]
pub(crate) struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where the catalog comes from
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// JSON catalog file, implies `--source file` unless a source is given
    #[arg(long)]
    pub catalog_file: Option<PathBuf>,

    /// Offers endpoint, implies `--source remote` unless a source is given
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Postcode for remote offers
    #[arg(long)]
    pub postcode: Option<String>,

    /// Area for remote offers
    #[arg(long)]
    pub area: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub catalog: CatalogConfig,
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CatalogConfig {
    pub source: Option<SourceKind>,
    pub path: Option<PathBuf>,
    pub url: Option<String>,
    pub postcode: Option<String>,
    pub area: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct LogConfig {
    pub file: Option<PathBuf>,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_owned(),
        }
    }
}

/// Fully resolved catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogChoice {
    Embedded,
    File(PathBuf),
    Remote {
        url: String,
        postcode: String,
        area: String,
    },
}

impl Config {
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skiphire").join("config.toml"))
    }

    /// Load the file at `path`; a missing file yields the defaults.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line overrides on top of the file values.
    pub(crate) fn merge_cli(&mut self, cli: &Cli) {
        let catalog = &mut self.catalog;
        if cli.catalog_file.is_some() {
            catalog.path.clone_from(&cli.catalog_file);
            catalog.source = Some(SourceKind::File);
        }
        if cli.catalog_url.is_some() {
            catalog.url.clone_from(&cli.catalog_url);
            catalog.source = Some(SourceKind::Remote);
        }
        if cli.source.is_some() {
            catalog.source = cli.source;
        }
        if cli.postcode.is_some() {
            catalog.postcode.clone_from(&cli.postcode);
        }
        if cli.area.is_some() {
            catalog.area.clone_from(&cli.area);
        }
        if cli.log_file.is_some() {
            self.log.file.clone_from(&cli.log_file);
        }
    }

    pub(crate) fn catalog_choice(&self) -> Result<CatalogChoice, ConfigError> {
        let catalog = &self.catalog;
        match catalog.source.unwrap_or_default() {
            SourceKind::Embedded => Ok(CatalogChoice::Embedded),
            SourceKind::File => catalog
                .path
                .clone()
                .map(CatalogChoice::File)
                .ok_or(ConfigError::MissingSetting("catalog.path")),
            SourceKind::Remote => {
                let url = catalog
                    .url
                    .clone()
                    .ok_or(ConfigError::MissingSetting("catalog.url"))?;
                let postcode = catalog
                    .postcode
                    .clone()
                    .ok_or(ConfigError::MissingSetting("catalog.postcode"))?;
                Ok(CatalogChoice::Remote {
                    url,
                    postcode,
                    area: catalog.area.clone().unwrap_or_default(),
                })
            }
        }
    }
}
