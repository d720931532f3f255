use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    gateway::{FOURSQUARE_URL, OPENWEATHER_URL},
    types::model::place::Place,
};

/// Provider credentials, read from `config.json`:
/// `{ "api": { "openweather": { "key" }, "foursquare": { "id", "key" } } }`
#[derive(Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Deserialize, Clone)]
pub struct ApiConfig {
    pub openweather: OpenWeatherConfig,
    pub foursquare: FoursquareConfig,
}

#[derive(Deserialize, Clone)]
pub struct OpenWeatherConfig {
    pub key: String,
}

#[derive(Deserialize, Clone)]
pub struct FoursquareConfig {
    pub id: String,
    pub key: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid value for {key}: `{value}`")]
    InvalidVar { key: &'static str, value: String },
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        read_json(path)
    }
}

/// Loads the static places catalog.
pub fn load_places(path: &Path) -> Result<Vec<Place>, ConfigError> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Directories served next to the API.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    pub app_dir: PathBuf,
    pub docs_dir: PathBuf,
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self {
            app_dir: PathBuf::from("static"),
            docs_dir: PathBuf::from("out"),
        }
    }
}

/// Process settings taken from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub config_path: PathBuf,
    pub places_path: PathBuf,
    pub assets: StaticAssets,
    pub openweather_url: String,
    pub foursquare_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = var_or("NEIGHBORHOOD_PORT", "3000");
        let port = port.parse().map_err(|_| ConfigError::InvalidVar {
            key: "NEIGHBORHOOD_PORT",
            value: port,
        })?;
        Ok(Self {
            port,
            config_path: var_or("NEIGHBORHOOD_CONFIG", "config.json").into(),
            places_path: var_or("NEIGHBORHOOD_PLACES", "places.json").into(),
            assets: StaticAssets {
                app_dir: var_or("NEIGHBORHOOD_STATIC_DIR", "static").into(),
                docs_dir: var_or("NEIGHBORHOOD_DOCS_DIR", "out").into(),
            },
            openweather_url: var_or("NEIGHBORHOOD_OPENWEATHER_URL", OPENWEATHER_URL),
            foursquare_url: var_or("NEIGHBORHOOD_FOURSQUARE_URL", FOURSQUARE_URL),
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
