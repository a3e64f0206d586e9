use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::domain::models::booking::BookingMode;
use crate::domain::models::room::{default_seed_rooms, NewRoom};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("Failed to read room seed file {path}: {source}")]
    SeedFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Room seed file {path} is not a valid room list: {source}")]
    SeedFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub booking_mode: BookingMode,
    pub public_dir: PathBuf,
    pub db_max_connections: u32,
    pub monitor_interval: Duration,
    pub room_seed: Vec<NewRoom>,
}

impl Config {
    /// Reads the process environment; `.env` is loaded by the caller beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        let room_seed = match env::var("ROOM_SEED_FILE") {
            Ok(path) => load_seed_file(&path)?,
            Err(_) => default_seed_rooms(),
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://hotel.db?mode=rwc".to_string()),
            port: parse_var("PORT", 3000)?,
            booking_mode: parse_var("BOOKING_MODE", BookingMode::UniqueCode)?,
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()).into(),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 1)?,
            monitor_interval: Duration::from_secs(parse_var("DB_MONITOR_INTERVAL_SECS", 10)?),
            room_seed,
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

fn load_seed_file(path: &str) -> Result<Vec<NewRoom>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedFile {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::SeedFormat {
        path: path.to_string(),
        source,
    })
}
