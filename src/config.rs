//! Configuration management for lingotracks.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files and turns them into an explicit [`Config`] value that is
//! handed to the API clients. No other module reads the environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};

pub const SPOTIFY_ACCESS_TOKEN: &str = "SPOTIFY_ACCESS_TOKEN";
pub const GENIUS_ACCESS_TOKEN: &str = "GENIUS_ACCESS_TOKEN";
pub const SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";
pub const GENIUS_API_URL: &str = "GENIUS_API_URL";
pub const GENIUS_WEB_URL: &str = "GENIUS_WEB_URL";
pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_GENIUS_API_URL: &str = "https://api.genius.com";
const DEFAULT_GENIUS_WEB_URL: &str = "https://genius.com";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

/// Loads environment variables from `.env` files.
///
/// The `.env` in the current working directory is read first, then the one in
/// the platform-specific local data directory under `lingotracks/.env`.
/// Variables that are already set are never overwritten, so the real
/// environment always wins over both files.
///
/// # Directory Structure
///
/// The second file is looked up in:
/// - Linux: `~/.local/share/lingotracks/.env`
/// - macOS: `~/Library/Application Support/lingotracks/.env`
/// - Windows: `%LOCALAPPDATA%/lingotracks/.env`
///
/// # Errors
///
/// A missing file is skipped. This function returns a
/// [`Error::Configuration`] if:
/// - The data directory cannot be created
/// - One of the `.env` files exists but cannot be read or parsed
pub async fn load_env() -> Result<()> {
    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(Error::Configuration(format!("Cannot load .env: {e}"))),
    }

    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Configuration(e.to_string()))?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => {
            return Err(Error::Configuration(format!(
                "Cannot load {}: {e}",
                path.display()
            )));
        }
    }

    Ok(())
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lingotracks/.env");
    path
}

/// Settings for the Spotify Web API client.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub access_token: String,
    pub api_url: String,
}

/// Settings for the Genius search API and the song pages it links to.
#[derive(Debug, Clone)]
pub struct GeniusConfig {
    pub access_token: String,
    pub api_url: String,
    /// Base host that relative song paths are resolved against.
    pub web_url: String,
}

/// Complete runtime configuration.
///
/// Built once at startup and passed into the constructors of the clients that
/// need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub spotify: SpotifyConfig,
    pub genius: GeniusConfig,
    /// Applied to every outbound request independently.
    pub http_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Call [`load_env`] first if `.env` files should be taken into account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `SPOTIFY_ACCESS_TOKEN` or
    /// `GENIUS_ACCESS_TOKEN` is missing or blank, or if `HTTP_TIMEOUT_SECS` is
    /// not a positive integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_lookup(|key| match key {
    ///     "SPOTIFY_ACCESS_TOKEN" => Some("spotify-token".to_string()),
    ///     "GENIUS_ACCESS_TOKEN" => Some("genius-token".to_string()),
    ///     _ => None,
    /// })?;
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let spotify_token = required(&lookup, SPOTIFY_ACCESS_TOKEN)?;
        let genius_token = required(&lookup, GENIUS_ACCESS_TOKEN)?;

        let http_timeout = match optional(&lookup, HTTP_TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(Error::Configuration(format!(
                        "{HTTP_TIMEOUT_SECS} must be a positive number of seconds, got '{raw}'"
                    )));
                }
            },
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Config {
            spotify: SpotifyConfig {
                access_token: spotify_token,
                api_url: optional(&lookup, SPOTIFY_API_URL)
                    .unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()),
            },
            genius: GeniusConfig {
                access_token: genius_token,
                api_url: optional(&lookup, GENIUS_API_URL)
                    .unwrap_or_else(|| DEFAULT_GENIUS_API_URL.to_string()),
                web_url: optional(&lookup, GENIUS_WEB_URL)
                    .unwrap_or_else(|| DEFAULT_GENIUS_WEB_URL.to_string()),
            },
            http_timeout,
        })
    }

    /// Builds the HTTP client shared by both API clients.
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.http_timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("Cannot build HTTP client: {e}")))
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or_else(|| {
        Error::Configuration(format!(
            "{key} is not set. Check your .env or environment."
        ))
    })
}
