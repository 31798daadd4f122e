//! Configuration management for TuneCast.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every external endpoint can be pointed elsewhere
//! through the environment, which is also how the integration tests reach their
//! mock servers.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults for the public endpoints
//!
//! Credentials have no defaults. A missing client id or API key is not fatal:
//! the token exchange or weather lookup fails and the session degrades the same
//! way it would on a network error.

use std::{env, path::PathBuf};

use tracing::debug;

pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_OPENWEATHER_ICON_URL: &str = "https://openweathermap.org/img/wn";
pub const DEFAULT_GEOLOCATION_API_URL: &str = "http://ip-api.com/json";

/// Number of playlists requested from the catalog search.
pub const PLAYLIST_SEARCH_LIMIT: u32 = 6;

/// Loads environment variables from `.env` files.
///
/// Creates the local data directory if it doesn't exist, then loads a `.env`
/// from the working directory followed by the one located in the
/// platform-specific local data directory under `tunecast/.env`. Values that
/// are already set are never overwritten, so the working directory file wins
/// over the data directory one.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/tunecast/.env`
/// - macOS: `~/Library/Application Support/tunecast/.env`
/// - Windows: `%LOCALAPPDATA%/tunecast/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or if an
/// existing `.env` file cannot be parsed. Missing files are skipped.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if let Ok(local) = dotenv::dotenv() {
        debug!(path = %local.display(), "loaded environment file");
    }

    match dotenv::from_path(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded environment file");
            Ok(())
        }
        Err(dotenv::Error::Io(_)) => Ok(()),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunecast/.env");
    path
}

/// Runtime settings for every external service the session talks to.
///
/// Built once by the binary with [`Settings::from_env`] and handed to the
/// clients, so nothing below the command layer reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_token_url: String,
    pub spotify_api_url: String,
    pub weather_api_key: String,
    pub weather_api_url: String,
    pub weather_icon_url: String,
    pub geolocation_url: String,
    pub playlist_limit: u32,
}

impl Settings {
    /// Collects the settings from the environment, falling back to the
    /// public endpoint defaults where a variable is unset.
    pub fn from_env() -> Self {
        Self {
            spotify_client_id: spotify_client_id(),
            spotify_client_secret: spotify_client_secret(),
            spotify_token_url: spotify_apitoken_url(),
            spotify_api_url: spotify_apiurl(),
            weather_api_key: weather_api_key(),
            weather_api_url: weather_apiurl(),
            weather_icon_url: weather_iconurl(),
            geolocation_url: geolocation_apiurl(),
            playlist_limit: PLAYLIST_SEARCH_LIMIT,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spotify_client_id: String::new(),
            spotify_client_secret: String::new(),
            spotify_token_url: DEFAULT_SPOTIFY_API_TOKEN_URL.to_string(),
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            weather_api_key: String::new(),
            weather_api_url: DEFAULT_OPENWEATHER_API_URL.to_string(),
            weather_icon_url: DEFAULT_OPENWEATHER_ICON_URL.to_string(),
            geolocation_url: DEFAULT_GEOLOCATION_API_URL.to_string(),
            playlist_limit: PLAYLIST_SEARCH_LIMIT,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the Spotify API client ID used for the client-credentials exchange.
///
/// Retrieves `SPOTIFY_API_AUTH_CLIENT_ID`; empty when unset.
pub fn spotify_client_id() -> String {
    var_or("SPOTIFY_API_AUTH_CLIENT_ID", "")
}

/// Returns the Spotify API client secret.
///
/// Retrieves `SPOTIFY_API_AUTH_CLIENT_SECRET`; empty when unset.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    var_or("SPOTIFY_API_AUTH_CLIENT_SECRET", "")
}

/// Returns the Spotify token exchange URL.
///
/// Retrieves `SPOTIFY_API_TOKEN_URL`, e.g. `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL)
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves `SPOTIFY_API_URL`, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Returns the OpenWeather API key (`OPENWEATHER_API_KEY`).
pub fn weather_api_key() -> String {
    var_or("OPENWEATHER_API_KEY", "")
}

/// Returns the OpenWeather current weather endpoint (`OPENWEATHER_API_URL`).
pub fn weather_apiurl() -> String {
    var_or("OPENWEATHER_API_URL", DEFAULT_OPENWEATHER_API_URL)
}

/// Returns the base URL weather icons are served from (`OPENWEATHER_ICON_URL`).
pub fn weather_iconurl() -> String {
    var_or("OPENWEATHER_ICON_URL", DEFAULT_OPENWEATHER_ICON_URL)
}

/// Returns the IP geolocation endpoint (`GEOLOCATION_API_URL`).
pub fn geolocation_apiurl() -> String {
    var_or("GEOLOCATION_API_URL", DEFAULT_GEOLOCATION_API_URL)
}
