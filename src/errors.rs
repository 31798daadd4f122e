//! Error types for the external calls a session makes.
//!
//! Only two of them ever reach the user: a denied location permission and a
//! failed weather lookup both end in an alert. Token and playlist errors are
//! caught at the fetch boundary and turn into fallback playlists.

use thiserror::Error;

/// Location service errors
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable: {0}")]
    Unavailable(String),
    #[error("Location request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Malformed location response: {0}")]
    Malformed(String),
}

/// Token exchange errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Spotify client credentials are not configured")]
    MissingCredentials,
    #[error("Token request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Token response did not contain an access token")]
    MissingToken,
}

/// Weather provider errors
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("OpenWeather API key is not configured")]
    MissingApiKey,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Malformed weather response: {0}")]
    Malformed(String),
}

/// Playlist search errors.
///
/// Never shown to the user; the session logs them and falls back to the
/// static catalog.
#[derive(Debug, Error)]
pub enum PlaylistFetchError {
    #[error("Spotify authorization failed: {0}")]
    Auth(#[from] AuthError),
    #[error("Playlist search failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Could not decode playlist search response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Refusing to open empty link")]
    Empty,
}
