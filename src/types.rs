use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tabled::Tabled;

/// Bearer token obtained through the client-credentials exchange.
///
/// `expires_in` is kept as reported but never checked: a token lives for
/// the whole process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.access_token
    }
}

/// Weather condition as reported by the weather API's primary category.
///
/// Only the four categories with a mood of their own get a variant; every
/// other label is preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Other(String),
}

impl Condition {
    pub fn label(&self) -> &str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for Condition {
    fn from(label: &str) -> Self {
        match label {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Snow" => Self::Snow,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Point-in-time weather record for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature: String,
    pub condition: Condition,
    pub icon_url: String,
    pub fetched_at: DateTime<Utc>,
}

/// Artwork shown next to a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistImage {
    Remote(String),
    Local(&'static str),
}

impl fmt::Display for PlaylistImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => f.write_str(url),
            Self::Local(asset) => write!(f, "{} (bundled)", asset),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub name: String,
    pub url: String,
    pub image: PlaylistImage,
}

/// Where the published playlists came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistSource {
    Live,
    Fallback,
    /// Nothing was fetched, e.g. location access was denied.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Everything the results screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub weather: Option<WeatherSnapshot>,
    pub playlists: Vec<PlaylistEntry>,
    pub source: PlaylistSource,
    pub alert: Option<Alert>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub name: String,
    pub link: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPlaylistsResponse {
    pub playlists: Option<PlaylistPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistPage {
    // The catalog returns `null` in place of playlists it can no longer serve.
    pub items: Option<Vec<Option<SimplifiedPlaylist>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimplifiedPlaylist {
    pub name: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: Option<String>,
    pub main: Option<MainReadings>,
    pub weather: Option<Vec<WeatherElement>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherElement {
    pub main: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IpLocationResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_parses_known_labels() {
        assert_eq!(Condition::from("Clear"), Condition::Clear);
        assert_eq!(Condition::from("Clouds"), Condition::Clouds);
        assert_eq!(Condition::from("Rain"), Condition::Rain);
        assert_eq!(Condition::from("Snow"), Condition::Snow);
    }

    #[test]
    fn condition_keeps_unknown_label() {
        let fog = Condition::from("Fog");
        assert_eq!(fog, Condition::Other("Fog".to_string()));
        assert_eq!(fog.to_string(), "Fog");
    }

    #[test]
    fn condition_labels_are_case_sensitive() {
        assert_eq!(Condition::from("rain"), Condition::Other("rain".to_string()));
    }

    #[test]
    fn local_image_is_marked_as_bundled() {
        let image = PlaylistImage::Local("assets/calm.png");
        assert_eq!(image.to_string(), "assets/calm.png (bundled)");
    }

    #[test]
    fn search_response_accepts_null_items() {
        let json = r#"{"playlists":{"items":[null,{"name":"A","external_urls":{"spotify":"u"},"images":null}]}}"#;
        let parsed: SearchPlaylistsResponse = serde_json::from_str(json).unwrap();
        let items = parsed.playlists.unwrap().items.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_none());
    }
}
