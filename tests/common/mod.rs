#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use tunecast::{
    config::Settings,
    errors::LocationError,
    location::LocationProvider,
    types::{Coordinates, PermissionStatus},
};
use wiremock::MockServer;

pub const CLIENT_ID: &str = "id";
pub const CLIENT_SECRET: &str = "secret";
// base64("id:secret")
pub const BASIC_AUTH: &str = "Basic aWQ6c2VjcmV0";

pub fn settings(server: &MockServer) -> Settings {
    Settings {
        spotify_client_id: CLIENT_ID.to_string(),
        spotify_client_secret: CLIENT_SECRET.to_string(),
        spotify_token_url: format!("{}/api/token", server.uri()),
        spotify_api_url: format!("{}/v1", server.uri()),
        weather_api_key: "weather-key".to_string(),
        weather_api_url: format!("{}/data/2.5/weather", server.uri()),
        weather_icon_url: "https://openweathermap.org/img/wn".to_string(),
        geolocation_url: format!("{}/json", server.uri()),
        playlist_limit: 6,
    }
}

pub fn token_body(token: &str) -> Value {
    json!({
        "access_token": token,
        "token_type": "Bearer",
        "expires_in": 3600
    })
}

pub fn weather_body(city: &str, temp: f64, condition: &str) -> Value {
    json!({
        "name": city,
        "main": { "temp": temp, "humidity": 80 },
        "weather": [
            { "id": 500, "main": condition, "description": "light", "icon": "10d" }
        ]
    })
}

pub fn playlist(name: &str, url: Option<&str>, image: Option<&str>) -> Value {
    let mut item = json!({ "name": name, "images": [] });
    if let Some(url) = url {
        item["external_urls"] = json!({ "spotify": url });
    }
    if let Some(image) = image {
        item["images"] = json!([{ "url": image, "height": 640, "width": 640 }]);
    }
    item
}

pub fn search_body(items: Vec<Value>) -> Value {
    json!({ "playlists": { "href": "", "limit": 6, "items": items } })
}

/// Three usable playlists and two without a link.
pub fn mixed_search_body() -> Value {
    search_body(vec![
        playlist("Rainy Jazz", Some("https://open.spotify.com/playlist/1"), Some("https://i.scdn.co/1")),
        playlist("No Link", None, None),
        playlist("Calm Piano", Some("https://open.spotify.com/playlist/2"), None),
        playlist("Broken", None, Some("https://i.scdn.co/x")),
        playlist("Soft Rain", Some("https://open.spotify.com/playlist/3"), Some("https://i.scdn.co/3")),
    ])
}

pub struct StaticLocation {
    pub permission: PermissionStatus,
    pub coordinates: Result<Coordinates, String>,
}

impl StaticLocation {
    pub fn granted(latitude: f64, longitude: f64) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            coordinates: Ok(Coordinates {
                latitude,
                longitude,
            }),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            coordinates: Err("should not be asked".to_string()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            coordinates: Err("no fix".to_string()),
        }
    }
}

#[async_trait]
impl LocationProvider for StaticLocation {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.coordinates
            .clone()
            .map_err(LocationError::Unavailable)
    }
}
