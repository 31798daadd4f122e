use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    errors::PlaylistFetchError,
    fallback,
    location::LocationProvider,
    mood,
    spotify::{PlaylistFetcher, TokenProvider},
    types::{
        Alert, Condition, PermissionStatus, PlaylistEntry, PlaylistSource, Recommendations,
    },
    weather::WeatherClient,
};

pub const PERMISSION_DENIED_TITLE: &str = "Permission Denied";
pub const PERMISSION_DENIED_MESSAGE: &str =
    "We need location access to show weather‑based playlists.";
pub const FETCH_FAILED_TITLE: &str = "Error";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data, using offline playlists.";

/// Runs the loading sequence of a session.
///
/// Every step waits for the previous one; nothing is retried and nothing
/// fails the session as a whole. Whatever happens, [`load`](Self::load)
/// returns recommendations the results screen can render.
pub struct Orchestrator {
    location: Box<dyn LocationProvider>,
    weather: WeatherClient,
    playlists: PlaylistFetcher,
}

impl Orchestrator {
    pub fn new(
        location: Box<dyn LocationProvider>,
        weather: WeatherClient,
        playlists: PlaylistFetcher,
    ) -> Self {
        Self {
            location,
            weather,
            playlists,
        }
    }

    /// Wires the weather client, token provider and playlist fetcher to one
    /// shared HTTP client.
    pub fn from_settings(settings: &Settings, location: Box<dyn LocationProvider>) -> Self {
        let client = Client::new();
        let tokens = TokenProvider::new(client.clone(), settings);
        let playlists = PlaylistFetcher::new(
            client.clone(),
            settings.spotify_api_url.clone(),
            settings.playlist_limit,
            tokens,
        );
        let weather = WeatherClient::new(client, settings);
        Self::new(location, weather, playlists)
    }

    /// Permission → position → weather → mood → playlists → fallback.
    pub async fn load(&self) -> Recommendations {
        if self.location.request_permission().await == PermissionStatus::Denied {
            info!("location permission denied");
            return Recommendations {
                weather: None,
                playlists: Vec::new(),
                source: PlaylistSource::None,
                alert: Some(Alert::new(PERMISSION_DENIED_TITLE, PERMISSION_DENIED_MESSAGE)),
            };
        }

        let weather = match self.location.current_position().await {
            Ok(position) => {
                self.weather
                    .fetch_weather(position.latitude, position.longitude)
                    .await
                    .map_err(|e| e.to_string())
            }
            Err(e) => Err(e.to_string()),
        };

        let snapshot = match weather {
            Ok(snapshot) => snapshot,
            Err(e) => {
                // No condition is known at this point, hence the default bucket.
                warn!(error = %e, "failed to fetch weather, using offline playlists");
                return Recommendations {
                    weather: None,
                    playlists: fallback::default_playlists(),
                    source: PlaylistSource::Fallback,
                    alert: Some(Alert::new(FETCH_FAILED_TITLE, FETCH_FAILED_MESSAGE)),
                };
            }
        };

        let (playlists, source) = self.playlists_for(&snapshot.condition).await;

        Recommendations {
            weather: Some(snapshot),
            playlists,
            source,
            alert: None,
        }
    }

    pub async fn playlists_for(&self, condition: &Condition) -> (Vec<PlaylistEntry>, PlaylistSource) {
        playlists_for(&self.playlists, condition).await
    }
}

/// Live playlists for the condition's mood, or its fallback bucket.
pub async fn playlists_for(
    fetcher: &PlaylistFetcher,
    condition: &Condition,
) -> (Vec<PlaylistEntry>, PlaylistSource) {
    let mood = mood::resolve_mood(condition);
    debug!(%condition, mood, "resolved mood");
    let outcome = fetcher.fetch_playlists(mood).await;
    select_playlists(condition, outcome)
}

/// Decides between live results and the fallback bucket.
///
/// An error and an empty result are handled the same way; the error is only
/// logged.
pub fn select_playlists(
    condition: &Condition,
    outcome: Result<Vec<PlaylistEntry>, PlaylistFetchError>,
) -> (Vec<PlaylistEntry>, PlaylistSource) {
    let live = match outcome {
        Ok(playlists) => playlists,
        Err(e) => {
            warn!(error = %e, "playlist search failed");
            Vec::new()
        }
    };

    if live.is_empty() {
        debug!(%condition, "using fallback playlists");
        (fallback::fallback_playlists(condition), PlaylistSource::Fallback)
    } else {
        (live, PlaylistSource::Live)
    }
}
