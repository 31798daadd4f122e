use reqwest::Client;

use crate::{
    app,
    cli::render,
    config::Settings,
    fallback::fallback_playlists,
    links::BrowserOpener,
    mood::resolve_mood,
    spotify::{PlaylistFetcher, TokenProvider},
    types::{Condition, PlaylistSource},
};

/// Searches playlists for a condition without looking up the weather.
pub async fn search(condition: String, open: Option<usize>) {
    let settings = Settings::from_env();
    let client = Client::new();
    let fetcher = PlaylistFetcher::new(
        client.clone(),
        settings.spotify_api_url.clone(),
        settings.playlist_limit,
        TokenProvider::new(client, &settings),
    );

    let condition = Condition::from(condition.as_str());
    let pb = render::spinner(&format!("Searching \"{}\"...", resolve_mood(&condition)));
    let (playlists, source) = app::playlists_for(&fetcher, &condition).await;
    pb.finish_and_clear();

    render::playlists(&playlists, source);

    if let Some(n) = open {
        render::open_nth(&playlists, n, &BrowserOpener);
    }
}

/// Prints the offline playlists for a condition.
pub fn fallback(condition: String) {
    let condition = Condition::from(condition.as_str());
    render::playlists(&fallback_playlists(&condition), PlaylistSource::Fallback);
}
