use reqwest::Client;
use tracing::debug;

use crate::{
    errors::PlaylistFetchError,
    fallback::PLACEHOLDER_IMAGE,
    spotify::auth::TokenProvider,
    types::{PlaylistEntry, PlaylistImage, SearchPlaylistsResponse, SimplifiedPlaylist},
};

/// Name given to playlists that come without one. Never published.
pub const UNNAMED_PLAYLIST: &str = "Unknown Playlist";

/// Searches the catalog for playlists matching a mood.
///
/// Owns the [`TokenProvider`] it authorizes with, so the token is fetched at
/// most once per fetcher.
#[derive(Debug)]
pub struct PlaylistFetcher {
    client: Client,
    api_url: String,
    limit: u32,
    tokens: TokenProvider,
}

impl PlaylistFetcher {
    pub fn new(client: Client, api_url: impl Into<String>, limit: u32, tokens: TokenProvider) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            limit,
            tokens,
        }
    }

    /// Searches playlists for `mood` and returns the usable ones.
    ///
    /// Entries without a name or without an external link are dropped, the
    /// rest keep their relative order. A response without a playlist page is
    /// an empty result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistFetchError`] if the token cannot be obtained, the
    /// request fails or the body cannot be decoded. Callers treat an error
    /// exactly like an empty result.
    pub async fn fetch_playlists(&self, mood: &str) -> Result<Vec<PlaylistEntry>, PlaylistFetchError> {
        let token = self.tokens.get_token().await?;

        let api_url = format!("{url}/search", url = self.api_url.trim_end_matches('/'));
        let limit = self.limit.to_string();

        let response = self
            .client
            .get(&api_url)
            .query(&[("q", mood), ("type", "playlist"), ("limit", limit.as_str())])
            .bearer_auth(token.as_str())
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let json: SearchPlaylistsResponse = serde_json::from_str(&body)?;

        let Some(items) = json.playlists.and_then(|p| p.items) else {
            debug!(mood, "no playlists found in response");
            return Ok(Vec::new());
        };

        let total = items.len();
        let playlists: Vec<PlaylistEntry> = items.into_iter().flatten().filter_map(to_entry).collect();
        debug!(mood, total, accepted = playlists.len(), "playlist search finished");

        Ok(playlists)
    }
}

/// Converts a catalog playlist into an entry, or `None` if it is unusable.
pub fn to_entry(playlist: SimplifiedPlaylist) -> Option<PlaylistEntry> {
    let name = playlist
        .name
        .filter(|n| !n.trim().is_empty() && n != UNNAMED_PLAYLIST)?;
    let url = playlist
        .external_urls
        .and_then(|u| u.spotify)
        .filter(|u| !u.trim().is_empty())?;

    let image = playlist
        .images
        .and_then(|images| images.into_iter().next())
        .and_then(|image| image.url)
        .filter(|u| !u.is_empty())
        .map(PlaylistImage::Remote)
        .unwrap_or(PlaylistImage::Local(PLACEHOLDER_IMAGE));

    Some(PlaylistEntry { name, url, image })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExternalUrls, Image};

    fn playlist(name: Option<&str>, url: Option<&str>, image: Option<&str>) -> SimplifiedPlaylist {
        SimplifiedPlaylist {
            name: name.map(String::from),
            external_urls: Some(ExternalUrls {
                spotify: url.map(String::from),
            }),
            images: image.map(|i| vec![Image { url: Some(i.to_string()) }]),
        }
    }

    #[test]
    fn test_entry_with_remote_image() {
        let entry = to_entry(playlist(Some("Rainy"), Some("https://x/1"), Some("https://img/1"))).unwrap();
        assert_eq!(entry.name, "Rainy");
        assert_eq!(entry.url, "https://x/1");
        assert_eq!(entry.image, PlaylistImage::Remote("https://img/1".to_string()));
    }

    #[test]
    fn test_entry_without_image_uses_placeholder() {
        let entry = to_entry(playlist(Some("Rainy"), Some("https://x/1"), None)).unwrap();
        assert_eq!(entry.image, PlaylistImage::Local(PLACEHOLDER_IMAGE));

        let entry = to_entry(playlist(Some("Rainy"), Some("https://x/1"), Some(""))).unwrap();
        assert_eq!(entry.image, PlaylistImage::Local(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_entry_without_name_or_url_is_dropped() {
        assert!(to_entry(playlist(None, Some("https://x/1"), None)).is_none());
        assert!(to_entry(playlist(Some(""), Some("https://x/1"), None)).is_none());
        assert!(to_entry(playlist(Some("Rainy"), None, None)).is_none());
        assert!(to_entry(playlist(Some("Rainy"), Some(""), None)).is_none());

        let no_links = SimplifiedPlaylist {
            name: Some("Rainy".to_string()),
            external_urls: None,
            images: None,
        };
        assert!(to_entry(no_links).is_none());
    }

    #[test]
    fn test_placeholder_name_is_dropped() {
        assert!(to_entry(playlist(Some(UNNAMED_PLAYLIST), Some("https://x/1"), None)).is_none());
    }
}
