//! # Spotify Integration Module
//!
//! This module provides the small slice of the Spotify Web API TuneCast needs:
//! an app token obtained through the client-credentials flow, and a playlist
//! search by keyword.
//!
//! ## Architecture
//!
//! ```text
//! Orchestrator (app)
//!          ↓
//! PlaylistFetcher ── owns ──> TokenProvider
//!          ↓                        ↓
//! GET /v1/search            POST /api/token
//! ```
//!
//! ## Authentication
//!
//! [`auth`] - Client-credentials exchange against the accounts service with a
//! Basic authorization header built from the client id and secret. The
//! resulting token is memoized inside the [`auth::TokenProvider`] for the
//! lifetime of the process. No user authorization is involved: the search
//! endpoint only needs an app token.
//!
//! ## Playlist Search
//!
//! [`search`] - Keyword search restricted to playlists, at most six results.
//! Results are validated one by one: anything without a name or an external
//! link is dropped, and a missing image is replaced by a bundled placeholder.
//!
//! ## Error Handling
//!
//! Both operations return typed errors ([`crate::errors::AuthError`],
//! [`crate::errors::PlaylistFetchError`]). Neither is shown to the user: the
//! orchestrator logs them and switches to the fallback catalog.
//!
//! ## Endpoints
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /search?type=playlist` - Playlist search

pub mod auth;
pub mod search;

pub use auth::TokenProvider;
pub use search::PlaylistFetcher;
