use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::{
    config::Settings,
    errors::AuthError,
    types::{Token, TokenResponse},
};

/// Obtains and memoizes the app token for the Spotify Web API.
///
/// The first successful [`get_token`](Self::get_token) performs a
/// client-credentials exchange; every later call returns the same token
/// without touching the network. There is no expiry handling: a long
/// running process keeps using the first token it got.
///
/// A failed exchange leaves the cache empty, so the next call tries again.
///
/// # Example
///
/// ```
/// let provider = TokenProvider::new(client, &settings);
/// let token = provider.get_token().await?;
/// ```
#[derive(Debug)]
pub struct TokenProvider {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    token: OnceCell<Token>,
}

impl TokenProvider {
    pub fn new(client: Client, settings: &Settings) -> Self {
        Self {
            client,
            token_url: settings.spotify_token_url.clone(),
            client_id: settings.spotify_client_id.clone(),
            client_secret: settings.spotify_client_secret.clone(),
            token: OnceCell::new(),
        }
    }

    /// Returns the cached token, exchanging client credentials on first use.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingCredentials`] if no client id or secret is set
    /// - [`AuthError::Request`] on transport failure, a non-success status or
    ///   an undecodable body
    /// - [`AuthError::MissingToken`] if the response has no access token
    pub async fn get_token(&self) -> Result<Token, AuthError> {
        let token = self
            .token
            .get_or_try_init(|| self.request_token())
            .await?;
        Ok(token.clone())
    }

    /// Whether a token has already been obtained.
    pub fn is_cached(&self) -> bool {
        self.token.initialized()
    }

    async fn request_token(&self) -> Result<Token, AuthError> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        debug!(url = %self.token_url, "requesting client credentials token");
        let res = self
            .client
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                basic_auth_header(&self.client_id, &self.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?
            .error_for_status()?;

        let json: TokenResponse = res.json().await?;

        let access_token = json
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        debug!("obtained client credentials token");
        Ok(Token {
            access_token,
            token_type: json.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_in: json.expires_in.unwrap_or(3600),
        })
    }
}

/// Builds the `Authorization` header value for the token endpoint.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}
