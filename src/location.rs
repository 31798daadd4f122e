//! Location consent and coordinate lookup.
//!
//! A terminal has no location service of its own, so coordinates come either
//! from the command line ([`FixedLocation`]) or from an IP geolocation
//! endpoint ([`IpLocation`]). The latter asks for consent first, the same way
//! a phone asks for the foreground location permission.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    errors::LocationError,
    types::{Coordinates, IpLocationResponse, PermissionStatus},
};

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Asks for permission to use the location. Never fails: anything but
    /// an explicit grant counts as denied.
    async fn request_permission(&self) -> PermissionStatus;

    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Coordinates given up front. Supplying them counts as consent.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    coordinates: Coordinates,
}

impl FixedLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coordinates)
    }
}

/// How [`IpLocation`] answers the permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Consent {
    Granted,
    Denied,
    /// Prompt on the terminal.
    #[default]
    Ask,
}

/// Approximate location derived from the public IP address.
#[derive(Debug, Clone)]
pub struct IpLocation {
    client: Client,
    url: String,
    consent: Consent,
}

impl IpLocation {
    pub fn new(client: Client, url: impl Into<String>, consent: Consent) -> Self {
        Self {
            client,
            url: url.into(),
            consent,
        }
    }
}

#[async_trait]
impl LocationProvider for IpLocation {
    async fn request_permission(&self) -> PermissionStatus {
        match self.consent {
            Consent::Granted => PermissionStatus::Granted,
            Consent::Denied => PermissionStatus::Denied,
            Consent::Ask => tokio::task::spawn_blocking(prompt_consent)
                .await
                .unwrap_or(PermissionStatus::Denied),
        }
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        debug!(url = %self.url, "looking up location by ip");
        let json: IpLocationResponse = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if json.status.as_deref() == Some("fail") {
            return Err(LocationError::Unavailable(
                json.message.unwrap_or_else(|| "lookup failed".to_string()),
            ));
        }

        match (json.lat, json.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(LocationError::Malformed(
                "missing lat/lon in response".to_string(),
            )),
        }
    }
}

/// Asks for location consent on the terminal.
pub fn prompt_consent() -> PermissionStatus {
    print!("Allow TuneCast to use your approximate location? [y/N] ");
    if io::stdout().flush().is_err() {
        return PermissionStatus::Denied;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => parse_consent(&answer),
        Err(_) => PermissionStatus::Denied,
    }
}

/// Only an explicit yes grants access.
pub fn parse_consent(answer: &str) -> PermissionStatus {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => PermissionStatus::Granted,
        _ => PermissionStatus::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_consent() {
        assert_eq!(parse_consent("y\n"), PermissionStatus::Granted);
        assert_eq!(parse_consent(" YES "), PermissionStatus::Granted);
        assert_eq!(parse_consent("\n"), PermissionStatus::Denied);
        assert_eq!(parse_consent("no"), PermissionStatus::Denied);
        assert_eq!(parse_consent("maybe"), PermissionStatus::Denied);
    }

    #[tokio::test]
    async fn test_fixed_location_is_granted() {
        let location = FixedLocation::new(40.7, -74.0);
        assert_eq!(location.request_permission().await, PermissionStatus::Granted);
        let coords = location.current_position().await.unwrap();
        assert_eq!(coords.latitude, 40.7);
        assert_eq!(coords.longitude, -74.0);
    }

    #[tokio::test]
    async fn test_consent_policy() {
        let denied = IpLocation::new(Client::new(), "http://127.0.0.1:9", Consent::Denied);
        assert_eq!(denied.request_permission().await, PermissionStatus::Denied);

        let granted = IpLocation::new(Client::new(), "http://127.0.0.1:9", Consent::Granted);
        assert_eq!(granted.request_permission().await, PermissionStatus::Granted);
    }
}
