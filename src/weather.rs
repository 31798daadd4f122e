//! Current weather lookup against the OpenWeather API.

use chrono::Utc;
use reqwest::Client;
use tracing::debug;

use crate::{
    config::Settings,
    errors::WeatherError,
    types::{Condition, CurrentWeatherResponse, WeatherSnapshot},
};

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_url: String,
    api_key: String,
    icon_url: String,
}

impl WeatherClient {
    pub fn new(client: Client, settings: &Settings) -> Self {
        Self {
            client,
            api_url: settings.weather_api_url.clone(),
            api_key: settings.weather_api_key.clone(),
            icon_url: settings.weather_icon_url.clone(),
        }
    }

    /// Fetches the current weather at the given coordinates, in imperial units.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::MissingApiKey`] if no API key is configured
    /// - [`WeatherError::Network`] on transport failure or a non-success status
    /// - [`WeatherError::Malformed`] if the temperature or condition is missing
    pub async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        debug!(lat, lon, "fetching current weather");
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let json: CurrentWeatherResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Malformed(e.to_string()))?;

        let snapshot = self.to_snapshot(json)?;
        debug!(city = %snapshot.city, condition = %snapshot.condition, "weather fetched");
        Ok(snapshot)
    }

    fn to_snapshot(&self, json: CurrentWeatherResponse) -> Result<WeatherSnapshot, WeatherError> {
        let temp = json
            .main
            .and_then(|m| m.temp)
            .ok_or_else(|| WeatherError::Malformed("missing main.temp".to_string()))?;

        let element = json
            .weather
            .and_then(|w| w.into_iter().next())
            .ok_or_else(|| WeatherError::Malformed("missing weather[0]".to_string()))?;

        let condition = element
            .main
            .ok_or_else(|| WeatherError::Malformed("missing weather[0].main".to_string()))?;

        let icon_url = match element.icon {
            Some(icon) if !icon.is_empty() => format!(
                "{base}/{icon}@2x.png",
                base = self.icon_url.trim_end_matches('/'),
                icon = icon
            ),
            _ => String::new(),
        };

        Ok(WeatherSnapshot {
            city: json.name.unwrap_or_default(),
            temperature: format_temperature(temp),
            condition: Condition::from(condition.as_str()),
            icon_url,
            fetched_at: Utc::now(),
        })
    }
}

/// Rounds to the nearest whole degree, halves upwards, e.g. `72.5 → "73°F"`.
pub fn format_temperature(temp: f64) -> String {
    let whole = temp.floor();
    let rounded = if temp - whole >= 0.5 { whole + 1.0 } else { whole };
    format!("{}°F", rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_temperature_rounds_to_nearest() {
        assert_eq!(format_temperature(71.4), "71°F");
        assert_eq!(format_temperature(71.6), "72°F");
        assert_eq!(format_temperature(72.0), "72°F");
    }

    #[test]
    fn test_format_temperature_halves_round_up() {
        assert_eq!(format_temperature(72.5), "73°F");
        assert_eq!(format_temperature(-2.5), "-2°F");
    }

    #[test]
    fn test_format_temperature_just_below_half() {
        assert_eq!(format_temperature(0.49999999999999994), "0°F");
        assert_eq!(format_temperature(72.49999999999999), "72°F");
    }

    #[test]
    fn test_format_temperature_below_zero() {
        assert_eq!(format_temperature(-0.3), "0°F");
        assert_eq!(format_temperature(-7.8), "-8°F");
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let client = WeatherClient::new(Client::new(), &Settings::default());
        let err = client.fetch_weather(1.0, 2.0).await.unwrap_err();
        assert!(matches!(err, WeatherError::MissingApiKey));
    }
}
