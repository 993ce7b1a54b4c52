use crate::error::WeatherError;
use reqwest::Url;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Base URLs of the two remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub geocoding: Url,
    pub forecast: Url,
}

impl Endpoints {
    /// Parse both base URLs, failing on the first malformed one.
    pub fn parse(geocoding: &str, forecast: &str) -> Result<Self, WeatherError> {
        Ok(Self {
            geocoding: parse_url(geocoding)?,
            forecast: parse_url(forecast)?,
        })
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::parse(DEFAULT_GEOCODING_URL, DEFAULT_FORECAST_URL)
            .expect("built-in endpoint URLs are valid")
    }
}

fn parse_url(url: &str) -> Result<Url, WeatherError> {
    Url::parse(url).map_err(|e| WeatherError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
