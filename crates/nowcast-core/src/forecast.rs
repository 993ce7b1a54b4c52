use crate::error::WeatherError;
use crate::geocoding::GeocodeResult;
use crate::http::JsonClient;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

/// Present-moment conditions at a location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    #[serde(rename = "weathercode")]
    pub weather_code: i64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<WeatherSnapshot>,
}

/// Build the forecast URL asking for current weather in the location's own timezone.
pub fn forecast_url(base: &Url, latitude: f64, longitude: f64) -> Url {
    let mut url = base.clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("latitude", &latitude.to_string());
        qp.append_pair("longitude", &longitude.to_string());
        qp.append_pair("current_weather", "true");
        qp.append_pair("timezone", "auto");
    }
    url
}

/// Fetch current weather for a geocoded place.
pub fn current_weather<C: JsonClient>(
    client: &C,
    base: &Url,
    place: &GeocodeResult,
) -> Result<WeatherSnapshot, WeatherError> {
    debug!("Fetching current weather for {}", place.name);
    let url = forecast_url(base, place.latitude, place.longitude);

    let body: ForecastResponse = serde_json::from_value(client.get_json(&url)?)?;

    let snapshot = body
        .current_weather
        .ok_or_else(|| WeatherError::WeatherUnavailable {
            name: place.name.clone(),
        })?;
    debug!("Current weather: {snapshot:?}");

    Ok(snapshot)
}
