use crate::error::WeatherError;
use crate::http::JsonClient;
use crate::query::CityQuery;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

/// First place the geocoding service matched for a query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodeResult>>,
}

/// Build `<base>?name=<city>&count=1`, percent-encoding the city name.
pub fn search_url(base: &Url, city: &CityQuery) -> Url {
    let mut url = base.clone();
    url.set_query(Some(&format!(
        "name={}&count=1",
        urlencoding::encode(city.as_str())
    )));
    url
}

/// Resolve a city name to coordinates, taking the first match.
pub fn geocode<C: JsonClient>(
    client: &C,
    base: &Url,
    city: &CityQuery,
) -> Result<GeocodeResult, WeatherError> {
    debug!("Geocoding `{city}`");
    let url = search_url(base, city);

    let body: GeocodingResponse = serde_json::from_value(client.get_json(&url)?)?;

    let place = body
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| WeatherError::CityNotFound {
            city: city.to_string(),
        })?;
    debug!(
        "Resolved `{city}` to {} at ({}, {})",
        place.name, place.latitude, place.longitude
    );

    Ok(place)
}
