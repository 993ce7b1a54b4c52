use crate::endpoints::Endpoints;
use crate::error::WeatherError;
use crate::forecast;
use crate::geocoding;
use crate::http::JsonClient;
use crate::query::CityQuery;
use crate::report::WeatherReport;
use tracing::debug;

/// Runs the lookup pipeline: city name, then coordinates, then current weather.
#[derive(Debug)]
pub struct WeatherService<C>
where
    C: JsonClient,
{
    client: C,
    endpoints: Endpoints,
}

impl<C> WeatherService<C>
where
    C: JsonClient,
{
    pub fn new(client: C, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Get current weather for a city.
    ///
    /// Stops at the first failure; the forecast service is only called once a place was found.
    pub fn get_weather(&self, city: &CityQuery) -> Result<WeatherReport, WeatherError> {
        debug!("Getting weather for `{city}`");

        let place = geocoding::geocode(&self.client, &self.endpoints.geocoding, city)?;
        let snapshot = forecast::current_weather(&self.client, &self.endpoints.forecast, &place)?;

        Ok(WeatherReport {
            place: place.name,
            temperature: snapshot.temperature,
            weather_code: snapshot.weather_code,
        })
    }
}
