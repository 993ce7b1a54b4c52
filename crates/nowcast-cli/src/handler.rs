use anyhow::{Context, Result};
use nowcast_core::http::JsonClient;
use nowcast_core::query::CityQuery;
use nowcast_core::weather_service::WeatherService;
use std::io::Write;
use tracing::debug;

/// Looks up a city and writes the one-line report.
pub struct ReportHandler<C>
where
    C: JsonClient,
{
    service: WeatherService<C>,
}

impl<C> ReportHandler<C>
where
    C: JsonClient,
{
    pub fn new(service: WeatherService<C>) -> Self {
        Self { service }
    }

    /// Nothing is written unless the whole lookup succeeds.
    pub fn run<W: Write>(&self, city: &CityQuery, out: &mut W) -> Result<()> {
        let report = self.service.get_weather(city)?;
        debug!("Report: {report:?}");

        writeln!(out, "{report}").context("failed to write report")?;

        Ok(())
    }
}
