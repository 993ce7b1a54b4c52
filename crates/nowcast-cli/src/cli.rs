use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI for the `nowcast` command.
///
/// Examples:
///   nowcast Paris
///   nowcast New York
///   nowcast "Rio de Janeiro" --forecast-url http://localhost:8080/v1/forecast
#[derive(Debug, Parser)]
#[command(
    name = "nowcast",
    version,
    about = "Current weather for a city, from Open-Meteo",
    author = "zoryamba"
)]
pub struct Cli {
    /// City name. Several words are joined with spaces.
    pub city: Vec<String>,

    /// Settings file. Defaults to `<home>/.nowcast/config.toml`.
    #[arg(long, env = "NOWCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Geocoding service URL, overrides the settings file.
    #[arg(long, env = "NOWCAST_GEOCODING_URL")]
    pub geocoding_url: Option<String>,

    /// Forecast service URL, overrides the settings file.
    #[arg(long, env = "NOWCAST_FORECAST_URL")]
    pub forecast_url: Option<String>,
}
