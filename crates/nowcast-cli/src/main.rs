use crate::cli::Cli;
use crate::handler::ReportHandler;
use crate::settings::Settings;
use clap::Parser;
use nowcast_core::error::WeatherError;
use nowcast_core::http::HttpJsonClient;
use nowcast_core::query::CityQuery;
use nowcast_core::weather_service::WeatherService;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod handler;
mod settings;

const USAGE: &str = "Usage: nowcast \"City Name\"";

fn main() -> ExitCode {
    init_tracing();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // Keep 2 and 3 free for lookup outcomes.
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (code, message) = diagnose(&err);
            eprintln!("{message}");
            ExitCode::from(code)
        }
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let city = CityQuery::from_args(&args.city)?;
    debug!("City query: `{city}`");

    let settings = Settings::load(args.config.as_deref())?;
    let endpoints =
        settings.endpoints(args.geocoding_url.as_deref(), args.forecast_url.as_deref())?;

    let service = WeatherService::new(HttpJsonClient::new(), endpoints);

    ReportHandler::new(service).run(&city, &mut io::stdout().lock())
}

/// Exit status and stderr line for a failed run.
///
/// Anything that is not a lookup outcome is reported as a generic `Error:`.
fn diagnose(err: &anyhow::Error) -> (u8, String) {
    match err.downcast_ref::<WeatherError>() {
        Some(WeatherError::Usage) => (1, USAGE.to_string()),
        Some(
            e @ (WeatherError::CityNotFound { .. } | WeatherError::WeatherUnavailable { .. }),
        ) => (e.exit_code(), e.to_string()),
        Some(e) => (e.exit_code(), format!("Error: {e}")),
        None => (1, format!("Error: {err:#}")),
    }
}

/// Initialize global tracing subscriber.
///
/// - Uses `RUST_LOG` if set (e.g. `RUST_LOG=nowcast_cli=debug,nowcast_core=trace`)
/// - Otherwise defaults to `info` for our crates.
/// - Writes to stderr, stdout is reserved for the report.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nowcast_cli=info,nowcast_core=info"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
