use anyhow::{Context, Result};
use nowcast_core::endpoints::{DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL, Endpoints};
use nowcast_core::error::WeatherError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk settings format.
///
/// Example TOML:
/// ```toml
/// geocoding_url = "https://geocoding-api.open-meteo.com/v1/search"
/// forecast_url = "https://api.open-meteo.com/v1/forecast"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    geocoding_url: Option<String>,

    #[serde(default)]
    forecast_url: Option<String>,
}

/// Read-only TOML settings.
///
/// Looked up in:
///   `<home>/.nowcast/config.toml`
/// unless a path is given explicitly. A missing file means built-in defaults.
#[derive(Debug)]
pub struct Settings {
    file: SettingsFile,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::new_with_path(path),
            None => match default_path() {
                Some(path) => Self::new_with_path(&path),
                None => {
                    debug!("No home directory, using built-in settings");
                    Ok(Self {
                        file: SettingsFile::default(),
                    })
                }
            },
        }
    }

    fn new_with_path(path: &Path) -> Result<Self> {
        let file = if path.exists() {
            debug!("Reading settings from {}", path.display());
            let contents = fs::read_to_string(path)
                .context(format!("failed to read settings file {}", path.display()))?;

            toml::from_str(&contents)
                .context(format!("failed to parse settings file {}", path.display()))?
        } else {
            debug!("No settings file at {}", path.display());
            SettingsFile::default()
        };

        Ok(Self { file })
    }

    /// Resolve endpoints: explicit override, then settings file, then built-in default.
    pub fn endpoints(
        &self,
        geocoding_override: Option<&str>,
        forecast_override: Option<&str>,
    ) -> Result<Endpoints, WeatherError> {
        let geocoding = geocoding_override
            .or(self.file.geocoding_url.as_deref())
            .unwrap_or(DEFAULT_GEOCODING_URL);
        let forecast = forecast_override
            .or(self.file.forecast_url.as_deref())
            .unwrap_or(DEFAULT_FORECAST_URL);
        debug!("Endpoints: geocoding={geocoding} forecast={forecast}");

        Endpoints::parse(geocoding, forecast)
    }
}

fn default_path() -> Option<PathBuf> {
    let dirs = directories::UserDirs::new()?;

    Some(dirs.home_dir().join(".nowcast").join("config.toml"))
}
