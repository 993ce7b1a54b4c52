use thiserror::Error;

/// Every way a weather lookup can end without a report.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No city name was given.
    #[error("missing city name")]
    Usage,

    /// The geocoding service returned no candidates.
    #[error("City not found: {city}")]
    CityNotFound { city: String },

    /// The forecast response carried no current weather.
    #[error("Weather data not available for {name}")]
    WeatherUnavailable { name: String },

    /// A service answered with a non-success status.
    #[error("{code} {reason}")]
    Status { code: u16, reason: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not JSON, or not JSON of the expected shape.
    #[error("invalid response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid endpoint URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl WeatherError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            WeatherError::CityNotFound { .. } => 2,
            WeatherError::WeatherUnavailable { .. } => 3,
            WeatherError::Usage
            | WeatherError::Status { .. }
            | WeatherError::Transport(_)
            | WeatherError::Parse(_)
            | WeatherError::InvalidUrl { .. } => 1,
        }
    }
}
