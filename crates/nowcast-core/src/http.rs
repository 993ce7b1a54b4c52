use crate::error::WeatherError;
use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

/// Abstraction over "GET a URL, hand back its JSON body".
pub trait JsonClient {
    fn get_json(&self, url: &Url) -> Result<Value, WeatherError>;
}

/// Blocking `reqwest` implementation.
///
/// One attempt per call, platform default timeouts and redirect policy.
#[derive(Debug, Default)]
pub struct HttpJsonClient {
    client: Client,
}

impl HttpJsonClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl JsonClient for HttpJsonClient {
    fn get_json(&self, url: &Url) -> Result<Value, WeatherError> {
        debug!("GET {url}");
        let resp = self.client.get(url.clone()).send()?;

        let status = resp.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            return Err(WeatherError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = resp.text()?;
        let value: Value = serde_json::from_str(&body)?;
        debug!("Response body: {value}");

        Ok(value)
    }
}
