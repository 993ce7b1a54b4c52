use crate::error::WeatherError;
use std::fmt;

/// A city name as typed by the user: words joined by single spaces, trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    /// Join argument words into a query.
    ///
    /// Fails with [`WeatherError::Usage`] when nothing but whitespace is left.
    pub fn from_args<I, S>(args: I) -> Result<Self, WeatherError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let city = joined.trim();

        if city.is_empty() {
            return Err(WeatherError::Usage);
        }

        Ok(Self(city.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
