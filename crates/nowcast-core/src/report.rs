use crate::weather_code;
use std::fmt;

/// Result of a weather query, in a UI-friendly form.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub place: String,
    pub temperature: f64,
    pub weather_code: i64,
}

impl WeatherReport {
    pub fn description(&self) -> &'static str {
        weather_code::describe(self.weather_code)
    }
}

/// `Weather in <place>: <temperature>°C, <description>`
///
/// The temperature is printed as received, without rounding.
impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weather in {}: {}°C, {}",
            self.place,
            self.temperature,
            self.description()
        )
    }
}
