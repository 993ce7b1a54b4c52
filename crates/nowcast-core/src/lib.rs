//! Current weather for a city name, via Open-Meteo geocoding and forecast services.

pub mod endpoints;
pub mod error;
pub mod forecast;
pub mod geocoding;
pub mod http;
pub mod query;
pub mod report;
pub mod weather_code;
pub mod weather_service;

pub use reqwest::Url;
