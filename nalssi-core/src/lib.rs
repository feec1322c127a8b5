//! Core library for the `nalssi` weather client.
//!
//! This crate defines:
//! - Korean-to-English city name normalization
//! - The OpenWeather client (current weather and 5-day forecast)
//! - Daily aggregation of the 3-hourly forecast
//! - Configuration & credentials handling
//!
//! It is used by `nalssi-cli`, but can also be reused by other binaries or services.

pub mod aggregate;
pub mod city;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;

pub use aggregate::{aggregate_daily, aggregate_local};
pub use city::normalize_city;
pub use config::Config;
pub use error::WeatherError;
pub use model::{Condition, CurrentWeather, DailyForecast, Forecast, ForecastSample, WeatherReport};
pub use provider::{WeatherProvider, openweather::OpenWeatherClient};
pub use report::fetch_report;
