use crate::{
    Config, CurrentWeather, Forecast, error::WeatherError,
    provider::openweather::OpenWeatherClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current conditions and the 5-day forecast for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<CurrentWeather, WeatherError>;

    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError>;
}

/// Build the OpenWeather client from config. Fails if no API key is available.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    Ok(Box::new(OpenWeatherClient::from_config(config)?))
}
