use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse weather classification, as reported in OpenWeather's `weather[].main`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    Other(String),
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Drizzle => "Drizzle",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snow => "Snow",
            Condition::Mist => "Mist",
            Condition::Fog => "Fog",
            Condition::Haze => "Haze",
            Condition::Other(s) => s,
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        match value {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Drizzle" => Condition::Drizzle,
            "Thunderstorm" => Condition::Thunderstorm,
            "Snow" => Condition::Snow,
            "Mist" => Condition::Mist,
            "Fog" => Condition::Fog,
            "Haze" => Condition::Haze,
            other => Condition::Other(other.to_string()),
        }
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::from(value.as_str())
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        match value {
            Condition::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions for one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: f64,
    pub wind_speed_mps: f64,
    pub condition: Condition,
    pub description: String,
    pub observation_time: DateTime<Utc>,
}

/// One 3-hour slot of the 5-day forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: Condition,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    pub city: String,
    pub country: String,
    pub samples: Vec<ForecastSample>,
}

/// Summary of every forecast sample that falls on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub temp_avg_c: f64,
    pub humidity_avg_pct: f64,
    pub wind_speed_avg_mps: f64,
    pub condition: Condition,
    pub description: String,
    pub sample_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City string actually sent to the API.
    pub query: String,
    pub current: CurrentWeather,
    /// `None` when the forecast could not be fetched.
    pub daily: Option<Vec<DailyForecast>>,
}
