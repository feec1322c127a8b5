use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    Config,
    config::{DEFAULT_BASE_URL, DEFAULT_LANG},
    error::WeatherError,
    model::{Condition, CurrentWeather, Forecast, ForecastSample},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    lang: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            lang: DEFAULT_LANG.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let api_key = config.api_key()?.to_string();

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| WeatherError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            lang: config.lang().to_string(),
            base_url: config.base_url().to_string(),
            http,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        debug!(%url, city, lang = %self.lang, "Requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await
            .inspect_err(|e| warn!(endpoint, city, error = %e, "OpenWeather request failed"))?;

        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::NOT_FOUND {
            debug!(endpoint, city, "OpenWeather does not know this city");
            return Err(WeatherError::NotFound(city.to_string()));
        }

        if !status.is_success() {
            warn!(endpoint, city, status = status.as_u16(), "OpenWeather returned an error status");
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(endpoint, city, error = %e, "Failed to parse OpenWeather JSON");
            WeatherError::Malformed(e)
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    #[serde(default)]
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    #[serde(default)]
    city: Option<OwCity>,
    #[serde(default)]
    list: Option<Vec<OwForecastEntry>>,
}

/// Category and description of the first `weather` entry.
fn first_condition(weather: &[OwWeather]) -> (Condition, String) {
    weather
        .first()
        .map(|w| (Condition::from(w.main.as_str()), w.description.clone()))
        .unwrap_or_else(|| (Condition::Other("Unknown".to_string()), String::new()))
}

impl From<OwCurrentResponse> for CurrentWeather {
    fn from(parsed: OwCurrentResponse) -> Self {
        let (condition, description) = first_condition(&parsed.weather);

        CurrentWeather {
            city: parsed.name,
            country: parsed.sys.country,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            pressure_hpa: parsed.main.pressure,
            wind_speed_mps: parsed.wind.speed,
            condition,
            description,
            observation_time: unix_to_utc(parsed.dt).unwrap_or_else(Utc::now),
        }
    }
}

impl From<OwForecastResponse> for Forecast {
    fn from(parsed: OwForecastResponse) -> Self {
        let (city, country) = parsed
            .city
            .map(|c| (c.name, c.country))
            .unwrap_or_default();

        let samples = parsed
            .list
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| {
                let timestamp = unix_to_utc(entry.dt)?;
                let (condition, description) = first_condition(&entry.weather);
                Some(ForecastSample {
                    timestamp,
                    temperature_c: entry.main.temp,
                    feels_like_c: entry.main.feels_like,
                    humidity_pct: entry.main.humidity,
                    wind_speed_mps: entry.wind.speed,
                    condition,
                    description,
                })
            })
            .collect();

        Forecast { city, country, samples }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let parsed: OwCurrentResponse = self.get_json("weather", city).await?;
        Ok(parsed.into())
    }

    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        let parsed: OwForecastResponse = self.get_json("forecast", city).await?;
        Ok(parsed.into())
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
