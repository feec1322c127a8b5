use thiserror::Error;

/// Message shown to the user for every failed lookup, whatever the cause.
pub const NOT_FOUND_MESSAGE: &str = "City not found. Please check the city name.";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("City not found: {0}")]
    NotFound(String),

    #[error("OpenWeather request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed OpenWeather response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("City name is empty")]
    EmptyQuery,

    #[error(
        "No OpenWeather API key configured.\n\
         Hint: run `nalssi configure` or set OPENWEATHER_API_KEY."
    )]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WeatherError {
    /// User-facing text. Fetch failures all collapse to the same message.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingApiKey | Self::Config(_) => self.to_string(),
            _ => NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// True for errors raised while looking a city up, as opposed to setup errors.
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, Self::MissingApiKey | Self::Config(_))
    }
}
