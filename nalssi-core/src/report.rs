//! One lookup: normalize the city, fetch current weather, then the forecast.

use tracing::{info, warn};

use crate::{
    aggregate::aggregate_local, city::normalize_city, error::WeatherError, model::WeatherReport,
    provider::WeatherProvider,
};

/// Run a full lookup for `input`.
///
/// A failed current-weather fetch ends the lookup before the forecast is
/// requested. A failed forecast fetch only leaves `daily` empty (`None`).
pub async fn fetch_report(
    provider: &dyn WeatherProvider,
    input: &str,
) -> Result<WeatherReport, WeatherError> {
    let city = normalize_city(input).ok_or(WeatherError::EmptyQuery)?;
    if city != input.trim() {
        info!(input = input.trim(), %city, "Translated city name");
    }

    let current = provider.current(&city).await?;

    let daily = match provider.forecast(&city).await {
        Ok(forecast) => Some(aggregate_local(Some(&forecast))),
        Err(e) => {
            warn!(%city, error = %e, "Forecast unavailable, showing current weather only");
            None
        }
    };

    Ok(WeatherReport { query: city, current, daily })
}
