pub mod adjust;
pub mod codes;
pub mod error;
pub mod open_meteo;

use crate::domain::report::WeatherSnapshot;

pub use adjust::WeatherAdjustment;

#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> anyhow::Result<WeatherSnapshot>;
}

/// Best-effort lookup. Any provider failure is logged and reported as "no data".
pub async fn fetch_current(
    provider: &dyn WeatherProvider,
    latitude: f64,
    longitude: f64,
) -> Option<WeatherSnapshot> {
    match provider.current_conditions(latitude, longitude).await {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            tracing::warn!(
                provider = provider.provider_name(),
                latitude,
                longitude,
                error = %format!("{err:#}"),
                "weather unavailable; continuing without adjustment"
            );
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[tokio::test]
    async fn fetch_current_passes_snapshot_through() {
        let provider = FixedWeather(snapshot(40, 55));
        let got = fetch_current(&provider, 10.0, 20.0).await;
        assert_eq!(got, Some(snapshot(40, 55)));
    }

    #[tokio::test]
    async fn fetch_current_swallows_failures() {
        assert_eq!(fetch_current(&FailingWeather, 10.0, 20.0).await, None);
    }
}
