use crate::config::Settings;
use crate::domain::report::{round_to, WeatherSnapshot};
use crate::weather::codes;
use crate::weather::error::WeatherUnavailable;
use crate::weather::WeatherProvider;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const PROVIDER: &str = "open_meteo";
const FORECAST_PATH: &str = "/v1/forecast";
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,is_day,weather_code,cloud_cover,wind_speed_10m";
const DEFAULT_VISIBILITY_KM: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            &settings.weather_base_url,
            Duration::from_secs(settings.weather_timeout_secs),
        )
    }

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build weather http client")?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), FORECAST_PATH)
    }

    async fn fetch_once(&self, latitude: f64, longitude: f64) -> Result<Value> {
        let res = self
            .http
            .get(self.url())
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("temperature_unit", "celsius".to_string()),
                ("wind_speed_unit", "kmh".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| unavailable("http", format!("request failed: {e}")))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| unavailable("http", format!("failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(unavailable("http", format!("status={status}")));
        }

        serde_json::from_str::<Value>(&text)
            .map_err(|e| unavailable("decode", format!("response is not valid JSON: {e}")))
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenMeteoClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    async fn current_conditions(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot> {
        let raw = self.fetch_once(latitude, longitude).await?;
        parse_current(raw)
    }
}

fn unavailable(stage: &'static str, detail: String) -> anyhow::Error {
    WeatherUnavailable {
        provider: PROVIDER,
        stage,
        detail,
    }
    .into()
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    #[serde(default)]
    time: Option<String>,
    temperature_2m: f64,
    relative_humidity_2m: f64,
    cloud_cover: f64,
    wind_speed_10m: f64,
    // Kept as raw values so an absent key (defaulted) differs from an explicit null.
    #[serde(default = "default_weather_code")]
    weather_code: Value,
    #[serde(default = "default_is_day")]
    is_day: Value,
}

fn default_weather_code() -> Value {
    Value::from(0)
}

fn default_is_day() -> Value {
    Value::from(1)
}

/// Turns a raw forecast payload into a snapshot. The raw payload is kept on the snapshot.
pub fn parse_current(raw: Value) -> Result<WeatherSnapshot> {
    let envelope = serde_json::from_value::<ForecastResponse>(raw.clone())
        .map_err(|e| unavailable("decode", e.to_string()))?;

    let current = match envelope.current {
        Some(v) if v.as_object().is_some_and(|o| !o.is_empty()) => v,
        _ => return Err(unavailable("missing_current", "no current block".to_string())),
    };

    let current = serde_json::from_value::<CurrentBlock>(current)
        .map_err(|e| unavailable("decode", format!("bad current block: {e}")))?;

    let (description, icon) = codes::describe(
        current.weather_code.as_i64(),
        current.is_day.as_i64() == Some(1),
    );

    // Open-Meteo reports local time without an offset, e.g. "2026-10-19T12:15".
    let observed_at = current
        .time
        .as_deref()
        .and_then(|t| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M").ok());

    Ok(WeatherSnapshot {
        temperature: round_to(current.temperature_2m, 1),
        humidity: percent(current.relative_humidity_2m),
        cloud_cover: percent(current.cloud_cover),
        weather_description: description.to_string(),
        wind_speed: round_to(current.wind_speed_10m, 1),
        visibility: DEFAULT_VISIBILITY_KM,
        weather_icon: icon,
        observed_at,
        raw_data: raw,
    })
}

// Ties go to the even neighbour: 70.5% reads as 70%, not 71%.
fn percent(v: f64) -> u8 {
    v.round_ties_even().clamp(0.0, 100.0) as u8
}
