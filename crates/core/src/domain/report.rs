use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTH_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The single externally visible result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub latitude: f64,
    pub longitude: f64,
    pub optimal_tilt: f64,
    pub optimal_azimuth: f64,
    /// kWh/m²/yr after any weather adjustment.
    pub annual_irradiance: f64,
    /// Percent gain over a flat install, after any weather adjustment.
    pub efficiency_gain: f64,
    pub monthly_data: Vec<MonthlyValue>,
    pub peak_month: String,
    pub low_month: String,
    pub tips: Vec<String>,
    pub summary_text: String,
    pub orientation_text: String,
    pub weather_adjusted: bool,
    pub weather_data: Option<WeatherSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyValue {
    pub month: String,
    pub value: f64,
}

/// Current conditions as reported by the weather collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// °C
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Percent of sky covered.
    pub cloud_cover: u8,
    pub weather_description: String,
    /// km/h
    pub wind_speed: f64,
    /// km; the provider call does not report visibility so this is a fixed value.
    pub visibility: f64,
    pub weather_icon: String,
    #[serde(default)]
    pub observed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub raw_data: serde_json::Value,
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
