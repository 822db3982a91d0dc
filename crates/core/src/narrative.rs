//! Human-readable text derived from the numeric results.

use crate::domain::report::{WeatherSnapshot, MONTH_FULL};
use crate::estimate::Positioning;

pub const MAX_TIPS: usize = 6;

const TROPICAL_LAT: f64 = 23.5;
const TEMPERATE_LAT: f64 = 40.0;
const HIGH_CLOUD_PCT: u8 = 70;
const HIGH_HUMIDITY_PCT: u8 = 80;

const TROPICAL_TIPS: [&str; 2] = [
    "Your tropical location receives consistent solar irradiance year-round",
    "Consider tracking systems for maximum efficiency due to high sun angles",
];
const TEMPERATE_TIPS: [&str; 2] = [
    "Seasonal adjustment of tilt angle can increase annual energy yield by 3-5%",
    "Consider east-west orientation to reduce afternoon overheating",
];
const HIGH_LATITUDE_TIPS: [&str; 2] = [
    "Winter conditions may impact performance - ensure easy cleaning access",
    "Consider higher mounting to maximize winter sun exposure",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthExtremes {
    pub peak: usize,
    pub low: usize,
}

impl MonthExtremes {
    /// Ties resolve to the earliest month.
    pub fn of(values: &[f64; 12]) -> Self {
        let mut peak = 0;
        let mut low = 0;
        for (i, v) in values.iter().enumerate().skip(1) {
            if *v > values[peak] {
                peak = i;
            }
            if *v < values[low] {
                low = i;
            }
        }
        Self { peak, low }
    }
}

pub fn summary_text(
    positioning: &Positioning,
    annual_irradiance: f64,
    monthly: &[f64; 12],
    extremes: MonthExtremes,
) -> String {
    format!(
        "The solar array is optimally positioned at a {:.1}° tilt angle, \
         facing {} (azimuth {:.0}°). \
         This configuration maximizes solar energy capture, delivering an estimated {:.0} \
         kilowatt-hours per square meter annually. \
         Peak production occurs in {} ({:.0} kWh/m²), \
         while {} shows the lowest output ({:.0} kWh/m²).",
        positioning.tilt,
        positioning.direction().to_lowercase(),
        positioning.azimuth,
        annual_irradiance,
        MONTH_FULL[extremes.peak],
        monthly[extremes.peak],
        MONTH_FULL[extremes.low],
        monthly[extremes.low],
    )
}

pub fn orientation_text(positioning: &Positioning) -> String {
    format!(
        "Face panels toward {} ({:.0}°) at {:.1}° tilt",
        positioning.direction(),
        positioning.azimuth,
        positioning.tilt
    )
}

pub fn tips(latitude: f64, tilt: f64, weather: Option<&WeatherSnapshot>) -> Vec<String> {
    let lat = latitude.abs();
    let band = if lat < TROPICAL_LAT {
        TROPICAL_TIPS
    } else if lat < TEMPERATE_LAT {
        TEMPERATE_TIPS
    } else {
        HIGH_LATITUDE_TIPS
    };

    let mut out: Vec<String> = band.iter().map(|s| s.to_string()).collect();
    out.push("Regular cleaning improves efficiency by 2-5%".to_string());
    out.push("Avoid shading between 10 AM - 2 PM for optimal performance".to_string());
    out.push(format!(
        "Optimal tilt angle of {tilt:.1}° is ideal for your latitude"
    ));

    if let Some(w) = weather {
        if w.cloud_cover > HIGH_CLOUD_PCT {
            out.insert(
                0,
                format!(
                    "High cloud cover ({}%) may reduce current efficiency",
                    w.cloud_cover
                ),
            );
        }
        if w.humidity > HIGH_HUMIDITY_PCT {
            out.push("High humidity - ensure proper ventilation around panels".to_string());
        }
    }

    out.truncate(MAX_TIPS);
    out
}
