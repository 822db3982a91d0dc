use crate::domain::report::WeatherSnapshot;

const CLOUD_PENALTY_WEIGHT: f64 = 0.3;
const HUMIDITY_THRESHOLD_PCT: f64 = 60.0;
const HUMIDITY_PENALTY_WEIGHT: f64 = 0.1;
/// Irradiance only takes half of the cloud penalty.
const IRRADIANCE_CLOUD_SHARE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherAdjustment {
    pub cloud_penalty: f64,
    pub humidity_penalty: f64,
}

impl WeatherAdjustment {
    pub fn from_snapshot(weather: &WeatherSnapshot) -> Self {
        let cloud = f64::from(weather.cloud_cover);
        let humidity = f64::from(weather.humidity);
        Self {
            cloud_penalty: (cloud / 100.0) * CLOUD_PENALTY_WEIGHT,
            humidity_penalty: ((humidity - HUMIDITY_THRESHOLD_PCT) / 100.0).max(0.0)
                * HUMIDITY_PENALTY_WEIGHT,
        }
    }

    pub fn efficiency(&self, efficiency_gain: f64) -> f64 {
        efficiency_gain * (1.0 - self.cloud_penalty - self.humidity_penalty)
    }

    pub fn annual_irradiance(&self, annual: f64) -> f64 {
        annual * (1.0 - self.cloud_penalty * IRRADIANCE_CLOUD_SHARE)
    }
}
