use std::fmt;

/// The weather collaborator could not produce a usable snapshot.
/// Never surfaces past the adjuster; the report falls back to unadjusted figures.
#[derive(Debug, Clone)]
pub struct WeatherUnavailable {
    pub provider: &'static str,
    pub stage: &'static str,
    pub detail: String,
}

impl fmt::Display for WeatherUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weather unavailable (provider={}, stage={}): {}",
            self.provider, self.stage, self.detail
        )
    }
}

impl std::error::Error for WeatherUnavailable {}
