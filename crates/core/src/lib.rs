pub mod analysis;
pub mod domain;
pub mod estimate;
pub mod narrative;
pub mod weather;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";
    pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 10;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub weather_base_url: String,
        pub weather_timeout_secs: u64,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                sentry_dsn: None,
                weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
                weather_timeout_secs: DEFAULT_WEATHER_TIMEOUT_SECS,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let weather_base_url = std::env::var("WEATHER_BASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string());

            let weather_timeout_secs = match std::env::var("WEATHER_TIMEOUT_SECS") {
                Ok(s) => s
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("WEATHER_TIMEOUT_SECS must be an integer (got {s:?})"))?,
                Err(_) => DEFAULT_WEATHER_TIMEOUT_SECS,
            };

            Ok(Self {
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                weather_base_url,
                weather_timeout_secs,
            })
        }
    }
}
