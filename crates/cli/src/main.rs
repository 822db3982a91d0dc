use anyhow::Context;
use clap::Parser;
use solar_core::domain::location::LocationQuery;
use solar_core::weather::open_meteo::OpenMeteoClient;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "solar_cli", about = "Estimate optimal panel positioning for a site")]
struct Args {
    /// Latitude in degrees, -90..=90.
    #[arg(long, allow_hyphen_values = true)]
    latitude: f64,

    /// Longitude in degrees, -180..=180.
    #[arg(long, allow_hyphen_values = true)]
    longitude: f64,

    /// Adjust the estimate using current conditions from the weather service.
    #[arg(long)]
    include_weather: bool,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = solar_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let query = LocationQuery::new(args.latitude, args.longitude, args.include_weather)?;

    let client = if query.include_weather() {
        Some(OpenMeteoClient::from_settings(&settings)?)
    } else {
        None
    };
    let provider = client
        .as_ref()
        .map(|c| c as &dyn solar_core::weather::WeatherProvider);

    let report = match solar_core::analysis::analyze(&query, provider).await {
        Ok(report) => report,
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            return Err(err);
        }
    };

    let out = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("failed to serialize report")?;
    println!("{out}");

    tracing::info!(
        latitude = query.latitude(),
        longitude = query.longitude(),
        weather_adjusted = report.weather_adjusted,
        "analysis written"
    );
    Ok(())
}

fn init_sentry(settings: &solar_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
