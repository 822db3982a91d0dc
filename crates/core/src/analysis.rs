use crate::domain::location::LocationQuery;
use crate::domain::report::{round_to, AnalysisReport, MonthlyValue, WeatherSnapshot, MONTH_ABBR, MONTH_FULL};
use crate::estimate::{annual_poa, efficiency_gain, monthly_distribution, Positioning};
use crate::narrative::{self, MonthExtremes, MAX_TIPS};
use crate::weather::{self, WeatherAdjustment, WeatherProvider};
use anyhow::ensure;

/// Runs the full pipeline for one query. Weather is only fetched when the query asks
/// for it and a provider is configured; a failed lookup yields an unadjusted report.
pub async fn analyze(
    query: &LocationQuery,
    provider: Option<&dyn WeatherProvider>,
) -> anyhow::Result<AnalysisReport> {
    let weather = match provider {
        Some(p) if query.include_weather() => {
            weather::fetch_current(p, query.latitude(), query.longitude()).await
        }
        None if query.include_weather() => {
            tracing::warn!("weather requested but no provider configured");
            None
        }
        _ => None,
    };
    assemble(query, weather)
}

pub fn assemble(
    query: &LocationQuery,
    weather: Option<WeatherSnapshot>,
) -> anyhow::Result<AnalysisReport> {
    let (lat, lng) = (query.latitude(), query.longitude());

    let positioning = Positioning::for_latitude(lat);
    let mut annual = annual_poa(lat, lng, positioning.tilt);
    let mut efficiency = efficiency_gain(lat);

    if let Some(w) = &weather {
        let adj = WeatherAdjustment::from_snapshot(w);
        efficiency = adj.efficiency(efficiency);
        annual = adj.annual_irradiance(annual);
    }

    let monthly = monthly_distribution(lat, lng, annual);
    let extremes = MonthExtremes::of(&monthly);

    let report = AnalysisReport {
        latitude: lat,
        longitude: lng,
        optimal_tilt: round_to(positioning.tilt, 1),
        optimal_azimuth: round_to(positioning.azimuth, 1),
        annual_irradiance: round_to(annual, 1),
        efficiency_gain: round_to(efficiency, 1),
        monthly_data: MONTH_ABBR
            .iter()
            .zip(monthly.iter())
            .map(|(month, value)| MonthlyValue {
                month: month.to_string(),
                value: round_to(*value, 1),
            })
            .collect(),
        peak_month: MONTH_FULL[extremes.peak].to_string(),
        low_month: MONTH_FULL[extremes.low].to_string(),
        tips: narrative::tips(lat, positioning.tilt, weather.as_ref()),
        summary_text: narrative::summary_text(&positioning, annual, &monthly, extremes),
        orientation_text: narrative::orientation_text(&positioning),
        weather_adjusted: weather.is_some(),
        weather_data: weather,
    };

    check(&report)?;
    Ok(report)
}

fn check(report: &AnalysisReport) -> anyhow::Result<()> {
    ensure!(
        report.annual_irradiance.is_finite() && report.annual_irradiance > 0.0,
        "annual irradiance must be positive (got {})",
        report.annual_irradiance
    );
    ensure!(
        report.efficiency_gain.is_finite(),
        "efficiency gain is not finite"
    );
    ensure!(
        report.monthly_data.len() == 12,
        "monthly data must have 12 entries (got {})",
        report.monthly_data.len()
    );
    ensure!(
        report
            .monthly_data
            .iter()
            .all(|m| m.value.is_finite() && m.value >= 0.0),
        "monthly values must be finite and non-negative"
    );
    ensure!(
        report.tips.len() <= MAX_TIPS,
        "at most {MAX_TIPS} tips (got {})",
        report.tips.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::testing::{snapshot, FailingWeather, FixedWeather};

    fn query(lat: f64, lng: f64, include_weather: bool) -> LocationQuery {
        LocationQuery::new(lat, lng, include_weather).unwrap()
    }

    #[test]
    fn delhi_without_weather() {
        let r = assemble(&query(28.6, 77.2, false), None).unwrap();
        assert_eq!(r.optimal_tilt, 28.6);
        assert_eq!(r.optimal_azimuth, 180.0);
        assert_eq!(r.annual_irradiance, 1620.0);
        assert_eq!(r.efficiency_gain, 13.6);
        assert_eq!(r.monthly_data.len(), 12);
        assert_eq!(r.monthly_data[0].month, "Jan");
        // Monsoon template peaks in April and bottoms out in July.
        assert_eq!(r.peak_month, "April");
        assert_eq!(r.low_month, "July");
        assert!(!r.weather_adjusted);
        assert!(r.weather_data.is_none());
        assert_eq!(
            r.orientation_text,
            "Face panels toward South (180°) at 28.6° tilt"
        );
        assert!(r.summary_text.contains("estimated 1620 kilowatt-hours"));
        assert_eq!(r.tips.len(), 5);
    }

    #[test]
    fn equator_site() {
        let r = assemble(&query(0.0, 0.0, false), None).unwrap();
        assert_eq!(r.optimal_azimuth, 180.0);
        assert_eq!(r.optimal_tilt, 2.0);
        assert_eq!(r.annual_irradiance, 1862.0);
        assert_eq!(r.efficiency_gain, 5.0);
    }

    #[test]
    fn sydney_faces_north_with_rotated_months() {
        let south = assemble(&query(-33.9, 151.2, false), None).unwrap();
        let north = assemble(&query(33.9, 151.2, false), None).unwrap();
        assert_eq!(south.optimal_azimuth, 0.0);
        assert!(south.orientation_text.contains("North (0°)"));
        for m in 0..12 {
            assert_eq!(
                south.monthly_data[m].value,
                north.monthly_data[(m + 6) % 12].value
            );
        }
        assert_eq!(south.peak_month, "January");
        assert_eq!(north.peak_month, "July");
    }

    #[test]
    fn weather_scales_annual_and_efficiency() {
        let w = snapshot(80, 90);
        let r = assemble(&query(28.6, 77.2, true), Some(w.clone())).unwrap();
        // cloud 0.24, humidity 0.03
        assert_eq!(r.annual_irradiance, round_to(1620.0 * (1.0 - 0.12), 1));
        assert_eq!(r.efficiency_gain, round_to(13.58 * (1.0 - 0.24 - 0.03), 1));
        assert!(r.weather_adjusted);
        assert_eq!(r.weather_data, Some(w));
        assert_eq!(r.tips[0], "High cloud cover (80%) may reduce current efficiency");
        assert_eq!(r.tips.len(), 6);

        let sum: f64 = r.monthly_data.iter().map(|m| m.value).sum();
        assert!((sum - r.annual_irradiance).abs() < 0.1 * 12.0);
    }

    #[tokio::test]
    async fn weather_failure_returns_unadjusted_report() {
        let q = query(28.6, 77.2, true);
        let r = analyze(&q, Some(&FailingWeather)).await.unwrap();
        let baseline = assemble(&query(28.6, 77.2, false), None).unwrap();
        assert!(!r.weather_adjusted);
        assert!(r.weather_data.is_none());
        assert_eq!(r.annual_irradiance, baseline.annual_irradiance);
        assert_eq!(r.efficiency_gain, baseline.efficiency_gain);
        assert_eq!(r.monthly_data, baseline.monthly_data);
        assert_eq!(r.tips, baseline.tips);
    }

    #[tokio::test]
    async fn provider_not_consulted_unless_requested() {
        let provider = FixedWeather(snapshot(100, 100));
        let r = analyze(&query(51.5, -0.1, false), Some(&provider))
            .await
            .unwrap();
        assert!(!r.weather_adjusted);

        let r = analyze(&query(51.5, -0.1, true), Some(&provider))
            .await
            .unwrap();
        assert!(r.weather_adjusted);
        assert_eq!(r.weather_data.unwrap().cloud_cover, 100);
    }

    #[tokio::test]
    async fn missing_provider_degrades_to_unadjusted() {
        let r = analyze(&query(51.5, -0.1, true), None).await.unwrap();
        assert!(!r.weather_adjusted);
    }

    #[test]
    fn tips_never_exceed_limit() {
        for tenth in (-900..=900).step_by(25) {
            let lat = tenth as f64 / 10.0;
            let r = assemble(&query(lat, 80.0, true), Some(snapshot(95, 95))).unwrap();
            assert!(r.tips.len() <= MAX_TIPS);
            assert!(r.tips[0].starts_with("High cloud cover"));
        }
    }
}
