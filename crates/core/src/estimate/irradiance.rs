use super::positioning::MAX_TILT_DEG;

/// Base annual plane-of-array irradiance (kWh/m²/yr) by |latitude| band.
/// Evaluated top to bottom; each bound is exclusive.
const BASE_POA_BANDS: [(f64, f64); 5] = [
    (10.0, 1900.0),
    (20.0, 1750.0),
    (30.0, 1800.0),
    (45.0, 1500.0),
    (60.0, 1200.0),
];
const BASE_POA_POLAR: f64 = 800.0;

// Monsoon band, all bounds inclusive. Latitude is absolute, longitude signed.
const MONSOON_LAT: (f64, f64) = (8.0, 37.0);
const MONSOON_LNG: (f64, f64) = (68.0, 97.0);
const MONSOON_CORE_LNG: (f64, f64) = (77.0, 92.0);
const MONSOON_CORE_FACTOR: f64 = 0.90;
const MONSOON_EDGE_FACTOR: f64 = 0.85;

const TILT_PENALTY_PER_DEG: f64 = 0.01;
const TILT_PENALTY_FLOOR: f64 = 0.75;

const TROPICAL_LAT: f64 = 23.5;
const TEMPERATE_LAT: f64 = 45.0;

const MONSOON_WEIGHTS: [f64; 12] = [
    0.90, 0.85, 1.05, 1.10, 1.05, 0.60, 0.50, 0.55, 0.70, 0.95, 0.90, 0.90,
];
const TROPICAL_WEIGHTS: [f64; 12] = [
    0.84, 0.86, 0.89, 0.88, 0.85, 0.78, 0.80, 0.83, 0.85, 0.87, 0.87, 0.85,
];
const TEMPERATE_WEIGHTS: [f64; 12] = [
    0.63, 0.71, 0.84, 0.95, 1.06, 1.08, 1.09, 1.03, 0.88, 0.76, 0.62, 0.55,
];
const HIGH_LAT_WEIGHTS: [f64; 12] = [
    0.35, 0.55, 0.82, 1.08, 1.28, 1.35, 1.33, 1.15, 0.88, 0.65, 0.40, 0.26,
];

const EFFICIENCY_BASE_PCT: f64 = 5.0;
const EFFICIENCY_PER_DEG_PCT: f64 = 0.3;
const EFFICIENCY_CAP_PCT: f64 = 25.0;

fn within((lo, hi): (f64, f64), v: f64) -> bool {
    (lo..=hi).contains(&v)
}

pub fn is_monsoon_region(latitude: f64, longitude: f64) -> bool {
    within(MONSOON_LAT, latitude.abs()) && within(MONSOON_LNG, longitude)
}

fn base_poa(latitude: f64) -> f64 {
    let lat = latitude.abs();
    BASE_POA_BANDS
        .iter()
        .find(|(upper, _)| lat < *upper)
        .map(|(_, poa)| *poa)
        .unwrap_or(BASE_POA_POLAR)
}

fn regional_factor(latitude: f64, longitude: f64) -> f64 {
    if !is_monsoon_region(latitude, longitude) {
        1.0
    } else if within(MONSOON_CORE_LNG, longitude) {
        MONSOON_CORE_FACTOR
    } else {
        MONSOON_EDGE_FACTOR
    }
}

fn tilt_penalty(latitude: f64, tilt: f64) -> f64 {
    let reference = latitude.abs().min(MAX_TILT_DEG);
    (1.0 - TILT_PENALTY_PER_DEG * (tilt - reference).abs()).max(TILT_PENALTY_FLOOR)
}

/// Annual plane-of-array irradiance (kWh/m²/yr) for a panel at `tilt` degrees.
pub fn annual_poa(latitude: f64, longitude: f64, tilt: f64) -> f64 {
    base_poa(latitude) * regional_factor(latitude, longitude) * tilt_penalty(latitude, tilt)
}

/// Seasonal weights in calendar order for the site's hemisphere.
pub fn seasonal_weights(latitude: f64, longitude: f64) -> [f64; 12] {
    let lat = latitude.abs();
    let mut weights = if is_monsoon_region(latitude, longitude) {
        MONSOON_WEIGHTS
    } else if lat < TROPICAL_LAT {
        TROPICAL_WEIGHTS
    } else if lat < TEMPERATE_LAT {
        TEMPERATE_WEIGHTS
    } else {
        HIGH_LAT_WEIGHTS
    };
    if latitude < 0.0 {
        weights.rotate_left(6);
    }
    weights
}

/// Splits `annual_total` across the twelve months. The result sums to `annual_total`.
pub fn monthly_distribution(latitude: f64, longitude: f64, annual_total: f64) -> [f64; 12] {
    let weights = seasonal_weights(latitude, longitude);
    let weight_sum: f64 = weights.iter().sum();
    let mut values = weights.map(|w| annual_total * (w / weight_sum));

    let actual: f64 = values.iter().sum();
    if actual > 0.0 {
        let scale = annual_total / actual;
        for v in &mut values {
            *v *= scale;
        }
    }
    values
}

/// Headline gain (percent) of the optimal tilt over a flat install, before weather.
pub fn efficiency_gain(latitude: f64) -> f64 {
    (EFFICIENCY_BASE_PCT + latitude.abs() * EFFICIENCY_PER_DEG_PCT).min(EFFICIENCY_CAP_PCT)
}
