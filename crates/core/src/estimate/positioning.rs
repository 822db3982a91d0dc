/// Upper bound applied to |latitude| before any boundary correction.
pub const MAX_TILT_DEG: f64 = 35.0;

/// Capped tilts at or below this get a small steepening for self-cleaning.
const LOW_TILT_LIMIT_DEG: f64 = 25.0;
const LOW_TILT_BOOST_DEG: f64 = 2.0;

const COMPASS_BIN_DEG: f64 = 45.0;
const COMPASS: [&str; 8] = [
    "North",
    "North-East",
    "East",
    "South-East",
    "South",
    "South-West",
    "West",
    "North-West",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Positioning {
    pub tilt: f64,
    pub azimuth: f64,
}

impl Positioning {
    pub fn for_latitude(latitude: f64) -> Self {
        Self {
            tilt: optimal_tilt(latitude),
            azimuth: optimal_azimuth(latitude),
        }
    }

    pub fn direction(&self) -> &'static str {
        direction_name(self.azimuth)
    }
}

pub fn optimal_tilt(latitude: f64) -> f64 {
    let capped = latitude.abs().min(MAX_TILT_DEG);
    // A high-latitude reduction (> 50°) cannot trigger after the cap, so only the
    // low-tilt boost is observable.
    if capped <= LOW_TILT_LIMIT_DEG {
        capped + LOW_TILT_BOOST_DEG
    } else {
        capped
    }
}

/// Equator-facing: south (180°) north of the equator, north (0°) south of it.
pub fn optimal_azimuth(latitude: f64) -> f64 {
    if latitude >= 0.0 {
        180.0
    } else {
        0.0
    }
}

/// 8-way compass name for an azimuth in degrees clockwise from north.
/// Bins are 45° wide and centred on each point, so 22.5° already reads North-East.
pub fn direction_name(azimuth: f64) -> &'static str {
    let az = azimuth.rem_euclid(360.0);
    let idx = ((az + COMPASS_BIN_DEG / 2.0) / COMPASS_BIN_DEG).floor() as usize;
    COMPASS[idx % COMPASS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_matches_capped_latitude_plus_boost() {
        for tenth in -900..=900 {
            let lat = tenth as f64 / 10.0;
            let capped = lat.abs().min(35.0);
            let expected = capped + if capped <= 25.0 { 2.0 } else { 0.0 };
            assert_eq!(optimal_tilt(lat), expected, "lat={lat}");
        }
    }

    #[test]
    fn tilt_boundaries() {
        assert_eq!(optimal_tilt(0.0), 2.0);
        assert_eq!(optimal_tilt(25.0), 27.0);
        assert_eq!(optimal_tilt(-25.0), 27.0);
        assert_eq!(optimal_tilt(25.1), 25.1);
        assert_eq!(optimal_tilt(28.6), 28.6);
        assert_eq!(optimal_tilt(60.0), 35.0);
        assert_eq!(optimal_tilt(-90.0), 35.0);
    }

    #[test]
    fn azimuth_faces_the_equator() {
        assert_eq!(optimal_azimuth(0.0), 180.0);
        assert_eq!(optimal_azimuth(45.0), 180.0);
        assert_eq!(optimal_azimuth(-0.1), 0.0);
        assert_eq!(optimal_azimuth(-33.9), 0.0);
    }

    #[test]
    fn compass_bins_and_boundaries() {
        assert_eq!(direction_name(0.0), "North");
        assert_eq!(direction_name(180.0), "South");
        assert_eq!(direction_name(22.4), "North");
        assert_eq!(direction_name(22.5), "North-East");
        assert_eq!(direction_name(90.0), "East");
        assert_eq!(direction_name(157.5), "South");
        assert_eq!(direction_name(202.4), "South");
        assert_eq!(direction_name(202.5), "South-West");
        assert_eq!(direction_name(270.0), "West");
        assert_eq!(direction_name(337.4), "North-West");
        assert_eq!(direction_name(337.5), "North");
        assert_eq!(direction_name(360.0), "North");
        assert_eq!(direction_name(-90.0), "West");
        assert_eq!(direction_name(540.0), "South");
    }

    #[test]
    fn positioning_for_southern_site() {
        let p = Positioning::for_latitude(-33.9);
        assert_eq!(p.tilt, 33.9);
        assert_eq!(p.azimuth, 0.0);
        assert_eq!(p.direction(), "North");
    }
}
