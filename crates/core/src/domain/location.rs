use serde::Deserialize;
use std::fmt;

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A validated request for a single site. Only constructible through [`LocationQuery::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationQuery {
    latitude: f64,
    longitude: f64,
    include_weather: bool,
}

/// Raw inbound shape, shared by the JSON body and the CLI.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub include_weather: Option<bool>,
}

impl LocationQuery {
    pub fn new(
        latitude: f64,
        longitude: f64,
        include_weather: bool,
    ) -> Result<Self, InvalidCoordinate> {
        check_range(CoordinateField::Latitude, latitude, LATITUDE_RANGE)?;
        check_range(CoordinateField::Longitude, longitude, LONGITUDE_RANGE)?;
        Ok(Self {
            latitude,
            longitude,
            include_weather,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn include_weather(&self) -> bool {
        self.include_weather
    }
}

impl TryFrom<RawLocation> for LocationQuery {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Self::new(
            raw.latitude,
            raw.longitude,
            raw.include_weather.unwrap_or(false),
        )
    }
}

fn check_range(
    field: CoordinateField,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), InvalidCoordinate> {
    // NaN fails `contains`, so it is rejected along with out-of-range values.
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(InvalidCoordinate {
            field,
            value,
            min,
            max,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    Latitude,
    Longitude,
}

impl CoordinateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidCoordinate {
    pub field: CoordinateField,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {}. Must be between {} and {} (got {}).",
            self.field.as_str(),
            self.min,
            self.max,
            self.value
        )
    }
}

impl std::error::Error for InvalidCoordinate {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_inclusive_bounds() {
        assert!(LocationQuery::new(90.0, 180.0, false).is_ok());
        assert!(LocationQuery::new(-90.0, -180.0, true).is_ok());
        assert!(LocationQuery::new(0.0, 0.0, false).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude_first() {
        let err = LocationQuery::new(90.5, 500.0, false).unwrap_err();
        assert_eq!(err.field, CoordinateField::Latitude);
        assert_eq!(err.value, 90.5);
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let err = LocationQuery::new(10.0, -180.01, false).unwrap_err();
        assert_eq!(err.field, CoordinateField::Longitude);
        assert_eq!((err.min, err.max), LONGITUDE_RANGE);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(LocationQuery::new(f64::NAN, 0.0, false).is_err());
        assert!(LocationQuery::new(0.0, f64::INFINITY, false).is_err());
    }

    #[test]
    fn raw_body_defaults_include_weather_to_false() {
        let raw: RawLocation =
            serde_json::from_value(json!({"latitude": 12.5, "longitude": -3.0})).unwrap();
        let q = LocationQuery::try_from(raw).unwrap();
        assert!(!q.include_weather());
        assert_eq!(q.latitude(), 12.5);
        assert_eq!(q.longitude(), -3.0);
    }

    #[test]
    fn raw_body_accepts_null_include_weather() {
        let raw: RawLocation = serde_json::from_value(
            json!({"latitude": 1.0, "longitude": 2.0, "include_weather": null}),
        )
        .unwrap();
        assert!(!LocationQuery::try_from(raw).unwrap().include_weather());
    }
}
