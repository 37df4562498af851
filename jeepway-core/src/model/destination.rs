use std::fmt;
use std::str::FromStr;

use geo::Point;

use crate::Error;

/// A commuter's chosen destination in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    lat: f64,
    lng: f64,
}

impl Destination {
    /// Creates a destination, rejecting non-finite or out-of-range coordinates
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinates`] if latitude is outside [-90, 90],
    /// longitude is outside [-180, 180], or either value is NaN or infinite.
    pub fn new(lat: f64, lng: f64) -> Result<Self, Error> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);

        if valid {
            Ok(Self { lat, lng })
        } else {
            Err(Error::InvalidCoordinates { lat, lng })
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Point in GeoJSON axis order (x = longitude, y = latitude)
    pub fn as_point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Parses `"LAT,LNG"`, the order people read coordinates off a map
impl FromStr for Destination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidData(format!("expected LAT,LNG but got '{s}'")))?;

        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|e| Error::InvalidData(format!("invalid coordinate '{value}': {e}")))
        };

        Self::new(parse(lat)?, parse(lng)?)
    }
}
