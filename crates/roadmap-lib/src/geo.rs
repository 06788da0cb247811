use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::error::Error;

/// Mean Earth radius used for great-circle lengths.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Immutable geographic point (x = latitude, y = longitude).
///
/// Equality and hashing are by exact coordinate value, so a point can be used
/// directly as a vertex key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    x: OrderedFloat<f64>,
    #[serde(rename = "lon")]
    y: OrderedFloat<f64>,
}

impl GeoPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: OrderedFloat(x),
            y: OrderedFloat(y),
        }
    }

    /// Latitude.
    pub fn x(&self) -> f64 {
        self.x.0
    }

    /// Longitude.
    pub fn y(&self) -> f64 {
        self.y.0
    }

    /// Both coordinates are finite numbers.
    pub fn is_valid(&self) -> bool {
        self.x.0.is_finite() && self.y.0.is_finite()
    }

    /// Straight-line distance over the raw coordinate pair.
    ///
    /// This is not a geographic distance; it only serves as the A* heuristic.
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x.0 - other.x.0;
        let dy = self.y.0 - other.y.0;
        (dx * dx + dy * dy).sqrt()
    }

    /// Great-circle distance in kilometres, treating the point as degrees.
    pub fn haversine_km(&self, other: &Self) -> f64 {
        let lat1 = self.x.0.to_radians();
        let lat2 = other.x.0.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.y.0 - self.y.0).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x.0, self.y.0)
    }
}

/// Parses `LAT,LON` (whitespace around either number is ignored).
impl FromStr for GeoPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCoordinate {
            input: s.to_string(),
        };

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

        let point = GeoPoint::new(lat, lon);
        if !point.is_valid() {
            return Err(invalid());
        }
        Ok(point)
    }
}
