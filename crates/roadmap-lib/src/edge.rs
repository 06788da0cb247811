use std::fmt;

use ordered_float::OrderedFloat;

use crate::geo::GeoPoint;

/// Directed road segment between two points.
///
/// Equality and hashing cover all five fields, so two segments that differ
/// only by name are distinct edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    road_name: String,
    road_type: String,
    length: OrderedFloat<f64>,
    start: GeoPoint,
    end: GeoPoint,
}

impl Edge {
    pub(crate) fn new(
        road_name: String,
        road_type: String,
        length: f64,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Self {
        Self {
            road_name,
            road_type,
            length: OrderedFloat(length),
            start,
            end,
        }
    }

    pub fn road_name(&self) -> &str {
        &self.road_name
    }

    /// Road classification such as `residential` or `motorway`.
    pub fn road_type(&self) -> &str {
        &self.road_type
    }

    /// Edge weight.
    pub fn length(&self) -> f64 {
        self.length.0
    }

    pub fn start(&self) -> GeoPoint {
        self.start
    }

    pub fn end(&self) -> GeoPoint {
        self.end
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({}) {} -> {} [{}]",
            self.road_name, self.road_type, self.start, self.end, self.length.0
        )
    }
}
