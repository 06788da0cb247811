use std::path::PathBuf;

use thiserror::Error;

use crate::geo::GeoPoint;

/// Convenient result alias for the roadmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge endpoint does not carry finite coordinates.
    #[error("one or more edge endpoints is not a valid point (from={from}, to={to})")]
    InvalidEndpoint { from: GeoPoint, to: GeoPoint },

    /// Raised when an edge is given a negative (or NaN) length.
    #[error("road length must be greater than or equal to 0, got {length}")]
    NegativeLength { length: f64 },

    /// Raised when the start point of an edge or route is not a vertex of the graph.
    #[error("start point {point} does not exist in the map")]
    UnknownStart { point: GeoPoint },

    /// Raised when the end point of an edge or route is not a vertex of the graph.
    #[error("end point {point} does not exist in the map")]
    UnknownEnd { point: GeoPoint },

    /// Raised when no route could be found between two points.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: GeoPoint, goal: GeoPoint },

    /// Raised when an algorithm name cannot be parsed.
    #[error("unknown route algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// Raised when a coordinate pair cannot be parsed.
    #[error("invalid coordinate '{input}': expected LAT,LON")]
    InvalidCoordinate { input: String },

    /// Raised when a line of a map file is malformed.
    #[error("malformed map data on line {line}: {message}")]
    MapParse { line: usize, message: String },

    /// Raised when a map file could not be opened.
    #[error("failed to read map file {path}: {source}")]
    MapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
