//! Loader for line-oriented road map files.
//!
//! Each non-blank line describes one directed road segment:
//!
//! ```text
//! 32.8660718 -117.2187485 32.8662507 -117.2172356 "Gilman Drive" residential
//! ```
//!
//! Two-way roads appear once per direction. The road name is always quoted and
//! may be empty; the road type may be empty. Segment lengths are great-circle
//! distances in kilometres.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq)]
struct RoadSegment {
    from: GeoPoint,
    to: GeoPoint,
    road_name: String,
    road_type: String,
}

/// Read a road map file into a new graph.
pub fn load_road_map(path: &Path) -> Result<Graph> {
    debug!(path = %path.display(), "loading road map");
    let file = File::open(path).map_err(|source| Error::MapRead {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_road_map(BufReader::new(file))?;
    info!(
        path = %path.display(),
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "road map loaded"
    );
    Ok(graph)
}

/// Build a graph from road map lines.
pub fn parse_road_map<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let segment = parse_segment(&line).map_err(|message| Error::MapParse {
            line: index + 1,
            message,
        })?;
        graph.add_vertex(segment.from);
        graph.add_vertex(segment.to);
        let length = segment.from.haversine_km(&segment.to);
        graph.add_edge(
            segment.from,
            segment.to,
            segment.road_name,
            segment.road_type,
            length,
        )?;
    }
    Ok(graph)
}

fn parse_segment(line: &str) -> std::result::Result<RoadSegment, String> {
    let mut rest = line.trim_start();
    let mut coords = [0.0_f64; 4];
    for coord in &mut coords {
        let (token, tail) = rest
            .split_once(char::is_whitespace)
            .ok_or_else(|| "expected four coordinates followed by a quoted road name".to_string())?;
        *coord = parse_coordinate(token)?;
        rest = tail.trim_start();
    }

    let quoted = rest
        .strip_prefix('"')
        .ok_or_else(|| format!("road name must be quoted, found '{rest}'"))?;
    let close = quoted
        .rfind('"')
        .ok_or_else(|| "unterminated road name".to_string())?;

    Ok(RoadSegment {
        from: GeoPoint::new(coords[0], coords[1]),
        to: GeoPoint::new(coords[2], coords[3]),
        road_name: quoted[..close].to_string(),
        road_type: quoted[close + 1..].trim().to_string(),
    })
}

fn parse_coordinate(token: &str) -> std::result::Result<f64, String> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("'{token}' is not a valid coordinate")),
    }
}
