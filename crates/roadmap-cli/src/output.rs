//! Output formatting for routes and map statistics.
//!
//! Renderers write to any `io::Write` so they can be exercised against an
//! in-memory buffer; the binary passes a locked stdout.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use roadmap_lib::{GeoPoint, Graph, RoutePlan};

use crate::terminal::ColorPalette;

/// Output formats supported by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// A planned route plus, optionally, the order in which the search visited points.
#[derive(Debug, Serialize)]
pub struct RouteOutput<'a> {
    #[serde(flatten)]
    pub plan: &'a RoutePlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_order: Option<&'a [GeoPoint]>,
}

/// Vertex and edge totals of a loaded map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
}

impl GraphStats {
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.num_vertices(),
            edges: graph.num_edges(),
        }
    }
}

/// Render a route as text, tagging the first and last steps.
pub fn write_route_text<W: Write>(
    out: &mut W,
    output: &RouteOutput<'_>,
    palette: &ColorPalette,
) -> io::Result<()> {
    let plan = output.plan;
    writeln!(
        out,
        "Route from {} to {} ({} hops; algorithm: {}):",
        plan.start,
        plan.goal,
        plan.hop_count(),
        plan.algorithm
    )?;

    let last = plan.steps.len().saturating_sub(1);
    for (index, step) in plan.steps.iter().enumerate() {
        let tag = if index == 0 {
            format!("{}START{} ", palette.tag_start, palette.reset)
        } else if index == last {
            format!("{}GOAL{}  ", palette.tag_goal, palette.reset)
        } else {
            "      ".to_string()
        };
        writeln!(
            out,
            " {}{}{}{}",
            tag, palette.white_bold, step, palette.reset
        )?;
    }

    writeln!(out, "\nTotal length: {:.3}km", plan.total_length)?;
    writeln!(
        out,
        "{}Visited {} points{}",
        palette.gray, plan.visited, palette.reset
    )?;

    if let Some(visits) = output.visit_order {
        writeln!(out, "\nVisit order:")?;
        for (index, point) in visits.iter().enumerate() {
            writeln!(out, "{:>5}. {}", index + 1, point)?;
        }
    }
    Ok(())
}

pub fn write_stats_text<W: Write>(out: &mut W, stats: &GraphStats) -> io::Result<()> {
    writeln!(out, "Vertices: {}", stats.vertices)?;
    writeln!(out, "Edges: {}", stats.edges)
}

/// Serialize any value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
