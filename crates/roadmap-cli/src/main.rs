use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadmap_cli::output::{
    write_json, write_route_text, write_stats_text, GraphStats, OutputFormat, RouteOutput,
};
use roadmap_cli::terminal::ColorPalette;
use roadmap_lib::{
    load_road_map, plan_route_with_visitor, GeoPoint, Graph, RouteAlgorithm, RouteRequest,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Road map pathfinding utilities")]
struct Cli {
    /// Road map file to load.
    #[arg(long, env = "ROADMAP_MAP", global = true)]
    map: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the number of intersections and road segments in the map.
    Stats,
    /// Compute a route between two intersections.
    Route {
        /// Starting intersection as LAT,LON.
        #[arg(long = "from", allow_hyphen_values = true)]
        from: GeoPoint,
        /// Destination intersection as LAT,LON.
        #[arg(long = "to", allow_hyphen_values = true)]
        to: GeoPoint,
        /// Search algorithm: bfs, dijkstra or a-star.
        #[arg(long, default_value_t = RouteAlgorithm::AStar)]
        algorithm: RouteAlgorithm,
        /// Also print every intersection in the order the search visited it.
        #[arg(long)]
        show_visits: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let map = cli
        .map
        .as_deref()
        .context("no map file given; pass --map or set ROADMAP_MAP")?;
    let graph = load_graph(map)?;

    match cli.command {
        Command::Stats => handle_stats(&graph, cli.format),
        Command::Route {
            from,
            to,
            algorithm,
            show_visits,
        } => handle_route(
            &graph,
            RouteRequest::new(from, to, algorithm),
            show_visits,
            cli.format,
        ),
    }
}

fn load_graph(path: &Path) -> Result<Graph> {
    load_road_map(path).with_context(|| format!("failed to load road map from {}", path.display()))
}

fn handle_stats(graph: &Graph, format: OutputFormat) -> Result<()> {
    let stats = GraphStats::of(graph);
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => write_stats_text(&mut stdout, &stats)?,
        OutputFormat::Json => write_json(&mut stdout, &stats)?,
    }
    stdout.flush()?;
    Ok(())
}

fn handle_route(
    graph: &Graph,
    request: RouteRequest,
    show_visits: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut visits = Vec::new();
    let plan = plan_route_with_visitor(graph, &request, |point| {
        if show_visits {
            visits.push(point);
        }
    })?;
    tracing::debug!(hops = plan.hop_count(), "rendering route");

    let output = RouteOutput {
        plan: &plan,
        visit_order: show_visits.then_some(visits.as_slice()),
    };
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => write_route_text(&mut stdout, &output, &ColorPalette::detect())?,
        OutputFormat::Json => write_json(&mut stdout, &output)?,
    }
    stdout.flush()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
