use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cityroute_lib::{
    build_graph, filter_records, load_records, plan_route, FilterCriteria, Location, RouteRequest,
    RouteSummary, StreetGraph, TrafficRecord,
};

#[derive(Parser, Debug)]
#[command(version, about = "City traffic routing utilities")]
struct Cli {
    /// Path to the traffic sample CSV.
    #[arg(long)]
    data: PathBuf,

    /// Keep only records for this hour of day.
    #[arg(long)]
    hour: Option<String>,

    /// Keep only records for this day of week.
    #[arg(long)]
    day: Option<String>,

    /// Keep only records for this month.
    #[arg(long)]
    month: Option<String>,

    /// Keep only records reachable from these places.
    #[arg(long = "place")]
    places: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two streets, optionally via waypoints.
    Route {
        /// Starting street name.
        #[arg(long)]
        from: String,
        /// Destination street name.
        #[arg(long)]
        to: String,
        /// Streets the route must pass through.
        #[arg(long = "via")]
        via: Vec<String>,
        /// Emit the route summary as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List every street reachable from the given seed streets.
    Reachable {
        /// Seed street names.
        #[arg(long = "from", required = true)]
        seeds: Vec<String>,
    },
    /// List the streets present after filtering.
    Streets,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let records = load_filtered_records(&cli)?;
    let graph = build_graph(&records).context("failed to build the street graph")?;

    match cli.command {
        Command::Route {
            from,
            to,
            via,
            json,
        } => handle_route(&graph, from, to, via, json),
        Command::Reachable { seeds } => handle_reachable(&graph, seeds),
        Command::Streets => handle_streets(&graph),
    }
}

fn load_filtered_records(cli: &Cli) -> Result<Vec<TrafficRecord>> {
    let records = load_records(&cli.data)
        .with_context(|| format!("failed to load traffic data from {}", cli.data.display()))?;
    let criteria = FilterCriteria {
        hour: cli.hour.clone(),
        day: cli.day.clone(),
        month: cli.month.clone(),
    };
    let places: HashSet<String> = cli.places.iter().cloned().collect();
    filter_records(&records, &criteria, &places).context("failed to filter traffic records")
}

fn handle_route(
    graph: &StreetGraph,
    from: String,
    to: String,
    via: Vec<String>,
    json: bool,
) -> Result<()> {
    let request = RouteRequest {
        start: from,
        end: to,
        via,
    };
    let plan = plan_route(graph, &request)?;
    let summary = RouteSummary::from_plan(graph, &plan)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render());
    }
    Ok(())
}

fn handle_reachable(graph: &StreetGraph, seeds: Vec<String>) -> Result<()> {
    let seeds: HashSet<String> = seeds.into_iter().collect();
    let mut reachable: Vec<String> = graph.connected_components(&seeds)?.into_iter().collect();
    reachable.sort();
    for street in reachable {
        println!("{street}");
    }
    Ok(())
}

fn handle_streets(graph: &StreetGraph) -> Result<()> {
    let mut names: Vec<&str> = graph.locations().map(Location::name).collect();
    names.sort_unstable();
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
