use std::process::ExitCode;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use subway_planner::domain::TransitNetwork;
use subway_planner::loader::{load_network, route_to_json};
use subway_planner::planner::{PlannerConfig, RoutePlanner};

/// Network file used when `SUBWAY_DATA` is not set.
const DEFAULT_DATA_PATH: &str = "subway-data.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let data_path =
        std::env::var("SUBWAY_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

    let network = match load_network(&data_path) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error loading subway data: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        path = %data_path,
        stations = network.stations().len(),
        lines = network.lines().len(),
        "Loaded subway data"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            print_network(&network);
            ExitCode::SUCCESS
        }
        [start, end] => {
            let planner = RoutePlanner::new(Arc::new(network), PlannerConfig::default());
            match planner.route(start, end) {
                Ok(path) => match route_to_json(&path) {
                    Ok(json) => {
                        println!("{json}");
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("Failed to render route: {e}");
                        ExitCode::FAILURE
                    }
                },
                Err(e) => {
                    println!("no route: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        _ => {
            eprintln!("usage: subway-planner [<START> <END>]");
            eprintln!();
            eprintln!("With no arguments, lists stations and lines.");
            eprintln!("Reads the network from $SUBWAY_DATA (default: {DEFAULT_DATA_PATH}).");
            ExitCode::from(2)
        }
    }
}

fn print_network(network: &TransitNetwork) {
    println!("Stations:");
    for station in network.stations() {
        let lines: Vec<&str> = network
            .lines_serving(station.id.as_str())
            .map(|line| line.name.as_str())
            .collect();
        println!("  {:<12} {} [{}]", station.id, station.name, lines.join(", "));
    }

    println!();
    println!("Lines:");
    for line in network.lines() {
        let stops: Vec<&str> = line.stations.iter().map(|id| id.as_str()).collect();
        println!("  {} ({}): {}", line.name, line.color, stops.join(" - "));
    }
}
