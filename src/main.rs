//! chokemap - Entry Point
//!
//! Loads a polled snapshot, runs one refresh cycle plus firebase resolution,
//! and prints what changed.

use std::path::PathBuf;

use chokemap::chokepoint::NodeSet;
use chokemap::core::error::Result;
use chokemap::core::types::Timestamp;
use chokemap::core::EngineConfig;
use chokemap::firebase::FirebaseResolution;
use chokemap::state::{RefreshReport, Snapshot};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Rebuild the chokepoint graph of a game-world snapshot
#[derive(Parser, Debug)]
#[command(name = "chokemap")]
#[command(about = "Rebuild the chokepoint graph of a game-world snapshot")]
struct Args {
    /// Snapshot JSON file
    #[arg(long, short = 's')]
    snapshot: PathBuf,

    /// Engine config TOML file (defaults are used when omitted)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Current server time in seconds, for the capture window
    #[arg(long, default_value_t = 0)]
    now: Timestamp,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Serialize)]
struct NodeSummary {
    id: u32,
    name: String,
    boundary: bool,
    altitude: Option<i32>,
    activity: chokemap::activity::ActivityLevel,
    nearby: Vec<u32>,
}

#[derive(Serialize)]
struct Output {
    refresh: RefreshReport,
    firebases: FirebaseResolution,
    nodes: Vec<NodeSummary>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chokemap=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let snapshot = Snapshot::load(&args.snapshot)?;
    let (mut state, outline, terrain) = snapshot.into_state(&config)?;

    let refresh = state.refresh(&outline, &terrain, &config, args.now)?;
    let firebases = state.resolve_firebases(&outline);

    let nodes: Vec<NodeSummary> = state
        .nodes
        .iter(NodeSet::All)
        .map(|node| NodeSummary {
            id: node.id.0,
            name: node.name.clone(),
            boundary: node.is_boundary(),
            altitude: node.altitude,
            activity: node.activity,
            nearby: node.nearby.iter().map(|id| id.0).collect(),
        })
        .collect();

    let output = Output {
        refresh,
        firebases,
        nodes,
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&output);
    }

    Ok(())
}

fn print_text(output: &Output) {
    let refresh = &output.refresh;
    println!("=== CHOKEMAP (generation {}) ===", refresh.generation);
    println!(
        "real pass: {} nodes, {} edges, {} one-way dropped",
        refresh.real_pass.targets, refresh.real_pass.edges, refresh.real_pass.dropped_one_way
    );
    println!(
        "boundary pass: {} nodes, {} edges, {} back-links",
        refresh.boundary_pass.targets,
        refresh.boundary_pass.edges,
        refresh.boundary_pass.back_links_added
    );
    println!("altitudes applied: {}", refresh.altitudes_applied);
    println!();

    for node in &output.nodes {
        let kind = if node.boundary { "boundary" } else { "real" };
        println!(
            "{:>4} {:<24} {:<8} {:<9} alt {:>6} -> {:?}",
            node.id,
            node.name,
            kind,
            format!("{:?}", node.activity),
            node.altitude.map_or_else(|| "-".to_string(), |a| a.to_string()),
            node.nearby
        );
    }

    println!();
    println!("firebases opened: {:?}", output.firebases.opened);
    for violation in &output.firebases.violations {
        println!("  violation: {:?}", violation);
    }
}
