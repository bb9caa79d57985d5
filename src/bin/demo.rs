//! Fit-policy demonstration driver
//!
//! Runs one or all placement policies over a scenario and prints the
//! allocation table (or machine-readable JSON) per policy.

use clap::Parser;
use fitsim::{run_policy, AllocationReport, PolicyKind, Scenario};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fitsim-demo")]
#[command(about = "Static partition allocation demo (first/next/best/worst fit)")]
struct Args {
    /// Path to a scenario JSON file (defaults to the classroom example)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Policy to run: first-fit, next-fit, best-fit, worst-fit [default: all]
    #[arg(short, long)]
    policy: Option<String>,

    /// Emit machine-readable JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => {
            info!("Loading scenario from {:?}", path);
            Scenario::load(path)?
        }
        None => {
            info!("No scenario given, using the classroom example");
            Scenario::classroom_example()
        }
    };

    info!(
        "Scenario: {} blocks, {} requests",
        scenario.block_sizes.len(),
        scenario.request_sizes.len()
    );

    let policies: Vec<PolicyKind> = match &args.policy {
        Some(name) => vec![name.parse()?],
        None => PolicyKind::ALL.to_vec(),
    };

    for kind in policies {
        let outcome = run_policy(kind, &scenario.block_sizes, &scenario.request_sizes);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            let report = AllocationReport::new(kind.name(), outcome.placements);
            println!("{}", report);
        }
    }

    Ok(())
}
