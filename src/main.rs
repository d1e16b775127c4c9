use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use hoverpop::config::{load_config, load_config_from_path};
use hoverpop::replay::{load_scenario, run_scenario};

/// Replay pointer scenarios against popover tooltips
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Config file to use instead of ~/.config/hoverpop/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    let scenario = load_scenario(&args.scenario)?;
    let report = run_scenario(&scenario, config_result.config.tooltip)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
