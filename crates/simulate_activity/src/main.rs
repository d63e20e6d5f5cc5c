// crates/simulate_activity/src/main.rs

use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use touch_file::ThreadSleep;

use simulate_activity::{ActivityConfig, ActivityLoop};

/// Keeps editor-activity trackers busy by briefly touching a random source
/// file under the current directory at a fixed interval.
#[derive(Parser, Debug)]
#[command(name = "simulate_activity", version, about)]
struct Cli {
    /// Print debug diagnostics (candidate counts, markers, restores).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = ActivityConfig::default();
    log::debug!("Configuration: {:?}", config);

    let (stop_tx, stop_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .context("Failed to install the Ctrl+C handler")?;

    println!("Simulating coding activity. Press Ctrl+C to stop.");

    let mut activity = ActivityLoop::new(".", config, rand::thread_rng(), ThreadSleep);
    activity.run(&stop_rx);

    println!("\nStopped by user.");
    Ok(())
}
