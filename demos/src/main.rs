//! gridstar: times A* searches over randomly obstructed grids.
//!
//! Usage:
//!   gridstar --resx 80 --resy 60 --obs 400 --exp 3 --seed 1
//!   RUST_LOG=debug gridstar --console false --interactive

mod config;
mod experiment;
mod prompt;
mod render;
mod report;

use std::fs::{self, File};
use std::io;

use clap::Parser;
use gridstar_paths::AStar;
use rand::SeedableRng;
use rand::rngs::StdRng;

use config::{Args, ExperimentConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = ExperimentConfig::from(Args::parse());
    log::info!("cells: ⬜ unvisited, 🟧 open, 🟫 closed, 🟥 obstacle, 🟩 path");

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut astar = AStar::new(cfg.search);
    let mut current = cfg.first.clone();
    let mut rows = Vec::with_capacity(cfg.experiments);
    let mut found = 0usize;
    let stdin = io::stdin();

    for i in 0..cfg.experiments {
        log::info!("experiment {} of {}", i + 1, cfg.experiments);
        match experiment::run(i, &current, &cfg, &mut astar, &mut rng) {
            Ok(report) => {
                if report.result.path().is_some() {
                    found += 1;
                }
                rows.push(report.row);
            }
            Err(e) => log::error!("experiment {}: {e}", i + 1),
        }

        if cfg.interactive && i + 1 < cfg.experiments {
            current = prompt::next_experiment(&current, &mut stdin.lock(), &mut io::stdout())?;
        }
    }

    fs::create_dir_all(&cfg.output)?;
    let csv_path = cfg.output.join(&cfg.csv_file);
    report::write_table(&rows, cfg.delimiter, File::create(&csv_path)?)?;
    log::info!("{found} of {} experiments found a path", cfg.experiments);
    log::info!("wrote {} rows to {}", rows.len(), csv_path.display());
    Ok(())
}
