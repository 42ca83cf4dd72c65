use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use brickyard_app::{run, Cli};

fn main() -> Result<ExitCode> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    log::info!("starting '{}' (seed {})", config.title, config.seed);

    let report = run(config, cli.controls())?;
    if cli.dump_snapshot {
        if let Some(snapshot) = &report.snapshot {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        }
    }
    println!("{:?} after {} frames", report.termination, report.frames);

    Ok(ExitCode::from(report.termination.exit_code()))
}
