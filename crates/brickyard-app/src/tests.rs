//! Tests for argument handling and the headless runner.

use std::io::Write;

use clap::Parser;

use brickyard_demo::Controls;
use brickyard_engine::{GameConfig, Termination};

use crate::{run, Cli};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("brickyard").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_defaults_use_autopilot() {
    let cli = parse(&[]);
    assert_eq!(cli.controls(), Controls::Autopilot);
    assert!(!cli.dump_snapshot);
    assert_eq!(cli.game_config().unwrap(), GameConfig::default());
}

#[test]
fn test_flags_override_config() {
    let cli = parse(&["--frames", "90", "--seed", "5", "--manual", "--dump-snapshot"]);
    let config = cli.game_config().unwrap();
    assert_eq!(config.max_frames, Some(90));
    assert_eq!(config.seed, 5);
    assert_eq!(cli.controls(), Controls::Keyboard);
    assert!(cli.dump_snapshot);
}

#[test]
fn test_config_file_is_loaded_then_overridden() {
    let path = std::env::temp_dir().join(format!("brickyard-cli-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "title = \"from file\"\nseed = 3\nmax_frames = 10").unwrap();
    drop(file);

    let cli = parse(&["--config", path.to_str().unwrap(), "--seed", "8"]);
    let config = cli.game_config().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.title, "from file");
    assert_eq!(config.max_frames, Some(10));
    assert_eq!(config.seed, 8);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let cli = parse(&["--config", "/nonexistent/brickyard.toml"]);
    assert!(cli.game_config().is_err());
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["brickyard", "--fullscreen"]).is_err());
}

#[test]
fn test_run_reports_frame_limit() {
    let config = GameConfig {
        max_frames: Some(20),
        ..Default::default()
    };
    let report = run(config, Controls::Autopilot).unwrap();

    assert_eq!(report.termination, Termination::Closed);
    assert_eq!(report.frames, 20);
    let snapshot = report.snapshot.unwrap();
    assert_eq!(snapshot.frame, 20);
    assert_eq!(snapshot.entities.len(), 8);
}

#[test]
fn test_manual_run_without_input_is_lost() {
    let config = GameConfig {
        max_frames: Some(1000),
        ..Default::default()
    };
    let report = run(config, Controls::Keyboard).unwrap();
    assert_eq!(report.termination, Termination::Lost);
    assert_eq!(report.termination.exit_code(), 1);
}
