//! PGN replay CLI
//!
//! Replays every game in the given PGN files and prints the tag roster and
//! final position of each.
//!
//! Usage: pgn-replay [--strict] [--json] <file.pgn>...

use std::io::{self, Write};

use pgn_replay::config::ReplayConfig;
use pgn_replay::report::{render, replay_file};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so reports on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let config = ReplayConfig::load(std::env::args().skip(1))?;
    info!(
        files = config.paths.len(),
        strict = config.strict,
        format = ?config.format,
        "Replaying games"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in &config.paths {
        for report in replay_file(path, config.replay_options())? {
            writeln!(out, "{}", render(&report, config.format)?)?;
        }
    }

    Ok(())
}
