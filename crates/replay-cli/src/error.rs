//! CLI error types

use std::path::PathBuf;

use chess_core::ReplayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(&'static str),

    #[error("{0}\nusage: pgn-replay [--strict] [--json] <file.pgn>...")]
    Usage(String),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Replay error in {} (game {game}): {source}", path.display())]
    Replay {
        path: PathBuf,
        game: usize,
        #[source]
        source: ReplayError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
