//! Reading PGN files and rendering one report per game.

use std::fs;
use std::path::Path;

use chess_core::pgn::split_games;
use chess_core::{report_game, GameReport, ReplayOptions};
use tracing::info;

use crate::config::OutputFormat;
use crate::error::CliError;

/// Replay every game in a PGN file.
pub fn replay_file(path: &Path, options: ReplayOptions) -> Result<Vec<GameReport>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let reports = replay_text(&text, options).map_err(|(game, source)| CliError::Replay {
        path: path.to_path_buf(),
        game,
        source,
    })?;

    info!(path = %path.display(), games = reports.len(), "Replayed file");
    Ok(reports)
}

/// Replay every game in PGN text. On failure returns the 1-based game
/// number with the error.
pub fn replay_text(
    text: &str,
    options: ReplayOptions,
) -> Result<Vec<GameReport>, (usize, chess_core::ReplayError)> {
    split_games(text)
        .into_iter()
        .enumerate()
        .map(|(i, game)| report_game(game, options).map_err(|e| (i + 1, e)))
        .collect()
}

pub fn render(report: &GameReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

/// Tag roster followed by the final placement.
pub fn render_text(report: &GameReport) -> String {
    let meta = &report.metadata;
    format!(
        "Event: {}\nSite: {}\nDate: {}\nRound: {}\nWhite: {}\nBlack: {}\nResult: {}\nFinal Position:\n{}",
        meta.event,
        meta.site,
        meta.date,
        meta.round,
        meta.white,
        meta.black,
        meta.result,
        report.final_position,
    )
}
