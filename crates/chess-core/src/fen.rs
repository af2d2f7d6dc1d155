//! FEN placement field: encoding the replayed board, and reading the start
//! position of a `[FEN]` tag.

use shakmaty::fen::Fen;
use shakmaty::{Board, Color};

use crate::error::ReplayError;

pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Placement field of the board, rank 8 first.
pub fn encode_placement(board: &Board) -> String {
    board.board_fen().to_string()
}

/// Parse the placement field (first FEN field). Trailing FEN fields are
/// ignored.
pub fn parse_placement(fen: &str) -> Result<Board, ReplayError> {
    let placement = fen.split_whitespace().next().unwrap_or_default();
    Board::from_ascii_board_fen(placement.as_bytes())
        .map_err(|_| ReplayError::InvalidPlacement(fen.to_string()))
}

/// Board and side to move of a full or partial FEN.
pub fn parse_start(fen: &str) -> Result<(Board, Color), ReplayError> {
    let setup = Fen::from_ascii(fen.trim().as_bytes())
        .map_err(|_| ReplayError::InvalidPlacement(fen.to_string()))?
        .into_setup();
    Ok((setup.board, setup.turn))
}
