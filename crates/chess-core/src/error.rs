//! Replay error types

use shakmaty::Color;
use thiserror::Error;

/// Why a move token could not be read as SAN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Empty move token")]
    Empty,

    #[error("Invalid destination square in '{0}'")]
    InvalidSquare(String),

    #[error("Invalid promotion piece in '{0}'")]
    InvalidPromotion(String),

    #[error("Unexpected trailing text in '{0}'")]
    Trailing(String),
}

/// Replay failures. Only `InvalidPlacement` is raised by default; the other
/// kinds are reported when strict mode is enabled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Malformed move '{token}' at ply {ply}: {source}")]
    Malformed {
        ply: usize,
        token: String,
        #[source]
        source: NotationError,
    },

    #[error("No {mover:?} piece can play '{token}' at ply {ply}")]
    Unresolved {
        ply: usize,
        token: String,
        mover: Color,
    },

    #[error("Invalid FEN placement: {0}")]
    InvalidPlacement(String),
}
