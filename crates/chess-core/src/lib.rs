//! SAN replay engine: reads the movetext of a PGN game, plays it out on a
//! `shakmaty` board and reports the final FEN placement.

pub mod disambiguate;
pub mod error;
pub mod fen;
pub mod game_data;
pub mod notation;
pub mod pgn;
pub mod replay;
pub mod resolve;

pub use error::{NotationError, ReplayError};
pub use game_data::{GameMetadata, GameReport};
pub use replay::{final_position, replay_game, replay_moves, report_game, Replay, ReplayOptions};
pub use shakmaty::{Board, Color, Piece, Role, Square};
