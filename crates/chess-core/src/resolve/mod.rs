//! Move resolvers: find the origin square of a parsed move and apply it.
//!
//! Every resolver searches outward from the destination for the mover's
//! own piece. When nothing matches the board is left untouched and `None`
//! is returned; the caller decides whether that is an error.

mod castle;
mod leaper;
mod pawn;
mod slider;

pub use castle::castle;
pub use leaper::{king, knight};
pub use pawn::pawn;
pub use slider::{bishop, queen, rook};

use shakmaty::{Board, Color, Piece, Square};
use tracing::debug;

use crate::notation::ParsedMove;

/// Apply `mv` for `mover`. Returns the origin square (the king's home
/// square for castling), or `None` if no piece could make the move.
pub fn apply(board: &mut Board, mv: &ParsedMove, mover: Color) -> Option<Square> {
    match *mv {
        ParsedMove::Rook(m) => rook(board, m, mover),
        ParsedMove::Knight(m) => knight(board, m, mover),
        ParsedMove::Bishop(m) => bishop(board, m, mover),
        ParsedMove::Queen(m) => queen(board, m, mover),
        ParsedMove::King(m) => king(board, m, mover),
        ParsedMove::Castle(side) => castle(board, side, mover),
        ParsedMove::Pawn(m) => pawn(board, m, mover),
    }
}

/// Step by a file/rank delta; `None` once it falls off the board.
fn step(sq: Square, df: i32, dr: i32) -> Option<Square> {
    Some(Square::from_coords(sq.file().offset(df)?, sq.rank().offset(dr)?))
}

/// Squares from `sq` (exclusive) to the edge in one direction.
fn ray(sq: Square, df: i32, dr: i32) -> impl Iterator<Item = Square> {
    std::iter::successors(step(sq, df, dr), move |&next| step(next, df, dr))
}

/// Take the first candidate; more than one means the notation left the
/// move ambiguous (e.g. one of the pieces is pinned).
fn pick(
    mut candidates: impl Iterator<Item = Square>,
    piece: Piece,
    dest: Square,
) -> Option<Square> {
    let origin = candidates.next()?;
    let others: Vec<Square> = candidates.collect();
    if !others.is_empty() {
        debug!(
            piece = %piece.char(),
            %dest,
            %origin,
            ?others,
            "Several origins fit, using the first"
        );
    }
    Some(origin)
}

/// Lift the piece off `origin` and drop it on `dest`.
fn complete(board: &mut Board, origin: Square, dest: Square) -> Square {
    if let Some(piece) = board.remove_piece_at(origin) {
        board.set_piece_at(dest, piece);
    }
    origin
}
