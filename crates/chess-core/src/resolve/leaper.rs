//! Knight and king: fixed offsets from the destination.

use shakmaty::{Board, Color, Piece, Role, Square};

use super::{complete, pick, step};
use crate::disambiguate::{allows, Hint};
use crate::notation::PieceMove;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (0, -1),
    (-1, 0),
    (1, -1),
    (-1, 1),
];

pub fn knight(board: &mut Board, mv: PieceMove, mover: Color) -> Option<Square> {
    let piece = Role::Knight.of(mover);
    let origin = find_origin(board, mv.dest, mv.hint, piece, &KNIGHT_OFFSETS)?;
    Some(complete(board, origin, mv.dest))
}

/// One king per side, so any hint is ignored.
pub fn king(board: &mut Board, mv: PieceMove, mover: Color) -> Option<Square> {
    let piece = Role::King.of(mover);
    let origin = find_origin(board, mv.dest, None, piece, &KING_OFFSETS)?;
    Some(complete(board, origin, mv.dest))
}

fn find_origin(
    board: &Board,
    dest: Square,
    hint: Option<Hint>,
    piece: Piece,
    offsets: &[(i32, i32)],
) -> Option<Square> {
    let candidates = offsets
        .iter()
        .filter_map(|&(df, dr)| step(dest, df, dr))
        .filter(|&sq| board.piece_at(sq) == Some(piece) && allows(hint, sq));
    pick(candidates, piece, dest)
}
