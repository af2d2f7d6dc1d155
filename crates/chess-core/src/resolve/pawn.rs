//! Pawn pushes and captures, with en passant and promotion.

use shakmaty::{Board, Color, Rank, Role, Square};

use super::{complete, ray, step};
use crate::notation::PawnMove;

/// Pushes search straight back to the edge for the mover's pawn, which
/// covers single and double steps alike. Captures name the origin file and
/// come from one rank behind the destination.
pub fn pawn(board: &mut Board, mv: PawnMove, mover: Color) -> Option<Square> {
    let own = Role::Pawn.of(mover);
    let back = backward(mover);

    let origin = match mv.from_file {
        Some(file) => step(Square::from_coords(file, mv.dest.rank()), 0, back)
            .filter(|&sq| board.piece_at(sq) == Some(own))?,
        None => ray(mv.dest, 0, back).find(|&sq| board.piece_at(sq) == Some(own))?,
    };

    let passed = en_passant_victim(board, mv, mover);
    complete(board, origin, mv.dest);
    if let Some(victim) = passed {
        board.remove_piece_at(victim);
    }

    if let Some(role) = mv.promotion {
        board.set_piece_at(mv.dest, role.of(mover));
    }

    Some(origin)
}

/// Rank delta pointing back toward the mover's own side.
fn backward(mover: Color) -> i32 {
    match mover {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// A capture onto an empty square of the en-passant rank takes the enemy
/// pawn standing just behind it.
fn en_passant_victim(board: &Board, mv: PawnMove, mover: Color) -> Option<Square> {
    let ep_rank = match mover {
        Color::White => Rank::Sixth,
        Color::Black => Rank::Third,
    };
    if !mv.is_capture() || mv.dest.rank() != ep_rank || board.piece_at(mv.dest).is_some() {
        return None;
    }

    let victim = step(mv.dest, 0, backward(mover))?;
    (board.piece_at(victim) == Some(Role::Pawn.of(!mover))).then_some(victim)
}
