//! Castling: fixed king and rook relocation on the back rank.

use shakmaty::{Board, Color, File, Rank, Role, Square};

use crate::notation::CastleSide;

/// Move the king off e1/e8 and the rook off its corner. Both must stand on
/// those squares, otherwise nothing happens. Earlier moves of either piece
/// and attacked squares are not checked.
pub fn castle(board: &mut Board, side: CastleSide, mover: Color) -> Option<Square> {
    let rank = match mover {
        Color::White => Rank::First,
        Color::Black => Rank::Eighth,
    };
    let at = |file: File| Square::from_coords(file, rank);

    let (king_to, rook_from, rook_to) = match side {
        CastleSide::KingSide => (File::G, File::H, File::F),
        CastleSide::QueenSide => (File::C, File::A, File::D),
    };

    let king = Role::King.of(mover);
    let rook = Role::Rook.of(mover);
    let king_from = at(File::E);
    if board.piece_at(king_from) != Some(king) || board.piece_at(at(rook_from)) != Some(rook) {
        return None;
    }

    board.remove_piece_at(king_from);
    board.remove_piece_at(at(rook_from));
    board.set_piece_at(at(king_to), king);
    board.set_piece_at(at(rook_to), rook);

    Some(king_from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::{encode_placement, parse_placement};

    const CORNERS: &str = "r3k2r/8/8/8/8/8/8/R3K2R";

    #[test]
    fn test_white_king_side() {
        let mut board = parse_placement(CORNERS).unwrap();
        let origin = castle(&mut board, CastleSide::KingSide, Color::White);
        assert_eq!(origin, Some(Square::E1));
        assert_eq!(encode_placement(&board), "r3k2r/8/8/8/8/8/8/R4RK1");
    }

    #[test]
    fn test_white_queen_side() {
        let mut board = parse_placement(CORNERS).unwrap();
        castle(&mut board, CastleSide::QueenSide, Color::White);
        assert_eq!(encode_placement(&board), "r3k2r/8/8/8/8/8/8/2KR3R");
    }

    #[test]
    fn test_black_both_sides() {
        let mut board = parse_placement(CORNERS).unwrap();
        castle(&mut board, CastleSide::KingSide, Color::Black);
        assert_eq!(encode_placement(&board), "r4rk1/8/8/8/8/8/8/R3K2R");

        let mut board = parse_placement(CORNERS).unwrap();
        let origin = castle(&mut board, CastleSide::QueenSide, Color::Black);
        assert_eq!(origin, Some(Square::E8));
        assert_eq!(encode_placement(&board), "2kr3r/8/8/8/8/8/8/R3K2R");
    }

    #[test]
    fn test_missing_king_or_rook_is_noop() {
        // lone black king: castling must not conjure white pieces
        let mut board = parse_placement("4k3/8/8/8/8/8/8/8").unwrap();
        assert_eq!(castle(&mut board, CastleSide::KingSide, Color::White), None);
        assert_eq!(encode_placement(&board), "4k3/8/8/8/8/8/8/8");
        assert_eq!(board.occupied().count(), 1);

        // king at home but the h-rook is gone
        let mut board = parse_placement("4k3/8/8/8/8/8/8/R3K3").unwrap();
        assert_eq!(castle(&mut board, CastleSide::KingSide, Color::White), None);
        assert_eq!(encode_placement(&board), "4k3/8/8/8/8/8/8/R3K3");

        // king has left e1
        let mut board = parse_placement("4k3/8/8/8/8/8/8/R4K1R").unwrap();
        assert_eq!(castle(&mut board, CastleSide::QueenSide, Color::White), None);
        assert_eq!(encode_placement(&board), "4k3/8/8/8/8/8/8/R4K1R");
    }
}
