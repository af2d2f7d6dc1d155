//! Rook, bishop and queen: ray searches from the destination.

use shakmaty::{Board, Color, Piece, Role, Square};

use super::{complete, pick, ray};
use crate::disambiguate::allows;
use crate::notation::PieceMove;

const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn rook(board: &mut Board, mv: PieceMove, mover: Color) -> Option<Square> {
    slide(board, mv, Role::Rook.of(mover), &ORTHOGONAL)
}

pub fn bishop(board: &mut Board, mv: PieceMove, mover: Color) -> Option<Square> {
    slide(board, mv, Role::Bishop.of(mover), &DIAGONAL)
}

pub fn queen(board: &mut Board, mv: PieceMove, mover: Color) -> Option<Square> {
    let mut directions = [(0, 0); 8];
    directions[..4].copy_from_slice(&ORTHOGONAL);
    directions[4..].copy_from_slice(&DIAGONAL);
    slide(board, mv, Role::Queen.of(mover), &directions)
}

fn slide(
    board: &mut Board,
    mv: PieceMove,
    piece: Piece,
    directions: &[(i32, i32)],
) -> Option<Square> {
    let origin = find_origin(board, mv, piece, directions)?;
    Some(complete(board, origin, mv.dest))
}

/// The first occupied cell of each ray is the only one that can have made
/// the move along it.
fn find_origin(
    board: &Board,
    mv: PieceMove,
    piece: Piece,
    directions: &[(i32, i32)],
) -> Option<Square> {
    let candidates = directions.iter().filter_map(|&(df, dr)| {
        let blocker = ray(mv.dest, df, dr).find(|&sq| board.piece_at(sq).is_some())?;
        (board.piece_at(blocker) == Some(piece) && allows(mv.hint, blocker)).then_some(blocker)
    });
    pick(candidates, piece, mv.dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disambiguate::Hint;
    use crate::fen::{encode_placement, parse_placement};
    use shakmaty::{File, Rank};

    fn to(dest: Square) -> PieceMove {
        PieceMove {
            hint: None,
            capture: false,
            dest,
        }
    }

    fn hinted(hint: Hint, dest: Square) -> PieceMove {
        PieceMove {
            hint: Some(hint),
            ..to(dest)
        }
    }

    #[test]
    fn test_rook_ray_stops_at_first_blocker() {
        // Ra1 is shielded by the knight on a3; only Rh4 sees a4 along rank 4.
        let mut board = parse_placement("4k3/8/8/8/7R/N7/8/R3K3").unwrap();
        assert_eq!(rook(&mut board, to(Square::A4), Color::White), Some(Square::H4));
        assert_eq!(encode_placement(&board), "4k3/8/8/8/R7/N7/8/R3K3");
    }

    #[test]
    fn test_rook_hint_by_file_and_rank() {
        let mut board = parse_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        let mv = hinted(Hint::File(File::H), Square::F1);
        assert_eq!(rook(&mut board, mv, Color::White), Some(Square::H1));

        let mut board = parse_placement("R3k3/8/8/8/8/8/8/R3K3").unwrap();
        let mv = hinted(Hint::Rank(Rank::First), Square::A5);
        assert_eq!(rook(&mut board, mv, Color::White), Some(Square::A1));
        assert_eq!(encode_placement(&board), "R3k3/8/8/R7/8/8/8/4K3");
    }

    #[test]
    fn test_bishop_capture_overwrites() {
        let mut board = parse_placement("4k3/8/8/8/3p4/8/8/B3K3").unwrap();
        let mv = PieceMove {
            capture: true,
            ..to(Square::D4)
        };
        assert_eq!(bishop(&mut board, mv, Color::White), Some(Square::A1));
        assert_eq!(encode_placement(&board), "4k3/8/8/8/3B4/8/8/4K3");
    }

    #[test]
    fn test_bishop_ignores_other_color() {
        let mut board = parse_placement("4k3/8/8/8/8/8/8/b3K3").unwrap();
        assert_eq!(bishop(&mut board, to(Square::C3), Color::White), None);
        assert_eq!(encode_placement(&board), "4k3/8/8/8/8/8/8/b3K3");
    }

    #[test]
    fn test_queen_uses_both_ray_sets() {
        let mut board = parse_placement("4k3/8/8/8/8/8/8/3QK3").unwrap();
        assert_eq!(queen(&mut board, to(Square::H5), Color::White), Some(Square::D1));
        let mut board = parse_placement("4k3/8/8/8/8/8/8/3QK3").unwrap();
        assert_eq!(queen(&mut board, to(Square::D7), Color::White), Some(Square::D1));
    }

    #[test]
    fn test_queen_with_rank_hint() {
        let mut board = parse_placement("4k3/8/8/7Q/8/8/8/4K2Q").unwrap();
        // only the h5 queen reaches e2, and the hint rules it out
        let mv = hinted(Hint::Rank(Rank::First), Square::E2);
        assert_eq!(queen(&mut board, mv, Color::White), None);
        assert_eq!(encode_placement(&board), "4k3/8/8/7Q/8/8/8/4K2Q");

        let mv = hinted(Hint::Rank(Rank::First), Square::H3);
        assert_eq!(queen(&mut board, mv, Color::White), Some(Square::H1));
        assert_eq!(encode_placement(&board), "4k3/8/8/7Q/8/7Q/8/4K3");
    }
}
