//! SAN move grammar: classify a token and extract its parts before the
//! board is touched.
//!
//! Accepted shapes, after check/annotation suffixes are dropped:
//!
//! ```text
//! <R|N|B|Q|K> <hint>? x? <file><rank>
//! (<file> x)? <file><rank> (=? <N|B|R|Q>)?
//! O-O | O-O-O
//! ```

use shakmaty::{File, Rank, Role, Square};

use crate::disambiguate::{disambiguate, Hint};
use crate::error::NotationError;

/// A non-pawn move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMove {
    pub hint: Option<Hint>,
    pub capture: bool,
    pub dest: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnMove {
    /// Origin file of a capture; `None` for a push.
    pub from_file: Option<File>,
    pub dest: Square,
    pub promotion: Option<Role>,
}

impl PawnMove {
    pub fn is_capture(&self) -> bool {
        self.from_file.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedMove {
    Rook(PieceMove),
    Knight(PieceMove),
    Bishop(PieceMove),
    Queen(PieceMove),
    King(PieceMove),
    Castle(CastleSide),
    Pawn(PawnMove),
}

impl ParsedMove {
    pub fn is_capture(&self) -> bool {
        match self {
            ParsedMove::Rook(m)
            | ParsedMove::Knight(m)
            | ParsedMove::Bishop(m)
            | ParsedMove::Queen(m)
            | ParsedMove::King(m) => m.capture,
            ParsedMove::Pawn(m) => m.is_capture(),
            ParsedMove::Castle(_) => false,
        }
    }
}

/// Drop check, mate and annotation suffixes ("+", "#", "!", "?").
pub fn strip_annotations(token: &str) -> &str {
    token.trim().trim_end_matches(['+', '#', '!', '?'])
}

/// Parse one move token.
pub fn parse_move(token: &str) -> Result<ParsedMove, NotationError> {
    let san = strip_annotations(token);
    let first = san.chars().next().ok_or(NotationError::Empty)?;

    match first {
        'O' | '0' => Ok(ParsedMove::Castle(castle_side(san))),
        'R' | 'N' | 'B' | 'Q' | 'K' => {
            let (hint, cleaned) = disambiguate(san);
            let mv = parse_piece_move(&cleaned, hint)?;
            Ok(match first {
                'R' => ParsedMove::Rook(mv),
                'N' => ParsedMove::Knight(mv),
                'B' => ParsedMove::Bishop(mv),
                'Q' => ParsedMove::Queen(mv),
                _ => ParsedMove::King(mv),
            })
        }
        _ => parse_pawn_move(san).map(ParsedMove::Pawn),
    }
}

/// Anything other than a plain king-side castle is queen-side.
fn castle_side(san: &str) -> CastleSide {
    if san == "O-O" || san == "0-0" {
        CastleSide::KingSide
    } else {
        CastleSide::QueenSide
    }
}

/// `cleaned` is `<letter> x? <file><rank>` once the hint is gone.
fn parse_piece_move(cleaned: &str, hint: Option<Hint>) -> Result<PieceMove, NotationError> {
    let mut chars = cleaned.chars();
    chars.next();
    let rest = chars.as_str();

    let (capture, rest) = match rest.strip_prefix('x') {
        Some(after) => (true, after),
        None => (false, rest),
    };

    let (dest, tail) =
        split_square(rest).ok_or_else(|| NotationError::InvalidSquare(cleaned.to_string()))?;
    if !tail.is_empty() {
        return Err(NotationError::Trailing(cleaned.to_string()));
    }

    Ok(PieceMove {
        hint,
        capture,
        dest,
    })
}

fn parse_pawn_move(san: &str) -> Result<PawnMove, NotationError> {
    let invalid = || NotationError::InvalidSquare(san.to_string());

    let (from_file, rest) = match san.split_once('x') {
        Some((origin, rest)) => {
            let mut chars = origin.chars();
            let file = match (chars.next(), chars.next()) {
                (Some(c), None) => File::from_char(c),
                _ => None,
            };
            (Some(file.ok_or_else(invalid)?), rest)
        }
        None => (None, san),
    };

    let (dest, tail) = split_square(rest).ok_or_else(invalid)?;

    let promo = tail.strip_prefix('=').unwrap_or(tail);
    let promotion = if promo.is_empty() {
        None
    } else {
        let mut chars = promo.chars();
        let role = match (chars.next(), chars.next()) {
            (Some(c), None) => promotion_role(c),
            _ => None,
        };
        Some(role.ok_or_else(|| NotationError::InvalidPromotion(san.to_string()))?)
    };

    Ok(PawnMove {
        from_file,
        dest,
        promotion,
    })
}

/// Pieces a pawn may promote to, by SAN letter (either case).
fn promotion_role(c: char) -> Option<Role> {
    match c.to_ascii_uppercase() {
        'N' => Some(Role::Knight),
        'B' => Some(Role::Bishop),
        'R' => Some(Role::Rook),
        'Q' => Some(Role::Queen),
        _ => None,
    }
}

/// Read a leading `<file><rank>` and return it with the remaining text.
fn split_square(s: &str) -> Option<(Square, &str)> {
    let mut chars = s.chars();
    let file = File::from_char(chars.next()?)?;
    let rank = Rank::from_char(chars.next()?)?;
    Some((Square::from_coords(file, rank), chars.as_str()))
}
