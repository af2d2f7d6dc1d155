//! Origin hints a player adds when two pieces of the same kind can reach
//! the destination ("Nbd2", "R1e4", "Qhxe5").

use shakmaty::{File, Rank, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    File(File),
    Rank(Rank),
}

impl Hint {
    pub fn from_char(c: char) -> Option<Self> {
        File::from_char(c)
            .map(Hint::File)
            .or_else(|| Rank::from_char(c).map(Hint::Rank))
    }

    pub fn matches(self, sq: Square) -> bool {
        match self {
            Hint::File(file) => sq.file() == file,
            Hint::Rank(rank) => sq.rank() == rank,
        }
    }
}

/// `true` when `sq` is consistent with an optional hint.
pub fn allows(hint: Option<Hint>, sq: Square) -> bool {
    hint.map_or(true, |h| h.matches(sq))
}

/// Split a piece move into its hint and the token with the hint removed.
///
/// With a capture the hint is the character before `x` when exactly two
/// characters precede it. Without one, a token of four or more characters
/// that starts with an uppercase letter and has a file letter in third
/// place carries the hint in second place. Pawn and castling tokens must not
/// be passed here.
pub fn disambiguate(token: &str) -> (Option<Hint>, String) {
    let chars: Vec<char> = token.chars().collect();

    let has_hint = match chars.iter().position(|&c| c == 'x') {
        Some(capture) => capture == 2,
        None => {
            chars.len() >= 4 && chars[0].is_ascii_uppercase() && chars[2].is_ascii_alphabetic()
        }
    };

    if has_hint {
        if let Some(hint) = Hint::from_char(chars[1]) {
            let stripped = chars
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != 1)
                .map(|(_, c)| c)
                .collect();
            return (Some(hint), stripped);
        }
    }

    (None, token.to_string())
}
