//! Replay driver: plays SAN tokens onto one board, alternating sides.

use shakmaty::{Board, Color, Square};
use tracing::{debug, warn};

use crate::error::ReplayError;
use crate::fen::{encode_placement, parse_start};
use crate::game_data::GameReport;
use crate::notation::parse_move;
use crate::pgn::{parse_metadata, setup_fen, tokenize_moves};
use crate::resolve;

/// Replay behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Fail on malformed or unresolvable moves instead of skipping them.
    pub strict: bool,
}

/// Board plus ply counter for one game.
#[derive(Debug, Clone)]
pub struct Replay {
    board: Board,
    first_mover: Color,
    ply: usize,
    options: ReplayOptions,
}

impl Replay {
    /// Standard initial position, white to move.
    pub fn new(options: ReplayOptions) -> Self {
        Self::from_position(Board::new(), Color::White, options)
    }

    pub fn from_position(board: Board, mover: Color, options: ReplayOptions) -> Self {
        Self {
            board,
            first_mover: mover,
            ply: 0,
            options,
        }
    }

    /// Start position declared by the game's `[SetUp]`/`[FEN]` tags, or the
    /// standard one.
    pub fn for_game(game: &str, options: ReplayOptions) -> Result<Self, ReplayError> {
        match setup_fen(game) {
            Some(fen) => {
                let (board, mover) = parse_start(&fen)?;
                debug!(%fen, "Replaying from custom start position");
                Ok(Self::from_position(board, mover, options))
            }
            None => Ok(Self::new(options)),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Plies consumed so far, applied or not.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Side to play the next token.
    pub fn mover(&self) -> Color {
        if self.ply % 2 == 0 {
            self.first_mover
        } else {
            !self.first_mover
        }
    }

    pub fn placement(&self) -> String {
        encode_placement(&self.board)
    }

    /// Play one token. Returns the origin square, or `None` when the token
    /// was skipped. The ply advances either way.
    pub fn play(&mut self, token: &str) -> Result<Option<Square>, ReplayError> {
        let ply = self.ply;
        let mover = self.mover();
        self.ply += 1;

        let mv = match parse_move(token) {
            Ok(mv) => mv,
            Err(source) if self.options.strict => {
                return Err(ReplayError::Malformed {
                    ply,
                    token: token.to_string(),
                    source,
                });
            }
            Err(source) => {
                warn!(ply, ?mover, token, error = %source, "Skipping malformed move");
                return Ok(None);
            }
        };

        match resolve::apply(&mut self.board, &mv, mover) {
            Some(origin) => {
                debug!(ply, ?mover, token, %origin, "Applied move");
                Ok(Some(origin))
            }
            None if self.options.strict => Err(ReplayError::Unresolved {
                ply,
                token: token.to_string(),
                mover,
            }),
            None => {
                warn!(ply, ?mover, token, "No piece can make this move, skipping");
                Ok(None)
            }
        }
    }

    /// Play tokens in order; stops at the first error (strict mode only).
    pub fn play_all<I, S>(&mut self, tokens: I) -> Result<(), ReplayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.play(token.as_ref())?;
        }
        Ok(())
    }
}

/// Replay tokens from the standard initial position.
pub fn replay_moves<S: AsRef<str>>(
    tokens: &[S],
    options: ReplayOptions,
) -> Result<Board, ReplayError> {
    let mut replay = Replay::new(options);
    replay.play_all(tokens)?;
    Ok(replay.into_board())
}

/// Replay a full PGN game record.
pub fn replay_game(game: &str, options: ReplayOptions) -> Result<Board, ReplayError> {
    let mut replay = Replay::for_game(game, options)?;
    replay.play_all(tokenize_moves(game))?;
    Ok(replay.into_board())
}

/// Replay a game and build its report (tags, moves, final placement).
pub fn report_game(game: &str, options: ReplayOptions) -> Result<GameReport, ReplayError> {
    let moves = tokenize_moves(game);
    let mut replay = Replay::for_game(game, options)?;
    replay.play_all(&moves)?;

    Ok(GameReport {
        metadata: parse_metadata(game),
        moves,
        final_position: replay.placement(),
    })
}

/// Final placement of a game, never failing: unusable moves are skipped and
/// an unreadable `[FEN]` start falls back to the standard position.
pub fn final_position(game: &str) -> String {
    let options = ReplayOptions::default();
    let mut replay = Replay::for_game(game, options).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring start position");
        Replay::new(options)
    });
    // lenient replay never returns an error
    let _ = replay.play_all(tokenize_moves(game));
    replay.placement()
}
