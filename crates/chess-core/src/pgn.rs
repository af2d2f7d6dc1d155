//! PGN parsing: tag reader, game splitter and movetext tokenizer.

use std::sync::LazyLock;

use regex::Regex;

use crate::game_data::GameMetadata;

/// Value reported for a tag the game does not carry.
pub const NOT_GIVEN: &str = "NOT GIVEN";

const RESULTS: [&str; 5] = ["1-0", "0-1", "1/2-1/2", "½-½", "*"];

static TAG_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[\s*\w+\s+"[^"]*"\s*\]"#).expect("tag pair pattern"));
static MOVETEXT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)1\.").expect("movetext start pattern"));
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}|;[^\n]*").expect("comment pattern"));
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d+|e\.p\.").expect("annotation pattern"));
static MOVE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\.+").expect("move number pattern"));

/// Find the `tag_name` tag pair and return its value, or [`NOT_GIVEN`].
pub fn tag_value(tag_name: &str, game: &str) -> String {
    find_tag(tag_name, game).unwrap_or_else(|| NOT_GIVEN.to_string())
}

fn find_tag(tag_name: &str, game: &str) -> Option<String> {
    let pattern = format!(r#"\[\s*{}\s+"([^"]*)""#, regex::escape(tag_name));
    let re = Regex::new(&pattern).ok()?;
    Some(re.captures(game)?.get(1)?.as_str().to_string())
}

/// The seven-tag roster of a game.
pub fn parse_metadata(game: &str) -> GameMetadata {
    GameMetadata {
        event: tag_value("Event", game),
        site: tag_value("Site", game),
        date: tag_value("Date", game),
        round: tag_value("Round", game),
        white: tag_value("White", game),
        black: tag_value("Black", game),
        result: tag_value("Result", game),
    }
}

/// Start-position FEN when the game declares `[SetUp "1"]`.
pub fn setup_fen(game: &str) -> Option<String> {
    if find_tag("SetUp", game).as_deref() != Some("1") {
        return None;
    }
    find_tag("FEN", game)
}

/// Split the movetext of a game into per-ply SAN tokens.
///
/// Tag pairs, comments, variations, annotation glyphs, move numbers and the
/// result marker are dropped.
pub fn tokenize_moves(game: &str) -> Vec<String> {
    let no_tags = TAG_PAIR.replace_all(game, " ");
    let no_comments = COMMENT.replace_all(&no_tags, " ");
    let no_variations = strip_variations(&no_comments);
    // comments may contain "1." themselves, so look for the first move only now
    let movetext = match MOVETEXT_START.find(&no_variations) {
        Some(m) => &no_variations[m.start()..],
        None => &no_variations[..],
    };

    let no_annotations = ANNOTATION.replace_all(movetext, " ");
    let bare = MOVE_NUMBER.replace_all(&no_annotations, " ");

    bare.split_whitespace()
        .filter(|token| !token.contains('.') && !RESULTS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Remove parenthesised side lines, nested ones included.
fn strip_variations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                out.push(' ');
            }
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Split a PGN file into its games. A game ends where a tag section begins
/// after movetext has been seen.
pub fn split_games(text: &str) -> Vec<&str> {
    let mut games = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    let mut seen_moves = false;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            if seen_moves {
                games.push(text[start..offset].trim());
                start = offset;
                seen_moves = false;
            }
        } else if !trimmed.is_empty() {
            seen_moves = true;
        }
        offset += line.len();
    }

    let last = text[start..].trim();
    if !last.is_empty() {
        games.push(last);
    }
    games
}
