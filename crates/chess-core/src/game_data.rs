use serde::Serialize;

/// Seven-tag roster. Missing tags hold `NOT GIVEN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameMetadata {
    pub event: String,
    pub site: String,
    pub date: String,
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2"
}

/// One replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub metadata: GameMetadata,
    pub moves: Vec<String>, // SAN notation
    pub final_position: String,
}
