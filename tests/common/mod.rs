#![allow(dead_code)]

use shakmaty::san::San;
use shakmaty::{Chess, Position};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Morphy vs Duke of Brunswick and Count Isouard, Paris 1858.
pub const OPERA_GAME: &str = r#"[Event "Paris"]
[Site "Paris FRA"]
[Date "1858.??.??"]
[Round "?"]
[White "Paul Morphy"]
[Black "Duke Karl / Count Isouard"]
[Result "1-0"]

1. e4 e5 2. Nf3 d6 3. d4 Bg4 {This is a weak move already.} 4. dxe5 Bxf3
5. Qxf3 dxe5 6. Bc4 Nf6 7. Qb3 Qe7 8. Nc3 c6 9. Bg5 b5 10. Nxb5 cxb5
11. Bxb5+ Nbd7 12. O-O-O Rd8 13. Rxd7 Rxd7 14. Rd1 Qe6 15. Bxd7+ Nxd7
16. Qb8+ Nxb8 17. Rd8# 1-0
"#;

pub const OPERA_FINAL: &str = "1n1Rkb1r/p4ppp/4q3/4p1B1/4P3/8/PPP2PPP/2K5";

/// Anderssen vs Kieseritzky, London 1851.
pub const IMMORTAL_GAME: &str = r#"[Event "London"]
[Site "London ENG"]
[Date "1851.06.21"]
[White "Adolf Anderssen"]
[Black "Lionel Kieseritzky"]
[Result "1-0"]

1. e4 e5 2. f4 exf4 3. Bc4 Qh4+ 4. Kf1 b5 5. Bxb5 Nf6 6. Nf3 Qh6 7. d3 Nh5
8. Nh4 Qg5 9. Nf5 c6 10. g4 Nf6 11. Rg1 cxb5 12. h4 Qg6 13. h5 Qg5 14. Qf3 Ng8
15. Bxf4 Qf6 16. Nc3 Bc5 17. Nd5 Qxb2 18. Bd6 Bxg1 (18... Qxa1+ 19. Ke2 Qxg1)
19. e5 Qxa1+ 20. Ke2 Na6 21. Nxg7+ Kd8 22. Qf6+ Nxf6 23. Be7# 1-0
"#;

pub const IMMORTAL_FINAL: &str = "r1bk3r/p2pBpNp/n4n2/1p1NP2P/6P1/3P4/P1P1K3/q5b1";

/// En passant, promotion with capture, and castling on both wings.
pub const SPECIAL_MOVES_GAME: &str = r#"[Event "Special moves"]
[Result "*"]

1. e4 d5 2. e5 f5 3. exf6 e.p. e6 4. fxg7 Nf6 5. gxh8=Q Qe7 6. Nf3 Nc6
7. Bb5 Bd7 8. O-O O-O-O 9. Qxf8 Rxf8 10. d4 *
"#;

pub const SPECIAL_MOVES_FINAL: &str = "2k2r2/pppbq2p/2n1pn2/1B1p4/3P4/5N2/PPP2PPP/RNBQ1RK1";

pub fn tokens(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Placement field reached by replaying the tokens with shakmaty's legal
/// move generator. Panics on anything shakmaty rejects.
pub fn reference_placement(moves: &[String]) -> String {
    let mut pos = Chess::default();
    for token in moves {
        let san: San = token
            .trim_end_matches(['+', '#'])
            .parse()
            .unwrap_or_else(|_| panic!("unparseable SAN {token}"));
        let mv = san
            .to_move(&pos)
            .unwrap_or_else(|_| panic!("illegal move {token}"));
        pos.play_unchecked(mv);
    }

    pos.board().to_string()
}

/// Generate a unique suffix based on timestamp to avoid collisions.
pub fn unique_suffix() -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}", ts % 1_000_000_000)
}

/// Write PGN text to a fresh file under the temp directory.
pub fn write_pgn(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{name}-{}.pgn", unique_suffix()));
    std::fs::write(&path, text).unwrap();
    path
}
