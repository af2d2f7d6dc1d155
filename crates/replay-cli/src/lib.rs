pub use chess_core;

pub mod config;
pub mod error;
pub mod report;
