pub mod board;
pub mod report;

pub use board::{Board, Position, DEFAULT_BOARD_SIZE};
pub use report::WordReport;
