use crate::models::{Board, Position};
use std::collections::HashSet;

pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a usable path on the board: non-empty,
    /// in bounds, each step orthogonal, no tile used twice.
    pub fn is_valid_path(board: &Board, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that all positions are within bounds
        if !positions
            .iter()
            .all(|pos| pos.row < board.size() && pos.col < board.size())
        {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Check if two positions are orthogonally adjacent (no diagonals)
    pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        let row_diff = (pos1.row as i32 - pos2.row as i32).abs();
        let col_diff = (pos1.col as i32 - pos2.col as i32).abs();

        row_diff + col_diff == 1
    }

    /// Extract the word spelled by the given positions
    pub fn extract_word(board: &Board, positions: &[Position]) -> String {
        positions.iter().map(|pos| board.cell(*pos)).collect()
    }
}
