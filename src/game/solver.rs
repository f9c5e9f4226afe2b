use crate::models::{Board, Position};

/// Depth-first backtracking search for a word on a board.
///
/// A path uses each tile at most once and moves only between orthogonally
/// adjacent tiles; it may change direction freely. Only the first path found
/// is of interest, so every branch short-circuits on success.
pub struct Solver;

impl Solver {
    /// Whether the word can be traced on the board.
    pub fn exists(board: &Board, word: &str) -> bool {
        Self::find(board, word).is_some()
    }

    /// The first path spelling the word, if one exists.
    ///
    /// Candidate tiles are tried in row-major order for the first letter and
    /// in east/west/north/south order afterwards, so the returned path is
    /// deterministic for a given board and word. An empty word, or one longer
    /// than the tile count, has no path.
    pub fn find(board: &Board, word: &str) -> Option<Vec<Position>> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() || letters.len() > board.size() * board.size() {
            return None;
        }

        // The path lives in this call frame only; nothing persists between
        // top-level searches.
        let mut path = Vec::with_capacity(letters.len());
        if Self::search(board, &letters, &board.positions(), &mut path) {
            Some(path)
        } else {
            None
        }
    }

    /// Match `letters` against `candidates`, extending `path` one tile per
    /// recursive step. On failure the path is restored to its length at
    /// entry before returning.
    fn search(
        board: &Board,
        letters: &[char],
        candidates: &[Position],
        path: &mut Vec<Position>,
    ) -> bool {
        let (&letter, rest) = match letters.split_first() {
            Some(split) => split,
            None => return false,
        };

        if rest.is_empty() {
            // Base case: any unused candidate tile carrying the last letter
            // completes the path.
            for &pos in candidates {
                if board.cell(pos) == letter && !path.contains(&pos) {
                    path.push(pos);
                    return true;
                }
            }
            return false;
        }

        let matches: Vec<Position> = candidates
            .iter()
            .copied()
            .filter(|pos| board.cell(*pos) == letter && !path.contains(pos))
            .collect();

        for pos in matches {
            path.push(pos);
            if Self::search(board, rest, &board.neighbors(pos), path) {
                return true;
            }
            // Dead end: drop the tentative tile and try the next candidate.
            path.pop();
        }

        false
    }
}
