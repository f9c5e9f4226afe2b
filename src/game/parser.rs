use thiserror::Error;

use crate::models::Board;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("malformed board: expected {expected} tiles, found {found}")]
    MalformedInput { expected: usize, found: usize },
    #[error("invalid tile '{token}': tiles must be single letters")]
    InvalidTile { token: String },
}

pub struct BoardParser;

impl BoardParser {
    /// Build a `size` x `size` board from whitespace-separated letter tokens,
    /// taken in row-major order. Newlines and runs of spaces are all
    /// insignificant separators. Tokens beyond the first `size * size` are
    /// ignored.
    pub fn parse(text: &str, size: usize) -> Result<Board, BoardError> {
        let expected = size * size;
        let tokens: Vec<&str> = text.split_whitespace().take(expected).collect();

        if tokens.len() < expected {
            return Err(BoardError::MalformedInput {
                expected,
                found: tokens.len(),
            });
        }

        let mut letters = Vec::with_capacity(expected);
        for token in tokens {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => letters.push(letter),
                _ => {
                    return Err(BoardError::InvalidTile {
                        token: token.to_string(),
                    })
                }
            }
        }

        // chunks panics on a zero chunk size; a 0x0 board is simply empty
        let cells = letters.chunks(size.max(1)).map(<[char]>::to_vec).collect();
        Ok(Board::new(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    const BOARD_TEXT: &str = "
        N C A N E
        O U I O P
        Z Q Z O N
        F A D P L
        E D E A Z
    ";

    #[test]
    fn test_parse_row_major() {
        let board = BoardParser::parse(BOARD_TEXT, 5).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.cell(Position { row: 0, col: 0 }), 'N');
        assert_eq!(board.cell(Position { row: 0, col: 4 }), 'E');
        assert_eq!(board.cell(Position { row: 2, col: 3 }), 'O');
        assert_eq!(board.cell(Position { row: 4, col: 4 }), 'Z');
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let board = BoardParser::parse("A  B\n\nC\tD", 2).unwrap();
        assert_eq!(board.cell(Position { row: 0, col: 1 }), 'B');
        assert_eq!(board.cell(Position { row: 1, col: 0 }), 'C');
    }

    #[test]
    fn test_too_few_tokens() {
        let err = BoardParser::parse("A B C", 2).unwrap_err();
        match err {
            BoardError::MalformedInput { expected, found } => {
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_surplus_tokens_are_ignored() {
        let board = BoardParser::parse("A B C D E F", 2).unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board.cell(Position { row: 1, col: 1 }), 'D');
    }

    #[test]
    fn test_multi_character_token_is_rejected() {
        let err = BoardParser::parse("A BC D E", 2).unwrap_err();
        match err {
            BoardError::InvalidTile { token } => assert_eq!(token, "BC"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_size_board_is_empty() {
        let board = BoardParser::parse("A B C", 0).unwrap();
        assert_eq!(board.size(), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            BoardParser::parse("", 5),
            Err(BoardError::MalformedInput {
                expected: 25,
                found: 0
            })
        ));
    }
}
