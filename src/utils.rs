//! Parsing and formatting of textual board descriptions.
//!
//! The text format is three rows of three cells: the tile digits `1`..=`8`
//! and `0` or `_` for the blank. [`board_to_str_rows`] emits the same
//! format, so boards round-trip between the binaries.
use crate::engine::{Board, BLANK, BOARD_SIZE};
use crate::error::PuzzleError;

/// Parses an array of string slices into a [`Board`].
///
/// Exactly [`BOARD_SIZE`] rows of exactly [`BOARD_SIZE`] characters are
/// required; shape errors are reported before cell errors, and the
/// assembled grid then goes through [`Board::from_grid`] validation.
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::board_from_str_array;
/// use npuzzle_solver::engine::BLANK;
///
/// let board = board_from_str_array(&["123", "4_6", "758"]).unwrap();
/// assert_eq!(board.get_tile(0, 0), 1);
/// assert_eq!(board.get_tile(1, 1), BLANK);
///
/// // '0' is an accepted alias for the blank.
/// assert_eq!(board, board_from_str_array(&["123", "406", "758"]).unwrap());
///
/// assert!(board_from_str_array(&["123", "4X6", "758"]).is_err());
/// assert!(board_from_str_array(&["123", "456"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, PuzzleError> {
    if s.len() != BOARD_SIZE {
        return Err(PuzzleError::InvalidRowCount {
            expected: BOARD_SIZE,
            found: s.len(),
        });
    }

    let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
    for (r, row_str) in s.iter().enumerate() {
        let cells: Vec<char> = row_str.chars().collect();
        if cells.len() != BOARD_SIZE {
            return Err(PuzzleError::InvalidRowLength {
                row: r,
                expected: BOARD_SIZE,
                found: cells.len(),
            });
        }

        for (c, character) in cells.into_iter().enumerate() {
            grid[r][c] = match character {
                '_' => BLANK,
                '0'..='8' => character as u8 - b'0',
                _ => {
                    return Err(PuzzleError::UnrecognizedCharacter {
                        character,
                        row: r,
                        col: c,
                    })
                }
            };
        }
    }
    Board::from_grid(grid)
}

/// Formats a board as the compact row strings [`board_from_str_array`]
/// accepts, with `_` marking the blank.
pub fn board_to_str_rows(board: &Board) -> [String; BOARD_SIZE] {
    let mut rows: [String; BOARD_SIZE] = Default::default();
    for (r, row) in rows.iter_mut().enumerate() {
        for c in 0..BOARD_SIZE {
            let value = board.get_tile(r, c);
            if value == BLANK {
                row.push('_');
            } else {
                row.push((b'0' + value) as char);
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BLANK;

    #[test]
    fn test_parse_valid_board() {
        let board = board_from_str_array(&["123", "4_6", "758"]).unwrap();
        assert_eq!(board.get_tile(0, 2), 3);
        assert_eq!(board.get_tile(1, 1), BLANK);
        assert_eq!(board.get_tile(2, 1), 5);
    }

    #[test]
    fn test_parse_blank_aliases() {
        let with_underscore = board_from_str_array(&["123", "4_6", "758"]).unwrap();
        let with_zero = board_from_str_array(&["123", "406", "758"]).unwrap();
        assert_eq!(with_underscore, with_zero);
    }

    #[test]
    fn test_parse_invalid_char() {
        let result = board_from_str_array(&["123", "4X6", "758"]);
        assert_eq!(
            result,
            Err(PuzzleError::UnrecognizedCharacter {
                character: 'X',
                row: 1,
                col: 1,
            })
        );
    }

    #[test]
    fn test_parse_digit_nine_rejected() {
        // '9' is a digit but not a tile of a 3x3 puzzle.
        let result = board_from_str_array(&["123", "496", "758"]);
        assert_eq!(
            result,
            Err(PuzzleError::UnrecognizedCharacter {
                character: '9',
                row: 1,
                col: 1,
            })
        );
    }

    #[test]
    fn test_parse_wrong_row_count() {
        let result = board_from_str_array(&["123", "456"]);
        assert_eq!(
            result,
            Err(PuzzleError::InvalidRowCount {
                expected: BOARD_SIZE,
                found: 2,
            })
        );
    }

    #[test]
    fn test_parse_wrong_row_length() {
        let result = board_from_str_array(&["123", "45_6", "758"]);
        assert_eq!(
            result,
            Err(PuzzleError::InvalidRowLength {
                row: 1,
                expected: BOARD_SIZE,
                found: 4,
            })
        );
    }

    #[test]
    fn test_parse_duplicate_tile_rejected() {
        let result = board_from_str_array(&["123", "4_6", "755"]);
        assert_eq!(result, Err(PuzzleError::DuplicateTile { value: 5 }));
    }

    #[test]
    fn test_format_round_trip() {
        let board = Board::goal().scrambled_with_seed(9, 30);
        let rows = board_to_str_rows(&board);
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let reparsed = board_from_str_array(&row_refs).unwrap();
        assert_eq!(reparsed, board);
    }
}
