//! Core board engine for the sliding tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: the four directions the blank can travel.
//! - `Board`: the immutable 3x3 configuration, with validated construction,
//!   successor generation, parity checks, and seeded scrambling.
use crate::error::PuzzleError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the board. The puzzle is always square.
pub const BOARD_SIZE: usize = 3;

/// Number of distinct cell values: the tiles `1..=8` plus the blank.
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Sentinel value held by the single empty cell.
pub const BLANK: u8 = 0;

/// A single slide, named for the direction the blank travels.
///
/// Sliding the blank in a direction moves the adjacent tile the opposite
/// way; the two descriptions are equivalent and this crate uses the blank's
/// point of view throughout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four moves, in the fixed order successors are generated.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row/column offset applied to the blank position.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable 3x3 puzzle configuration.
///
/// Exactly one cell holds [`BLANK`]; the remaining cells hold each tile
/// `1..=8` exactly once. Equality, ordering, and hashing are structural
/// (cell by cell). Every transformation returns a fresh `Board`; a value is
/// never mutated after construction.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::{Board, Move};
///
/// let goal = Board::goal();
/// assert_eq!(goal.get_tile(0, 0), 1);
/// assert_eq!(goal.blank_position(), (2, 2));
///
/// // The blank sits in the bottom-right corner, so it cannot move further
/// // down, but it can move up.
/// assert!(goal.apply_move(Move::Down).is_none());
/// assert!(goal.apply_move(Move::Up).is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The conventional goal configuration: tiles in row-major order with
    /// the blank in the bottom-right corner.
    ///
    /// Nothing in the crate privileges this configuration; every search and
    /// heuristic takes its goal as an explicit parameter, and any validated
    /// `Board` can serve as one.
    pub fn goal() -> Self {
        let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
        let mut value = 1u8;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if r == BOARD_SIZE - 1 && c == BOARD_SIZE - 1 {
                    grid[r][c] = BLANK;
                } else {
                    grid[r][c] = value;
                    value += 1;
                }
            }
        }
        Board { grid }
    }

    /// Creates a board from a raw grid, validating it first.
    ///
    /// Every value must lie in `0..=8` and appear exactly once. The fixed
    /// array type already rules out wrong dimensions, so the checks here
    /// cover the remaining ways an input can be malformed.
    ///
    /// # Errors
    /// - [`PuzzleError::ValueOutOfRange`] for a cell above 8.
    /// - [`PuzzleError::MissingTile`] / [`PuzzleError::DuplicateTile`] when
    ///   the cells are not a permutation of `0..=8` (reported for the lowest
    ///   offending value).
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::Board;
    ///
    /// let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    /// assert_eq!(board, Board::goal());
    ///
    /// assert!(Board::from_grid([[1, 1, 3], [4, 5, 6], [7, 8, 0]]).is_err());
    /// ```
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, PuzzleError> {
        let mut counts = [0usize; TILE_COUNT];
        for row in &grid {
            for &value in row {
                if value as usize >= TILE_COUNT {
                    return Err(PuzzleError::ValueOutOfRange { value });
                }
                counts[value as usize] += 1;
            }
        }
        for (value, &count) in counts.iter().enumerate() {
            if count == 0 {
                return Err(PuzzleError::MissingTile { value: value as u8 });
            }
            if count > 1 {
                return Err(PuzzleError::DuplicateTile { value: value as u8 });
            }
        }
        Ok(Board { grid })
    }

    /// Returns the tile at the specified row (`r`) and column (`c`).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns an immutable reference to the underlying grid.
    pub fn get_grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Returns the (row, column) of the blank cell.
    pub fn blank_position(&self) -> (usize, usize) {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.grid[r][c] == BLANK {
                    return (r, c);
                }
            }
        }
        unreachable!("validated boards always contain a blank");
    }

    /// Slides the blank one cell in the given direction.
    ///
    /// The adjacent tile takes the blank's old position. Returns `None` when
    /// the move would take the blank off the grid; the board itself is left
    /// untouched either way.
    pub fn apply_move(&self, mv: Move) -> Option<Board> {
        let (r, c) = self.blank_position();
        let (dr, dc) = mv.delta();

        let nr = r as isize + dr;
        let nc = c as isize + dc;
        if nr < 0 || nr >= BOARD_SIZE as isize || nc < 0 || nc >= BOARD_SIZE as isize {
            return None;
        }

        let (nr, nc) = (nr as usize, nc as usize);
        let mut grid = self.grid;
        grid[r][c] = grid[nr][nc];
        grid[nr][nc] = BLANK;
        Some(Board { grid })
    }

    /// Enumerates every configuration reachable by a single slide, paired
    /// with the move that produces it.
    ///
    /// A corner blank yields 2 successors, an edge blank 3, a center blank 4.
    /// Each successor costs one move more than `self`.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply_move(mv).map(|board| (mv, board)))
            .collect()
    }

    /// Counts the inversions of the tile sequence, blank excluded.
    ///
    /// An inversion is a pair of tiles appearing in the opposite of their
    /// numeric order when the grid is read row by row.
    pub fn inversions(&self) -> usize {
        let flat: Vec<u8> = self
            .grid
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .filter(|&value| value != BLANK)
            .collect();

        flat.iter()
            .enumerate()
            .map(|(i, &value)| flat[i + 1..].iter().filter(|&&next| next < value).count())
            .sum()
    }

    /// Whether `self` and `other` lie in the same permutation parity class.
    ///
    /// Each slide preserves the parity of the inversion count on an
    /// odd-width board, so two configurations are mutually reachable exactly
    /// when their inversion counts share parity. This is a cheap predicate;
    /// the search drivers do not consult it and instead report an
    /// unreachable goal by exhausting the frontier.
    pub fn is_reachable_from(&self, other: &Board) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }

    /// Produces a scrambled board by walking `steps` random legal moves
    /// from `self`, seeded for reproducibility.
    ///
    /// The walk never immediately undoes its previous move. Because every
    /// step is a legal slide, the result is always reachable from `self`.
    pub fn scrambled_with_seed(&self, seed: u64, steps: usize) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = self.clone();
        let mut last_move: Option<Move> = None;

        for _ in 0..steps {
            let mut candidates: Vec<(Move, Board)> = board
                .successors()
                .into_iter()
                .filter(|(mv, _)| last_move.map_or(true, |last| *mv != last.opposite()))
                .collect();
            // The blank always has at least two legal moves and at most one
            // of them is the immediate undo, so candidates is never empty.
            let (mv, next) = candidates.swap_remove(rng.gen_range(0..candidates.len()));
            board = next;
            last_move = Some(mv);
        }
        board
    }
}

impl fmt::Display for Board {
    /// Formats the board as rows of space-separated tiles, `_` for the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == BLANK {
                    write!(f, "_")?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
