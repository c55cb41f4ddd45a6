//! Heuristic evaluators for the best-first solver.
//!
//! Every evaluator takes the goal configuration as an explicit parameter and
//! returns a lower bound on the number of moves still required. Both
//! functions here are admissible; [`manhattan_distance`] is also consistent
//! and is the one the A* driver uses.
use crate::engine::{Board, BLANK, BOARD_SIZE, TILE_COUNT};

/// Sum of the grid distances between each tile's position and its goal
/// position, blank excluded.
///
/// A single slide moves exactly one tile by one cell, so the estimate
/// changes by at most one per move: the heuristic never overestimates and
/// satisfies the one-move triangle inequality.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::Board;
/// use npuzzle_solver::heuristics::manhattan_distance;
///
/// let goal = Board::goal();
/// assert_eq!(manhattan_distance(&goal, &goal), 0);
///
/// let start = Board::from_grid([[1, 2, 3], [0, 4, 6], [7, 5, 8]]).unwrap();
/// assert_eq!(manhattan_distance(&start, &goal), 3);
/// ```
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    let positions = goal_positions(goal);
    let mut distance = 0u32;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let value = board.get_tile(r, c);
            if value != BLANK {
                let (gr, gc) = positions[value as usize];
                distance += (r.abs_diff(gr) + c.abs_diff(gc)) as u32;
            }
        }
    }
    distance
}

/// Number of non-blank tiles not sitting on their goal cell.
///
/// A weaker admissible bound than [`manhattan_distance`] (every misplaced
/// tile needs at least one move); kept as the simple comparison evaluator.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    let mut count = 0u32;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let value = board.get_tile(r, c);
            if value != BLANK && value != goal.get_tile(r, c) {
                count += 1;
            }
        }
    }
    count
}

// Inverts the goal grid into a value -> (row, col) lookup.
fn goal_positions(goal: &Board) -> [(usize, usize); TILE_COUNT] {
    let mut positions = [(0usize, 0usize); TILE_COUNT];
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            positions[goal.get_tile(r, c) as usize] = (r, c);
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    #[test]
    fn test_zero_at_goal() {
        let goal = Board::goal();
        assert_eq!(manhattan_distance(&goal, &goal), 0);
        assert_eq!(misplaced_tiles(&goal, &goal), 0);

        let other = board_from_str_array(&["123", "4_6", "758"]).unwrap();
        assert_eq!(manhattan_distance(&other, &other), 0);
        assert_eq!(misplaced_tiles(&other, &other), 0);
    }

    #[test]
    fn test_manhattan_known_value() {
        let goal = Board::goal();
        // 4 is one cell right of home, 5 one cell down, 8 one cell right.
        let start = board_from_str_array(&["123", "_46", "758"]).unwrap();
        assert_eq!(manhattan_distance(&start, &goal), 3);
    }

    #[test]
    fn test_misplaced_known_value() {
        let goal = Board::goal();
        let start = board_from_str_array(&["123", "_46", "758"]).unwrap();
        assert_eq!(misplaced_tiles(&start, &goal), 3);
    }

    #[test]
    fn test_manhattan_with_nonstandard_goal() {
        // The goal is a parameter, not a constant: measure against a
        // configuration one slide away from itself.
        let goal = board_from_str_array(&["123", "456", "78_"]).unwrap();
        let shifted = board_from_str_array(&["123", "456", "7_8"]).unwrap();
        assert_eq!(manhattan_distance(&shifted, &goal), 1);
        assert_eq!(manhattan_distance(&goal, &shifted), 1);
    }

    #[test]
    fn test_consistency_over_single_moves() {
        // |h(s) - h(s')| <= 1 for every legal slide.
        let goal = Board::goal();
        for seed in 0..5 {
            let board = goal.scrambled_with_seed(seed, 30);
            let h = manhattan_distance(&board, &goal);
            for (_, successor) in board.successors() {
                let h_next = manhattan_distance(&successor, &goal);
                assert!(
                    h.abs_diff(h_next) <= 1,
                    "manhattan changed by more than 1 across a single move"
                );
            }
        }
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        // Every misplaced tile contributes at least one cell of distance.
        let goal = Board::goal();
        for seed in 0..5 {
            let board = goal.scrambled_with_seed(seed, 35);
            assert!(manhattan_distance(&board, &goal) >= misplaced_tiles(&board, &goal));
        }
    }
}
