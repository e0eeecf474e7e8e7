//! Parity-based solvability test.
//!
//! Every legal move changes the permutation's inversion parity in lockstep with
//! the blank's row, so whether a board can reach the goal is decided in closed
//! form without any search.

use crate::engine::Board;

/// Counts out-of-order pairs among the non-blank tiles read in row-major order.
///
/// # Examples
/// ```
/// use sliding_puzzle::engine::{Board, EightPuzzle};
/// use sliding_puzzle::solvability::inversion_count;
///
/// assert_eq!(inversion_count(&EightPuzzle::goal()), 0);
/// let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
/// assert_eq!(inversion_count(&board), 1);
/// ```
pub fn inversion_count<const N: usize>(board: &Board<N>) -> usize {
    let flattened: Vec<u8> = board.tiles().filter(|&tile| tile != 0).collect();
    flattened
        .iter()
        .enumerate()
        .map(|(i, &val)| flattened[i + 1..].iter().filter(|&&next| next < val).count())
        .sum()
}

/// Decides whether `board` can reach the goal.
///
/// * Odd width: solvable iff the inversion count is even.
/// * Even width: with `blank_row_from_bottom = (N - 1) - blank_row`, solvable
///   iff `blank_row_from_bottom` and the inversion count are both even or both
///   odd.
pub fn is_solvable<const N: usize>(board: &Board<N>) -> bool {
    let inversions_even = inversion_count(board) % 2 == 0;

    if N % 2 == 1 {
        inversions_even
    } else {
        let blank_row_from_bottom = (N - 1) - board.blank_position().row;
        (blank_row_from_bottom % 2 == 0) == inversions_even
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EightPuzzle, FifteenPuzzle};

    #[test]
    fn test_goal_is_solvable() {
        assert!(is_solvable(&EightPuzzle::goal()));
        assert!(is_solvable(&FifteenPuzzle::goal()));
        assert!(is_solvable(&Board::<2>::goal()));
        assert!(is_solvable(&Board::<5>::goal()));
    }

    #[test]
    fn test_swapped_pair_is_unsolvable() {
        let eight = Board::from_grid([[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
        assert!(!is_solvable(&eight));

        let fifteen = Board::from_grid([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 15, 14, 0],
        ])
        .unwrap();
        assert!(!is_solvable(&fifteen));
    }

    #[test]
    fn test_example_board_solvable() {
        let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        assert_eq!(inversion_count(&board), 2);
        assert!(is_solvable(&board));
    }

    #[test]
    fn test_even_width_blank_row_parity() {
        for seed in 0..50 {
            let board = FifteenPuzzle::scrambled_with_seed(25, seed);
            assert!(is_solvable(&board), "seed {seed} scramble must be solvable");
        }

        // Zero inversions, but the blank sits an odd number of rows from the bottom.
        let board = Board::from_grid([
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [8, 9, 10, 11],
            [12, 13, 14, 15],
        ])
        .unwrap();
        assert_eq!(inversion_count(&board), 0);
        assert!(!is_solvable(&board));
    }

    #[test]
    fn test_solvability_is_idempotent() {
        let board = FifteenPuzzle::scrambled_with_seed(17, 99);
        assert_eq!(is_solvable(&board), is_solvable(&board));
    }
}
