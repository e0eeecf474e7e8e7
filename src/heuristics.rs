use crate::engine::Board;

/// Calculates the Manhattan distance of `board` from the goal.
///
/// For every non-blank tile `t` at `(r, c)`, its goal cell is
/// `((t - 1) / N, (t - 1) % N)`; the result is the sum of row and column
/// displacements over all tiles. Each unit needs at least one move, so the
/// value never overestimates the remaining solution length, and a single move
/// changes it by exactly one.
///
/// # Examples
/// ```
/// use sliding_puzzle::engine::{Board, EightPuzzle};
/// use sliding_puzzle::heuristics::manhattan_distance;
///
/// assert_eq!(manhattan_distance(&EightPuzzle::goal()), 0);
/// let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
/// assert_eq!(manhattan_distance(&board), 2);
/// ```
pub fn manhattan_distance<const N: usize>(board: &Board<N>) -> u32 {
    let mut distance = 0;
    for (r, row) in board.grid().iter().enumerate() {
        for (c, &tile) in row.iter().enumerate() {
            if tile != 0 {
                let (goal_r, goal_c) = goal_cell::<N>(tile);
                distance += (goal_r.abs_diff(r) + goal_c.abs_diff(c)) as u32;
            }
        }
    }
    distance
}

/// Goal `(row, col)` of a non-blank tile.
fn goal_cell<const N: usize>(tile: u8) -> (usize, usize) {
    let index = tile as usize - 1;
    (index / N, index % N)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EightPuzzle, FifteenPuzzle, Move};

    #[test]
    fn test_manhattan_goal_is_zero() {
        assert_eq!(manhattan_distance(&EightPuzzle::goal()), 0);
        assert_eq!(manhattan_distance(&FifteenPuzzle::goal()), 0);
    }

    #[test]
    fn test_manhattan_ignores_blank() {
        // Only the blank and 8 swapped: tile 8 is one column off.
        let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        assert_eq!(manhattan_distance(&board), 1);
    }

    #[test]
    fn test_manhattan_far_corners() {
        // 1 and 15 swapped across the 4x4 board: 3 + 2 each way.
        let board = Board::from_grid([
            [15, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 1, 0],
        ])
        .unwrap();
        assert_eq!(manhattan_distance(&board), 10);
    }

    #[test]
    fn test_manhattan_changes_by_one_per_move() {
        let board = FifteenPuzzle::scrambled_with_seed(40, 3);
        let h = manhattan_distance(&board);
        for (next, _) in board.neighbors() {
            assert_eq!(manhattan_distance(&next).abs_diff(h), 1);
        }
    }

    #[test]
    fn test_manhattan_bounded_by_scramble_length() {
        for seed in 0..20 {
            let board = EightPuzzle::scrambled_with_seed(9, seed);
            assert!(manhattan_distance(&board) <= 9);
        }
        let one = EightPuzzle::goal().apply_move(Move::Left).unwrap();
        assert_eq!(manhattan_distance(&one), 1);
    }
}
