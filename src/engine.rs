//! Core state model for N×N sliding-tile puzzles.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: an immutable, hashable N×N grid holding a permutation of `0..N²`,
//!   where `0` is the blank. Every move produces a new `Board`.
//! - `Position`: a `(row, col)` cell coordinate.
//! - `Move`: one of the four directions the blank can travel.
//! - `BoardError`: why a grid failed validation.
//!
//! Move labels always name the direction the **blank** travels: `Move::Up`
//! swaps the blank with the tile directly above it.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Errors raised while building a `Board` from untrusted input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("tile {tile} is out of range for a {size}x{size} board (expected 0..={max})")]
    TileOutOfRange { tile: u32, size: usize, max: usize },
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },
    #[error("board has no blank (0) tile")]
    MissingBlank,
    #[error("expected {expected} rows, found {found}")]
    WrongRowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells (expected {expected})")]
    WrongRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid number '{token}' in row {row}")]
    InvalidNumber { row: usize, token: String },
}

/// A cell coordinate on the board, 0-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// A single blank move, labelled by the direction the blank travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves, in the fixed order used for neighbor expansion.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Returns the `(row, col)` delta applied to the blank.
    ///
    /// # Examples
    /// ```
    /// use sliding_puzzle::engine::Move;
    /// assert_eq!(Move::Up.offset(), (-1, 0));
    /// assert_eq!(Move::Right.offset(), (0, 1));
    /// ```
    pub fn offset(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// Returns the move that undoes this one.
    pub fn opposite(self) -> Self {
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
        f.write_str(s)
    }
}

/// An N×N sliding-tile board.
///
/// The grid always holds each value in `0..N²` exactly once; `0` is the blank.
/// Boards are `Copy` values and are never mutated in place, so they can be used
/// directly as keys in `HashSet`/`HashMap` during search. The blank's position
/// is cached alongside the grid.
///
/// `N` must be between 2 and 16 so every label fits in a `u8`; other sizes fail
/// to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    grid: [[u8; N]; N],
    blank: Position,
}

/// The classic 3×3 "8-puzzle".
pub type EightPuzzle = Board<3>;

/// The classic 4×4 "15-puzzle".
pub type FifteenPuzzle = Board<4>;

impl<const N: usize> Board<N> {
    const SIZE_CHECK: () = assert!(N >= 2 && N <= 16, "board side must be between 2 and 16");

    /// Returns the canonical solved board: `1, 2, …, N²-1` in row-major order
    /// with the blank in the bottom-right corner.
    ///
    /// # Examples
    /// ```
    /// use sliding_puzzle::engine::{EightPuzzle, Position};
    /// let goal = EightPuzzle::goal();
    /// assert_eq!(goal.tile(0, 0), 1);
    /// assert_eq!(goal.tile(2, 1), 8);
    /// assert_eq!(goal.blank_position(), Position::new(2, 2));
    /// assert!(goal.is_goal());
    /// ```
    pub fn goal() -> Self {
        let () = Self::SIZE_CHECK;
        let mut grid = [[0u8; N]; N];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let index = r * N + c;
                *cell = if index == N * N - 1 { 0 } else { (index + 1) as u8 };
            }
        }
        Board {
            grid,
            blank: Position::new(N - 1, N - 1),
        }
    }

    /// Builds a board from a grid, checking that it is a permutation of `0..N²`.
    ///
    /// # Returns
    /// * `Ok(Board)` if every value in `0..N²` appears exactly once.
    /// * `Err(BoardError::TileOutOfRange)` for a value `>= N²`.
    /// * `Err(BoardError::DuplicateTile)` for a repeated value.
    ///
    /// # Examples
    /// ```
    /// use sliding_puzzle::engine::{Board, BoardError};
    /// let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
    /// assert_eq!(board.tile(2, 1), 5);
    ///
    /// let dup = Board::from_grid([[1, 1, 3], [4, 0, 6], [7, 5, 8]]);
    /// assert_eq!(dup, Err(BoardError::DuplicateTile { tile: 1 }));
    /// ```
    pub fn from_grid(grid: [[u8; N]; N]) -> Result<Self, BoardError> {
        let () = Self::SIZE_CHECK;
        let mut seen = [false; 256];
        let mut blank = None;

        for (r, row) in grid.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                if tile as usize >= N * N {
                    return Err(BoardError::TileOutOfRange {
                        tile: tile as u32,
                        size: N,
                        max: N * N - 1,
                    });
                }
                if seen[tile as usize] {
                    return Err(BoardError::DuplicateTile { tile });
                }
                seen[tile as usize] = true;
                if tile == 0 {
                    blank = Some(Position::new(r, c));
                }
            }
        }

        let blank = blank.ok_or(BoardError::MissingBlank)?;
        Ok(Board { grid, blank })
    }

    /// Returns a board reached from the goal by a random walk of `moves` blank moves.
    ///
    /// The walk never immediately undoes its previous move. Every board produced
    /// this way is solvable in at most `moves` moves.
    pub fn scrambled<R: Rng + ?Sized>(moves: usize, rng: &mut R) -> Self {
        let mut board = Self::goal();
        let mut last: Option<Move> = None;

        for _ in 0..moves {
            let options: Vec<(Board<N>, Move)> = board
                .neighbors()
                .filter(|&(_, mv)| last != Some(mv.opposite()))
                .collect();
            if let Some(&(next, mv)) = options.choose(rng) {
                board = next;
                last = Some(mv);
            }
        }
        board
    }

    /// Like [`Board::scrambled`], but reproducible: the same seed always yields
    /// the same board.
    pub fn scrambled_with_seed(moves: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::scrambled(moves, &mut rng)
    }

    /// Returns the side length `N`.
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is `>= N`.
    pub fn tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns an immutable reference to the underlying grid.
    pub fn grid(&self) -> &[[u8; N]; N] {
        &self.grid
    }

    /// Iterates over every cell in row-major order, blank included.
    pub fn tiles(&self) -> impl Iterator<Item = u8> + '_ {
        self.grid.iter().flat_map(|row| row.iter().copied())
    }

    /// Returns the position of the blank.
    pub fn blank_position(&self) -> Position {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        self.tiles().enumerate().all(|(i, tile)| {
            if i == N * N - 1 {
                tile == 0
            } else {
                tile as usize == i + 1
            }
        })
    }

    /// Returns the board produced by moving the blank in direction `mv`, or
    /// `None` if the blank would leave the grid.
    ///
    /// # Examples
    /// ```
    /// use sliding_puzzle::engine::{EightPuzzle, Move};
    /// let goal = EightPuzzle::goal();
    /// assert!(goal.apply_move(Move::Down).is_none());
    ///
    /// let moved = goal.apply_move(Move::Up).unwrap();
    /// assert_eq!(moved.tile(1, 2), 0);
    /// assert_eq!(moved.tile(2, 2), 6);
    /// ```
    pub fn apply_move(&self, mv: Move) -> Option<Self> {
        let (dr, dc) = mv.offset();
        let row = self.blank.row.checked_add_signed(dr).filter(|&r| r < N)?;
        let col = self.blank.col.checked_add_signed(dc).filter(|&c| c < N)?;

        let mut next = *self;
        next.grid[self.blank.row][self.blank.col] = self.grid[row][col];
        next.grid[row][col] = 0;
        next.blank = Position::new(row, col);
        Some(next)
    }

    /// Applies `moves` in order, returning `None` as soon as one is illegal.
    pub fn apply_moves(&self, moves: &[Move]) -> Option<Self> {
        moves.iter().try_fold(*self, |board, &mv| board.apply_move(mv))
    }

    /// Yields every board one blank move away, paired with that move.
    ///
    /// Successors come out in `Move::ALL` order, skipping moves that would
    /// leave the grid.
    pub fn neighbors(&self) -> impl Iterator<Item = (Self, Move)> {
        let board = *self;
        Move::ALL
            .into_iter()
            .filter_map(move |mv| board.apply_move(mv).map(|next| (next, mv)))
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    /// Draws a bordered grid, leaving the blank cell empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (N * N - 1).to_string().len();
        let border = format!("+{}", format!("{}+", "-".repeat(width + 2)).repeat(N));

        writeln!(f, "{}", border)?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "|")?;
            for &tile in row {
                if tile == 0 {
                    write!(f, " {:>width$} |", "")?;
                } else {
                    write!(f, " {:>width$} |", tile)?;
                }
            }
            writeln!(f)?;
            write!(f, "{}", border)?;
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvability::is_solvable;

    #[test]
    fn test_goal_layout() {
        let goal = FifteenPuzzle::goal();
        assert_eq!(goal.tile(0, 0), 1);
        assert_eq!(goal.tile(0, 3), 4);
        assert_eq!(goal.tile(3, 2), 15);
        assert_eq!(goal.tile(3, 3), 0);
        assert_eq!(goal.blank_position(), Position::new(3, 3));
        assert!(goal.is_goal());
        assert_eq!(goal.size(), 4);
    }

    #[test]
    fn test_from_grid_valid_caches_blank() {
        let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        assert_eq!(board.blank_position(), Position::new(1, 1));
        assert!(!board.is_goal());
    }

    #[test]
    fn test_from_grid_rejects_out_of_range() {
        let result = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 9]]);
        assert_eq!(
            result,
            Err(BoardError::TileOutOfRange {
                tile: 9,
                size: 3,
                max: 8
            })
        );
    }

    #[test]
    fn test_from_grid_rejects_duplicate() {
        let result = Board::from_grid([[0, 2], [2, 1]]);
        assert_eq!(result, Err(BoardError::DuplicateTile { tile: 2 }));
    }

    #[test]
    fn test_goal_equals_parsed_goal() {
        let parsed = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        assert_eq!(parsed, EightPuzzle::goal());
    }

    #[test]
    fn test_apply_move_blank_direction_convention() {
        let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();

        let up = board.apply_move(Move::Up).unwrap();
        assert_eq!(up.blank_position(), Position::new(0, 1));
        assert_eq!(up.tile(1, 1), 2);

        let down = board.apply_move(Move::Down).unwrap();
        assert_eq!(down.blank_position(), Position::new(2, 1));
        assert_eq!(down.tile(1, 1), 5);

        let left = board.apply_move(Move::Left).unwrap();
        assert_eq!(left.blank_position(), Position::new(1, 0));
        assert_eq!(left.tile(1, 1), 4);

        let right = board.apply_move(Move::Right).unwrap();
        assert_eq!(right.blank_position(), Position::new(1, 2));
        assert_eq!(right.tile(1, 1), 6);

        // The original board is untouched.
        assert_eq!(board.tile(1, 1), 0);
    }

    #[test]
    fn test_apply_move_then_opposite_restores() {
        let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        for mv in Move::ALL {
            let there = board.apply_move(mv).unwrap();
            assert_eq!(there.apply_move(mv.opposite()), Some(board));
        }
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let board = Board::from_grid([[0, 1], [2, 3]]).unwrap();
        assert!(board.apply_move(Move::Up).is_none());
        assert!(board.apply_move(Move::Left).is_none());
        assert!(board.apply_move(Move::Down).is_some());
        assert!(board.apply_move(Move::Right).is_some());
    }

    #[test]
    fn test_neighbors_corner_and_center() {
        let corner: Vec<Move> = EightPuzzle::goal().neighbors().map(|(_, mv)| mv).collect();
        assert_eq!(corner, vec![Move::Up, Move::Left]);

        let center = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let moves: Vec<Move> = center.neighbors().map(|(_, mv)| mv).collect();
        assert_eq!(moves, Move::ALL.to_vec());
        for (next, mv) in center.neighbors() {
            assert_eq!(center.apply_move(mv), Some(next));
        }
    }

    #[test]
    fn test_apply_moves_stops_on_illegal_move() {
        let goal = EightPuzzle::goal();
        assert_eq!(goal.apply_moves(&[]), Some(goal));
        assert!(goal.apply_moves(&[Move::Up, Move::Down, Move::Down]).is_none());

        let board = goal.apply_moves(&[Move::Up, Move::Left]).unwrap();
        assert_eq!(board.blank_position(), Position::new(1, 1));
    }

    #[test]
    fn test_scrambled_with_seed_determinism() {
        let a = FifteenPuzzle::scrambled_with_seed(30, 7);
        let b = FifteenPuzzle::scrambled_with_seed(30, 7);
        assert_eq!(a, b);
        assert!(is_solvable(&a));

        let zero = FifteenPuzzle::scrambled_with_seed(0, 7);
        assert!(zero.is_goal());
    }

    #[test]
    fn test_move_display_and_opposite() {
        assert_eq!(Move::Left.to_string(), "Left");
        for mv in Move::ALL {
            assert_eq!(mv.opposite().opposite(), mv);
            assert_ne!(mv.opposite(), mv);
        }
    }

    #[test]
    fn test_display_board_formatting() {
        let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let expected = "\
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 |   | 6 |
+---+---+---+
| 7 | 5 | 8 |
+---+---+---+";
        assert_eq!(board.to_string(), expected);

        let wide = FifteenPuzzle::goal().to_string();
        assert!(wide.starts_with("+----+----+----+----+\n|  1 |  2 |  3 |  4 |"));
        assert!(wide.contains("| 13 | 14 | 15 |    |"));
    }
}
