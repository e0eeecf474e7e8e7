//! Search entry points, result types, and configuration.
//!
//! [`solve`] is the checked entry point: it rejects parity-unsolvable boards
//! up front and then dispatches to one of two engines:
//! - [`best_first`]: A* over an open priority queue and a closed set. Optimal,
//!   but memory grows with the explored state space. Suited to 3×3 boards.
//! - [`deepening`]: iterative-deepening depth-limited search pruned by the
//!   Manhattan heuristic, with path-local cycle detection. Memory is linear in
//!   the depth bound. Suited to 4×4 boards.
use crate::engine::{Board, Move};
use crate::solvability::is_solvable;
use log::info;
use std::time::Duration;

pub mod best_first;
pub mod deepening;

/// Default deepening cap: 80 moves is the 15-puzzle's diameter.
pub const DEFAULT_MAX_DEPTH: u32 = 80;

/// Which search engine [`solve`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Best-first for boards up to 3×3, iterative deepening above that.
    Auto,
    /// A* best-first search.
    BestFirst,
    /// Iterative-deepening depth-limited search.
    Deepening,
}

impl Algorithm {
    /// Resolves `Auto` to a concrete engine for an `n`×`n` board.
    pub fn for_size(self, n: usize) -> Algorithm {
        match self {
            Algorithm::Auto if n <= 3 => Algorithm::BestFirst,
            Algorithm::Auto => Algorithm::Deepening,
            other => other,
        }
    }
}

/// Options accepted by [`solve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub algorithm: Algorithm,
    /// Largest depth bound the deepening engine tries before giving up.
    /// Ignored by the best-first engine.
    pub max_depth: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            algorithm: Algorithm::Auto,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Counters gathered while searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards expanded: the closed-set size for best-first, every board
    /// entered across all depth bounds for deepening.
    pub nodes_expanded: usize,
    /// Wall time spent searching.
    pub elapsed: Duration,
    /// Solution length; always equal to `moves.len()`.
    pub depth: usize,
}

/// Represents a solution found by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Blank moves from the initial board to the goal, in order.
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

impl Solution {
    pub(crate) fn new(moves: Vec<Move>, nodes_expanded: usize, elapsed: Duration) -> Self {
        let depth = moves.len();
        Solution {
            moves,
            stats: SearchStats {
                nodes_expanded,
                elapsed,
                depth,
            },
        }
    }
}

/// Why a search produced no solution.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The inversion-parity test failed; no search was run.
    #[error("puzzle is not solvable (inversion parity mismatch)")]
    Unsolvable,
    /// Deepening tried every bound up to `max_depth` without reaching the goal.
    #[error("no solution found within maximum depth {max_depth}")]
    BoundExhausted { max_depth: u32 },
    /// Best-first ran out of boards to expand. Unreachable for a board that
    /// passed the parity test.
    #[error("open set exhausted after expanding {nodes_expanded} boards without reaching the goal")]
    OpenSetExhausted { nodes_expanded: usize },
}

/// Solves `board` with the engine selected by `config`.
///
/// The parity check runs first, so unsolvable boards return
/// `SolveError::Unsolvable` without any search.
///
/// # Examples
/// ```
/// use sliding_puzzle::engine::Board;
/// use sliding_puzzle::solver::{solve, SolveError, SolverConfig};
///
/// let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
/// let solution = solve(&board, &SolverConfig::default()).unwrap();
/// assert_eq!(solution.stats.depth, 2);
/// assert_eq!(board.apply_moves(&solution.moves), Some(Board::goal()));
///
/// let swapped = Board::from_grid([[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
/// assert_eq!(solve(&swapped, &SolverConfig::default()), Err(SolveError::Unsolvable));
/// ```
pub fn solve<const N: usize>(
    board: &Board<N>,
    config: &SolverConfig,
) -> Result<Solution, SolveError> {
    if !is_solvable(board) {
        return Err(SolveError::Unsolvable);
    }

    let algorithm = config.algorithm.for_size(N);
    let solution = match algorithm {
        Algorithm::Deepening => deepening::search(board, config.max_depth)?,
        _ => best_first::search(board)?,
    };

    info!(
        "{:?} solved {}x{} board in {} moves ({} nodes, {:?})",
        algorithm,
        N,
        N,
        solution.stats.depth,
        solution.stats.nodes_expanded,
        solution.stats.elapsed
    );
    Ok(solution)
}
