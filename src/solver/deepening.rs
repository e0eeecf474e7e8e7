//! Iterative-deepening depth-limited search.
//!
//! Each depth bound runs a depth-first search over an explicit frame stack, so
//! deep bounds never grow the call stack. Branches are cut when the Manhattan
//! distance exceeds the remaining budget, or when a board repeats one already
//! on the current path. All per-bound state lives in [`DepthLimited`] and is
//! rebuilt for every bound.
use super::{Solution, SolveError};
use crate::engine::{Board, Move};
use crate::heuristics::manhattan_distance;
use log::debug;
use std::collections::HashSet;
use std::time::Instant;

/// Runs depth-limited searches with bounds `0, 1, …, max_depth` and returns
/// the first success.
///
/// Every shallower bound was searched exhaustively before the winning one, so
/// the returned path is minimal. The caller is expected to have checked
/// solvability.
///
/// # Examples
/// ```
/// use sliding_puzzle::engine::FifteenPuzzle;
/// use sliding_puzzle::solver::deepening::search;
///
/// let board = FifteenPuzzle::scrambled_with_seed(10, 1);
/// let solution = search(&board, 20).unwrap();
/// assert!(solution.moves.len() <= 10);
/// assert_eq!(board.apply_moves(&solution.moves), Some(FifteenPuzzle::goal()));
/// ```
pub fn search<const N: usize>(start: &Board<N>, max_depth: u32) -> Result<Solution, SolveError> {
    let started = Instant::now();
    let mut nodes_expanded = 0;

    for bound in 0..=max_depth {
        let mut dls = DepthLimited::new();
        let found = dls.run(*start, bound);
        nodes_expanded += dls.nodes_expanded;
        debug!(
            "depth bound {}: {} boards entered ({} total)",
            bound, dls.nodes_expanded, nodes_expanded
        );

        if found {
            return Ok(Solution::new(dls.path, nodes_expanded, started.elapsed()));
        }
    }

    Err(SolveError::BoundExhausted { max_depth })
}

/// A board on the current path, plus which of its moves to try next.
struct Frame<const N: usize> {
    board: Board<N>,
    remaining: u32,
    next: usize,
}

impl<const N: usize> Frame<N> {
    /// Advances to the next legal child and its budget, or `None` when every
    /// move has been tried or the budget is spent.
    fn next_child(&mut self) -> Option<(Board<N>, Move, u32)> {
        let remaining = self.remaining.checked_sub(1)?;
        while let Some(&mv) = Move::ALL.get(self.next) {
            self.next += 1;
            if let Some(child) = self.board.apply_move(mv) {
                return Some((child, mv, remaining));
            }
        }
        None
    }
}

enum Visit {
    Goal,
    Pruned,
    Entered,
}

/// State of one depth-limited search: the path-local membership set, the
/// moves taken so far, and the frame stack. Invariant between steps:
/// `path.len() + 1 == frames.len()` while any frame is live.
struct DepthLimited<const N: usize> {
    on_path: HashSet<Board<N>>,
    path: Vec<Move>,
    frames: Vec<Frame<N>>,
    nodes_expanded: usize,
}

impl<const N: usize> DepthLimited<N> {
    fn new() -> Self {
        DepthLimited {
            on_path: HashSet::new(),
            path: Vec::new(),
            frames: Vec::new(),
            nodes_expanded: 0,
        }
    }

    /// Searches from `start` with budget `bound`. On success `self.path` holds
    /// the solution.
    fn run(&mut self, start: Board<N>, bound: u32) -> bool {
        match self.visit(start, bound) {
            Visit::Goal => return true,
            Visit::Pruned => return false,
            Visit::Entered => {}
        }

        loop {
            let Some(frame) = self.frames.last_mut() else {
                return false;
            };

            match frame.next_child() {
                Some((child, mv, remaining)) => {
                    self.path.push(mv);
                    match self.visit(child, remaining) {
                        Visit::Goal => return true,
                        Visit::Pruned => {
                            self.path.pop();
                        }
                        Visit::Entered => {}
                    }
                }
                None => self.leave(),
            }
        }
    }

    /// Marks `board` as on the path and pushes its frame, unless it is the goal
    /// or the branch is cut.
    fn visit(&mut self, board: Board<N>, remaining: u32) -> Visit {
        if board.is_goal() {
            return Visit::Goal;
        }
        if manhattan_distance(&board) > remaining {
            return Visit::Pruned;
        }
        if !self.on_path.insert(board) {
            return Visit::Pruned;
        }

        self.nodes_expanded += 1;
        self.frames.push(Frame {
            board,
            remaining,
            next: 0,
        });
        Visit::Entered
    }

    /// Pops the exhausted top frame and unmarks its board.
    fn leave(&mut self) {
        if let Some(done) = self.frames.pop() {
            self.on_path.remove(&done.board);
        }
        if !self.frames.is_empty() {
            self.path.pop();
        }
    }
}
