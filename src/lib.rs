//! # Sliding Puzzle Solver Library
//!
//! This library solves N×N sliding-tile puzzles (the 3×3 "8-puzzle", the
//! 4×4 "15-puzzle", and other square sizes): given a scrambled board, it finds
//! a shortest sequence of blank moves that reaches the canonical goal
//! `1, 2, …, N²-1, _`.
//!
//! It is used by two binaries:
//! - `puzzle_solver`: loads a board from a file (or scrambles one), solves
//!   it, and prints the moves, search statistics and every intermediate board.
//! - `engine_evaluator`: runs both search engines over a batch of seeded
//!   scrambles and compares solution length, nodes expanded and time.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), cell coordinates
//!   (`Position`), blank moves (`Move`) and input validation (`BoardError`).
//! - `heuristics`: the Manhattan distance lower bound shared by both engines.
//! - `solvability`: the inversion-parity test that rejects unsolvable boards
//!   without searching.
//! - `solver`: the `solve` entry point, its configuration and result types,
//!   and the `best_first` (A*) and `deepening` (iterative-deepening) engines.
//! - `utils`: parsing boards from text.
//!
//! ```
//! use sliding_puzzle::engine::FifteenPuzzle;
//! use sliding_puzzle::solver::{solve, SolverConfig};
//!
//! let board = FifteenPuzzle::scrambled_with_seed(12, 42);
//! let solution = solve(&board, &SolverConfig::default()).unwrap();
//! assert_eq!(board.apply_moves(&solution.moves), Some(FifteenPuzzle::goal()));
//! ```

pub mod engine;
pub mod heuristics;
pub mod solvability;
pub mod solver;
pub mod utils;
