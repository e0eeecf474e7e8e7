//! A* best-first search.
//!
//! Nodes live in a per-call arena and refer to their parent by index, so the
//! winning path is rebuilt by walking indices back to the root.
use super::{Solution, SolveError};
use crate::engine::{Board, Move};
use crate::heuristics::manhattan_distance;
use log::trace;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

/// One board reached during the search.
struct SearchNode<const N: usize> {
    board: Board<N>,
    parent: Option<usize>,
    /// Move that produced this node from its parent; `None` only for the root.
    mv: Option<Move>,
    g: u32,
}

/// Open-set entry, ordered so `BinaryHeap` pops the best node first.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: u32,
    h: u32,
    idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: lowest f, then lowest h, then oldest node.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs A* from `start` using the Manhattan heuristic.
///
/// The caller is expected to have checked solvability; an unsolvable board
/// exhausts its reachable component and returns
/// `SolveError::OpenSetExhausted`.
///
/// The returned path is optimal: the heuristic is consistent and every move
/// costs one, so the goal's `g` is minimal the first time it is popped.
pub fn search<const N: usize>(start: &Board<N>) -> Result<Solution, SolveError> {
    let started = Instant::now();
    let mut arena: Vec<SearchNode<N>> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut closed: HashSet<Board<N>> = HashSet::new();

    push_node(
        &mut arena,
        &mut open,
        SearchNode {
            board: *start,
            parent: None,
            mv: None,
            g: 0,
        },
    );

    while let Some(entry) = open.pop() {
        let node = &arena[entry.idx];
        let (board, g) = (node.board, node.g);

        if board.is_goal() {
            let moves = reconstruct_path(&arena, entry.idx);
            return Ok(Solution::new(moves, closed.len(), started.elapsed()));
        }

        if !closed.insert(board) {
            continue;
        }
        if closed.len() % 50_000 == 0 {
            trace!(
                "expanded {} boards, open set {}, current f={}",
                closed.len(),
                open.len(),
                entry.f
            );
        }

        for (next, mv) in board.neighbors() {
            if closed.contains(&next) {
                continue;
            }
            push_node(
                &mut arena,
                &mut open,
                SearchNode {
                    board: next,
                    parent: Some(entry.idx),
                    mv: Some(mv),
                    g: g + 1,
                },
            );
        }
    }

    Err(SolveError::OpenSetExhausted {
        nodes_expanded: closed.len(),
    })
}

fn push_node<const N: usize>(
    arena: &mut Vec<SearchNode<N>>,
    open: &mut BinaryHeap<OpenEntry>,
    node: SearchNode<N>,
) {
    let h = manhattan_distance(&node.board);
    let idx = arena.len();
    open.push(OpenEntry { f: node.g + h, h, idx });
    arena.push(node);
}

/// Collects the moves from the root to `idx`, in root-to-goal order.
fn reconstruct_path<const N: usize>(arena: &[SearchNode<N>], idx: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut current = Some(idx);
    while let Some(i) = current {
        let node = &arena[i];
        if let Some(mv) = node.mv {
            moves.push(mv);
        }
        current = node.parent;
    }
    moves.reverse();
    moves
}
