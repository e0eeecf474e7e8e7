use sliding_puzzle::engine::EightPuzzle;
use sliding_puzzle::solver::{solve, Algorithm, SearchStats, SolverConfig, DEFAULT_MAX_DEPTH};
use std::collections::HashMap;

const NUM_BOARDS_FOR_EVALUATION: u64 = 20;
const START_SEED: u64 = 0;
const SCRAMBLE_MOVES: usize = 24;

fn main() {
    env_logger::init();

    let engines = [Algorithm::BestFirst, Algorithm::Deepening];
    let mut all_stats: HashMap<Algorithm, Vec<SearchStats>> = HashMap::new();

    println!(
        "Starting engine evaluation for {} boards ({} scramble moves)...",
        NUM_BOARDS_FOR_EVALUATION, SCRAMBLE_MOVES
    );

    for board_idx in 0..NUM_BOARDS_FOR_EVALUATION {
        let seed = START_SEED + board_idx;
        let board = EightPuzzle::scrambled_with_seed(SCRAMBLE_MOVES, seed);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, seed);

        let mut depths = Vec::new();
        for &algorithm in &engines {
            let config = SolverConfig {
                algorithm,
                max_depth: DEFAULT_MAX_DEPTH,
            };
            match solve(&board, &config) {
                Ok(solution) => {
                    println!(
                        "  Engine: {:<10}, Moves: {:<3}, Nodes: {:<8}, Time: {:.3}s",
                        format!("{:?}", algorithm),
                        solution.stats.depth,
                        solution.stats.nodes_expanded,
                        solution.stats.elapsed.as_secs_f64()
                    );
                    depths.push(solution.stats.depth);
                    all_stats.entry(algorithm).or_default().push(solution.stats);
                }
                Err(e) => eprintln!("  Engine {:?} failed on board {}: {}", algorithm, board_idx, e),
            }
        }

        if depths.windows(2).any(|w| w[0] != w[1]) {
            eprintln!("Warning: engines disagree on solution length for board {}: {:?}", board_idx, depths);
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", NUM_BOARDS_FOR_EVALUATION);
    println!("\n--- Averages ---");

    for algorithm in engines {
        let Some(stats) = all_stats.get(&algorithm).filter(|s| !s.is_empty()) else {
            println!("Engine {:?}: No results recorded.", algorithm);
            continue;
        };
        let count = stats.len() as f64;
        let avg_depth = stats.iter().map(|s| s.depth as f64).sum::<f64>() / count;
        let avg_nodes = stats.iter().map(|s| s.nodes_expanded as f64).sum::<f64>() / count;
        let avg_secs = stats.iter().map(|s| s.elapsed.as_secs_f64()).sum::<f64>() / count;
        println!(
            "Engine {:<10}: Moves = {:.2}, Nodes = {:.0}, Time = {:.4}s",
            format!("{:?}", algorithm),
            avg_depth,
            avg_nodes,
            avg_secs
        );
    }
}
