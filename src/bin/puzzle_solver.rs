use clap::Parser;
use sliding_puzzle::engine::Board;
use sliding_puzzle::solver::{solve, Algorithm, SolverConfig, DEFAULT_MAX_DEPTH};
use sliding_puzzle::utils::{board_from_str, significant_lines};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a board file: one row per line, whitespace-separated, 0 for the blank.
    /// The board size is taken from the number of rows. When omitted, a
    /// scrambled board is generated instead.
    board_file: Option<PathBuf>,

    /// Side length of the generated board (2 to 5)
    #[clap(short, long, default_value_t = 4)]
    size: usize,

    /// Number of random blank moves used to scramble a generated board
    #[clap(long, default_value_t = 20)]
    scramble: usize,

    /// Seed for the generated board; random when omitted
    #[clap(long)]
    seed: Option<u64>,

    /// Search engine to use
    #[clap(short, long, value_enum, default_value_t = Algorithm::Auto)]
    algorithm: Algorithm,

    /// Largest depth bound tried by iterative deepening
    #[clap(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,
}

/// Where the initial board comes from.
enum Source {
    File(String),
    Scramble { moves: usize, seed: Option<u64> },
}

fn load_board<const N: usize>(source: &Source) -> Result<Board<N>, String> {
    match source {
        Source::File(text) => {
            board_from_str(text).map_err(|e| format!("Invalid board format: {}", e))
        }
        Source::Scramble { moves, seed: Some(seed) } => Ok(Board::scrambled_with_seed(*moves, *seed)),
        Source::Scramble { moves, seed: None } => {
            Ok(Board::scrambled(*moves, &mut rand::thread_rng()))
        }
    }
}

fn run<const N: usize>(source: &Source, config: &SolverConfig) -> Result<(), String> {
    let board = load_board::<N>(source)?;
    println!("Initial board state:\n{}\n", board);
    println!(
        "Searching with {:?} (max depth {})...\n",
        config.algorithm.for_size(N),
        config.max_depth
    );

    let solution = solve(&board, config).map_err(|e| e.to_string())?;

    println!("Solution found!");
    println!("Number of moves: {}", solution.stats.depth);
    println!("Nodes explored: {}", solution.stats.nodes_expanded);
    println!("Time taken: {:.3} seconds\n", solution.stats.elapsed.as_secs_f64());

    if solution.moves.is_empty() {
        println!("Board is already solved.");
        return Ok(());
    }

    let path: Vec<String> = solution.moves.iter().map(|mv| mv.to_string()).collect();
    println!("Solution path:\n{}\n", path.join(" -> "));

    let mut current = board;
    for (i, &mv) in solution.moves.iter().enumerate() {
        current = current
            .apply_move(mv)
            .ok_or_else(|| format!("Move {} ({}) is illegal; solver produced a bad path", i + 1, mv))?;
        println!("Move {}: {}\n{}\n", i + 1, mv, current);
    }
    Ok(())
}

fn dispatch(size: usize, source: &Source, config: &SolverConfig) -> Result<(), String> {
    match size {
        2 => run::<2>(source, config),
        3 => run::<3>(source, config),
        4 => run::<4>(source, config),
        5 => run::<5>(source, config),
        _ => Err(format!("Unsupported board size {} (expected 2 to 5)", size)),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = SolverConfig {
        algorithm: args.algorithm,
        max_depth: args.max_depth,
    };

    let result = match &args.board_file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))
            .and_then(|text| {
                let size = significant_lines(&text).len();
                println!("Loaded board from {}\n", path.display());
                dispatch(size, &Source::File(text), &config)
            }),
        None => dispatch(
            args.size,
            &Source::Scramble {
                moves: args.scramble,
                seed: args.seed,
            },
            &config,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
