#![doc = include_str!("../README.md")]

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::{Args, Parser, Subcommand};
use cpu_time::ProcessTime;
use fsum::FSum;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use npuzzle::{Board, BoardError, Solver, SolverConfig};
use npuzzle::board::scramble::scrambled;
use npuzzle::io::{read_board, Report};
use npuzzle::stats::SearchAllStats;

/// Solves N x N sliding puzzles and benchmarks the solver.
#[derive(Parser)]
#[command(name = "npuzzle_bench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve boards read from files and print the solutions.
    Solve {
        /// Files with boards: the dimension followed by tiles in row-major order, 0 for the blank.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        search: SearchArgs,
        /// Print search statistics to stderr.
        #[arg(long)]
        stats: bool,
    },
    /// Solve random boards and report the average search effort.
    Bench(BenchArgs),
}

#[derive(Args, Copy, Clone)]
struct SearchArgs {
    /// Never expand the same board twice.
    #[arg(long)]
    closed_set: bool,
}

impl From<SearchArgs> for SolverConfig {
    fn from(args: SearchArgs) -> Self { SolverConfig::with_closed_set(args.closed_set) }
}

#[derive(Args)]
struct BenchArgs {
    /// Board dimension.
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    dimension: u16,
    /// Number of boards to solve.
    #[arg(short, long, default_value_t = 1000)]
    count: usize,
    /// Seed of the random number generator.
    #[arg(long, default_value_t = 123)]
    seed: u64,
    /// Number of random slides made from the goal to obtain each board.
    #[arg(long, default_value_t = 1000)]
    scramble: usize,
    /// Solve twins of the scrambled boards, which have no solution.
    #[arg(long)]
    unsolvable: bool,
    #[command(flatten)]
    search: SearchArgs,
}

// https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance
fn sdev(sum: u64, sqrsum: u64, n: u64) -> f64 {
    if n < 2 { return 0.0; }
    ((sqrsum as f64 - (sum as f64 * sum as f64) / n as f64) / (n-1) as f64).sqrt()
}

fn load_board(path: &Path) -> Result<Board, BoardError> {
    read_board(BufReader::new(File::open(path)?))
}

fn run_solve(files: &[PathBuf], config: SolverConfig, print_stats: bool) -> ExitCode {
    let mut result = ExitCode::SUCCESS;
    for file in files {
        let board = match load_board(file) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("{}: {}", file.display(), e);
                result = ExitCode::FAILURE;
                continue;
            }
        };
        if files.len() > 1 { println!("{}:", file.display()); }
        let mut stats = SearchAllStats::default();
        let solver = Solver::with_stats(board, config, &mut stats);
        print!("{}", Report(&solver));
        if print_stats {
            eprintln!("{}: {} nodes expanded ({} by twin search), {} generated.",
                      file.display(), stats.expanded, stats.twin_expanded, stats.generated);
        }
    }
    result
}

fn run_bench(args: &BenchArgs) -> io::Result<bool> {
    if args.unsolvable && args.dimension < 2 {
        eprintln!("--unsolvable requires dimension of at least 2, since a smaller board is its own twin.");
        return Ok(false);
    }
    let config = SolverConfig::from(args.search);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut total_stats = SearchAllStats::default();
    let mut total_expanded_sqr = 0u64;
    let mut seconds = Vec::with_capacity(args.count);
    let mut moves = Vec::with_capacity(args.count);
    let mut correct = true;
    println!("{} boards {}x{}, {} random slides each, closed set {}",
             args.count, args.dimension, args.dimension, args.scramble, if config.closed_set { "on" } else { "off" });
    for index in 0..args.count {
        let mut board = scrambled(args.dimension as usize, args.scramble, &mut rng);
        if args.unsolvable { board = board.twin(); }
        let manhattan = board.manhattan();
        let mut stats = SearchAllStats::default();
        let start_moment = ProcessTime::try_now()?;
        let solver = Solver::with_stats(board, config, &mut stats);
        seconds.push(start_moment.try_elapsed()?.as_secs_f64());
        total_stats += stats;
        total_expanded_sqr += stats.expanded * stats.expanded;
        if solver.is_solvable() == args.unsolvable {
            eprintln!("wrong answer for board {}: solvable = {}\n{}", index, solver.is_solvable(), solver.initial());
            correct = false;
        }
        if let Some(m) = solver.moves() {
            if m < manhattan {
                eprintln!("board {} solved in {} moves, below its Manhattan distance {}\n{}", index, m, manhattan, solver.initial());
                correct = false;
            }
            moves.push(m as f64);
        }
    }
    let n = args.count.max(1) as f64;
    println!("  {:.0} nodes/case expanded (sdev {:.1}, {:.0} by twin search), {:.0} nodes/case generated,",
             total_stats.expanded as f64 / n,
             sdev(total_stats.expanded, total_expanded_sqr, args.count as u64),
             total_stats.twin_expanded as f64 / n,
             total_stats.generated as f64 / n);
    if !moves.is_empty() {
        println!("  {:.2} moves/case,", FSum::with_all(moves.iter().copied()).value() / moves.len() as f64);
    }
    println!("  {} sec/case.", FSum::with_all(seconds.iter().copied()).value() / n);
    Ok(correct)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve { files, search, stats } => run_solve(&files, search.into(), stats),
        Command::Bench(args) => match run_bench(&args) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("Getting process time failed: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}
