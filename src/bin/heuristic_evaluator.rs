use clap::Parser;
use npuzzle_solver::engine::Board;
use npuzzle_solver::heuristics::{manhattan_distance, misplaced_tiles};
use npuzzle_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (3 rows of 3 cells; `_` or `0` for the blank)
    board_file: PathBuf,

    /// Optional goal board file; defaults to the ordered configuration
    #[clap(short, long)]
    goal_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let board = read_board_file(&args.board_file).expect(&format!(
        "Failed to read board from file: {}",
        args.board_file.display()
    ));
    let goal = match &args.goal_file {
        Some(path) => read_board_file(path)
            .expect(&format!("Failed to read goal from file: {}", path.display())),
        None => Board::goal(),
    };

    println!("Board:\n{}\n", board);
    println!("Goal:\n{}\n", goal);

    println!("Manhattan distance: {}", manhattan_distance(&board, &goal));
    println!("Misplaced tiles:    {}", misplaced_tiles(&board, &goal));

    if board.is_reachable_from(&goal) {
        println!("Parity: the goal is reachable from this configuration.");
    } else {
        println!("Parity: the goal is NOT reachable from this configuration.");
    }
}
