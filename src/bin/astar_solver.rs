use clap::Parser;
use npuzzle_solver::engine::Board;
use npuzzle_solver::solver::solve_astar;
use npuzzle_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the start board file (3 rows of 3 cells; `_` or `0` for the blank)
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

    let start = read_board_file(&args.board_file).expect(&format!(
        "Failed to read board from file: {}",
        args.board_file.display()
    ));
    let goal = match &args.goal_file {
        Some(path) => read_board_file(path)
            .expect(&format!("Failed to read goal from file: {}", path.display())),
        None => Board::goal(),
    };

    println!("Initial board state:\n{}\n", start);
    println!("Goal board state:\n{}\n", goal);
    println!("Searching...\n");

    if let Some(solution) = solve_astar(&start, &goal) {
        println!("Solution found in {} moves:", solution.moves.len());
        if solution.moves.is_empty() {
            println!("  The start already matches the goal.");
        } else {
            for (i, mv) in solution.moves.iter().enumerate() {
                println!("  Move {}: {}", i + 1, mv);
            }
        }
        println!();
        for (i, board) in solution.path.iter().enumerate() {
            println!("Step {}:\n{}\n", i, board);
        }
        println!(
            "Expanded {} states (generated {} frontier nodes).",
            solution.expanded, solution.generated
        );
    } else {
        println!("No solution: the goal is unreachable from this configuration.");
    }
}
