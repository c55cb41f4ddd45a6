use clap::Parser;
use npuzzle_solver::engine::Board;
use npuzzle_solver::utils::board_to_str_rows;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for the deterministic scramble walk
    #[clap(short, long)]
    seed: u64,

    /// Number of random blank moves to apply
    #[clap(long, default_value_t = 40)]
    steps: usize,

    /// How many boards to emit, using seeds seed, seed+1, ...
    #[clap(short, long, default_value_t = 1)]
    count: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let goal = Board::goal();
    for i in 0..args.count {
        let seed = args.seed + i;
        let board = goal.scrambled_with_seed(seed, args.steps);

        if args.count > 1 {
            // Keep stdout parseable by the other binaries; the seed marker
            // goes to stderr.
            eprintln!("seed {}", seed);
        }
        for row in board_to_str_rows(&board) {
            println!("{}", row);
        }
        println!();
    }
}
