use std::env;
use std::process::ExitCode;

use env_logger::Env;
use log::error;

use pentomino_dlx::{cli, render, solve};

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info")); // RUST_LOG

    let selected = cli::parse_selection(env::args().skip(1));

    let outcome = match solve(&selected) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match &outcome.grid {
        Some(grid) => {
            println!("Solution found!");
            print!("{}", render::format_grid(grid));
        }
        None => {
            println!("No solution found.");
        }
    }
    println!("boardField is 5, {}", outcome.piece_count);

    ExitCode::SUCCESS
}
