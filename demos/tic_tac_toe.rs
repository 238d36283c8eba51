//! Tic-Tac-Toe against the minimax engine
//!
//! You play X, the engine plays O. Run with `RUST_LOG=debug` to see search
//! statistics for every engine move.

use std::io::{self, Write};

use tictactoe_minimax::{initial_state, Minimax, Move, Player, SearchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("Minimax Tic-Tac-Toe");
    println!("===================");
    println!();

    let mut board = initial_state();
    let mut engine = Minimax::new(SearchConfig::default().with_transpositions(true));

    // Main game loop
    while !board.is_terminal() {
        println!("{}", board);

        if board.current_player() == Some(Player::X) {
            print!("Your move (enter row column, e.g. '1 2'): ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                println!();
                return Ok(());
            }

            let coords: Vec<usize> = input
                .split_whitespace()
                .filter_map(|s| s.parse::<usize>().ok())
                .collect();

            if coords.len() != 2 {
                println!("Enter row and column (0-2).");
                continue;
            }

            match board.apply_move(Move::new(coords[0], coords[1])) {
                Ok(next) => board = next,
                Err(e) => println!("{}. Try again.", e),
            }
        } else {
            let mv = engine.best_move(&board)?;
            println!("Engine plays {}", mv);
            board = board.apply_move(mv)?;
        }
    }

    // Display final state
    println!("{}", board);

    match board.winner() {
        Some(winner) => println!("Player {} wins!", winner),
        None => println!("The game is a draw!"),
    }

    Ok(())
}
