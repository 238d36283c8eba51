//! Optimal self-play from a given position
//!
//! Usage: `cargo run --example self_play -- "XX./O../..."`
//! With no argument the game starts from the empty board.

use std::env;

use tictactoe_minimax::{initial_state, Board, Minimax, SearchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let start: Board = match env::args().nth(1) {
        Some(text) => text.parse()?,
        None => initial_state(),
    };

    println!("Starting position:");
    println!("{}", start);

    if start.is_terminal() {
        println!("The game is already over.");
        return Ok(());
    }

    let mut search = Minimax::new(SearchConfig::default().with_transpositions(true));

    for (mv, value) in search.evaluate_moves(&start)? {
        println!("  {} -> {:+}", mv, value);
    }
    println!();

    let (end, moves) = search.play_out(&start)?;
    let mut board = start;
    for mv in &moves {
        let mover = board.current_player().map(|p| p.to_string()).unwrap_or_default();
        board = board.apply_move(*mv)?;
        println!("{} plays {}", mover, mv);
        println!("{}", board);
    }

    match end.winner() {
        Some(winner) => println!("Player {} wins.", winner),
        None => println!("Draw."),
    }
    println!("{}", search.get_statistics().summary());

    Ok(())
}
