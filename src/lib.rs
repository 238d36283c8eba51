//! # tictactoe-minimax
//!
//! Optimal tic-tac-toe play computed by exhaustive minimax search.
//!
//! This crate provides pure board-state transition logic for 3x3 tic-tac-toe
//! and a decision function that, for any non-terminal board, returns a move
//! guaranteeing the player to move at least a draw against optimal play.
//!
//! ## Features
//!
//! - Immutable `Copy` boards: every move produces a new board
//! - State inspection: turn owner, legal moves, winner, terminality, utility
//! - Mutually recursive `max_value` / `min_value` evaluation
//! - Optional alpha-beta pruning and transposition table, neither of which
//!   changes any value the search reports
//! - Deterministic or random tie-breaking among equally good moves
//! - A generic [`GameState`] trait, so the engine can search other games
//!
//! ## Basic Usage
//!
//! ```
//! use tictactoe_minimax::{best_move, initial_state, Move, Player};
//!
//! fn main() -> Result<(), tictactoe_minimax::MinimaxError> {
//!     let board = initial_state();
//!     assert_eq!(board.current_player(), Some(Player::X));
//!
//!     // X opens in the centre; O answers optimally.
//!     let board = board.apply_move(Move::new(1, 1))?;
//!     let reply = best_move(&board)?;
//!     let board = board.apply_move(reply)?;
//!
//!     assert!(!board.is_terminal());
//!     println!("{}", board);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuring the Search
//!
//! ```
//! use tictactoe_minimax::{initial_state, Minimax, SearchConfig};
//!
//! fn main() -> Result<(), tictactoe_minimax::MinimaxError> {
//!     let config = SearchConfig::exhaustive().with_transpositions(true);
//!     let mut search = Minimax::new(config);
//!
//!     // Perfect play from the empty board is a draw.
//!     let (final_board, moves) = search.play_out(&initial_state())?;
//!     assert_eq!(final_board.utility(), 0);
//!     assert_eq!(moves.len(), 9);
//!
//!     println!("{}", search.get_statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! The utility of a finished game is fixed from X's perspective: 1 when X has
//! won, -1 when O has won, 0 for a draw. X therefore maximizes and O
//! minimizes.
//!
//! 1. **max_value**: a terminal board scores its utility; otherwise the
//!    maximum over all legal moves of `min_value` of the resulting board.
//!
//! 2. **min_value**: the mirror image, taking the minimum of `max_value`.
//!
//! 3. **best_move**: X picks the move whose resulting board has the highest
//!    `min_value`, O the one with the lowest `max_value`.
//!
//! The full game tree has fewer than 9! leaves, so the search needs no depth
//! limit or heuristic.

pub mod board;
pub mod config;
pub mod game_state;
pub mod inspector;
pub mod minimax;
pub mod stats;
pub mod transition;

pub use board::{initial_state, Board, Cell, Move, Player, BOARD_SIZE};
pub use config::{SearchConfig, TieBreak};
pub use game_state::{Action, GameState, Utility};
pub use inspector::{current_player, is_move_legal, is_terminal, legal_moves, utility, winner};
pub use minimax::{best_move, max_value, min_value, Minimax};
pub use stats::SearchStatistics;
pub use transition::apply_move;

/// Error types for board transitions and search
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MinimaxError {
    /// The move targets an occupied cell or lies off the board
    #[error("Invalid move at row {row}, column {col}")]
    InvalidMove { row: usize, col: usize },

    /// The game is over, so there is no move to choose
    #[error("No legal moves available from current state")]
    NoLegalMoves,

    /// Text could not be read as a 3x3 board
    #[error("Invalid board: {0}")]
    ParseBoard(String),
}

/// Result type for minimax operations
pub type Result<T> = std::result::Result<T, MinimaxError>;
