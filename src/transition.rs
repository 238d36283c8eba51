//! Board transitions
//!
//! The only way to get from one board to the next.

use crate::board::{Board, Move};
use crate::{MinimaxError, Result};

/// Returns the board that results from playing `mv` on `board`
///
/// The mark placed is the board's current player. `board` itself is never
/// modified.
///
/// # Errors
///
/// [`MinimaxError::InvalidMove`] when the target is occupied or off the board.
///
/// ```
/// use tictactoe_minimax::{apply_move, initial_state, Cell, Move};
///
/// let board = initial_state();
/// let next = apply_move(&board, Move::new(1, 1)).unwrap();
/// assert_eq!(next.cell(1, 1), Some(Cell::X));
/// assert_eq!(board.cell(1, 1), Some(Cell::Empty));
/// ```
pub fn apply_move(board: &Board, mv: Move) -> Result<Board> {
    let invalid = MinimaxError::InvalidMove {
        row: mv.row,
        col: mv.col,
    };

    if !board.is_move_legal(&mv) {
        return Err(invalid);
    }
    let player = board.current_player().ok_or(invalid)?;

    Ok(board.with_cell(mv, player.mark()))
}

impl Board {
    /// Method form of [`apply_move`]
    pub fn apply_move(&self, mv: Move) -> Result<Board> {
        apply_move(self, mv)
    }
}
