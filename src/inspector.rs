//! Derived facts about a board
//!
//! Everything here is a pure function of the grid: turn owner, legal moves,
//! winner, terminality and utility. Each query is available both as a method
//! on [`Board`] and as a free function for callers that prefer that shape.

use crate::board::{Board, Cell, Move, Player, BOARD_SIZE};
use crate::game_state::Utility;

/// Every winning line, checked rows first, then columns, then diagonals
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

impl Board {
    /// Number of cells holding the given mark
    pub fn count(&self, mark: Cell) -> usize {
        self.iter_cells().filter(|&cell| cell == mark).count()
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.iter_cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns the player who moves next
    ///
    /// X always opens. Returns `None` only when the marks are balanced and the
    /// board is full; no turn exists there.
    pub fn current_player(&self) -> Option<Player> {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);

        if x_count > o_count {
            Some(Player::O)
        } else if x_count < o_count {
            Some(Player::X)
        } else if x_count + o_count < BOARD_SIZE * BOARD_SIZE {
            Some(Player::X)
        } else {
            None
        }
    }

    /// Returns every empty position in row-major order
    pub fn legal_moves(&self) -> Vec<Move> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Move::new(row, col)))
            .filter(|mv| self.is_move_legal(mv))
            .collect()
    }

    /// True if the move is on the board and targets an empty cell
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        matches!(self.cell(mv.row, mv.col), Some(Cell::Empty))
    }

    /// Returns the owner of the first completed line, if any
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.cells_at(row, col));
            if a == b && b == c {
                a.player()
            } else {
                None
            }
        })
    }

    /// True once someone has won or no empty cell remains
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.iter_cells().all(|cell| !cell.is_empty())
    }

    /// 1 if X has won, -1 if O has won, 0 otherwise
    ///
    /// Non-terminal boards also report 0, so only terminal boards carry a
    /// game-theoretic meaning.
    pub fn utility(&self) -> Utility {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    fn cells_at(&self, row: usize, col: usize) -> Cell {
        self.rows()[row][col]
    }
}

/// Returns the player who moves next on `board`
pub fn current_player(board: &Board) -> Option<Player> {
    board.current_player()
}

/// Returns every empty position on `board`
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board.legal_moves()
}

/// Returns the winner of `board`, if any
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// True if the game on `board` is over
pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// Returns the utility of `board` from X's perspective
pub fn utility(board: &Board) -> Utility {
    board.utility()
}

/// True if `mv` can be played on `board`
pub fn is_move_legal(board: &Board, mv: &Move) -> bool {
    board.is_move_legal(mv)
}
