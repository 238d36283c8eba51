//! Board model for 3x3 tic-tac-toe
//!
//! A [`Board`] is a small `Copy` value. Nothing in this crate mutates a board
//! in place: every transition produces a fresh board.

use std::fmt;
use std::str::FromStr;

use crate::{MinimaxError, Result};

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 3;

/// Contents of a single board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Returns the player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Returns true if no mark has been placed here
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    fn from_glyph(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// Players in tic-tac-toe
///
/// X always moves first and maximizes utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the other player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the cell value this player places
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().glyph())
    }
}

/// A (row, column) position to place the current player's mark
///
/// Coordinates are only checked against a specific board; see
/// [`Board::is_move_legal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Creates a move targeting the given row and column
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major position index (0-8), or `None` when the move is off the board
    pub fn index(&self) -> Option<usize> {
        if self.row < BOARD_SIZE && self.col < BOARD_SIZE {
            Some(self.row * BOARD_SIZE + self.col)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Tic-Tac-Toe board state
///
/// The grid is the whole state. Whose turn it is, the winner and the set of
/// legal moves are all derived from the cells on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Returns the starting board: every cell empty
pub fn initial_state() -> Board {
    Board::new()
}

impl Board {
    /// Creates a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit rows
    ///
    /// Any grid is accepted, including ones no real game could reach.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Returns the rows of the board
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the cell at the given position, or `None` when out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Iterates over all cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Exact base-3 encoding of the nine cells
    ///
    /// Distinct boards always produce distinct keys.
    pub fn state_key(&self) -> u64 {
        self.iter_cells().fold(0, |key, cell| {
            let digit = match cell {
                Cell::Empty => 0,
                Cell::X => 1,
                Cell::O => 2,
            };
            key * 3 + digit
        })
    }

    /// Returns a copy of this board with one cell replaced
    pub(crate) fn with_cell(&self, position: Move, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[position.row][position.col] = cell;
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for (index, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", index)?;
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = MinimaxError;

    /// Parses three rows of three cells separated by `/` or newlines
    ///
    /// ```
    /// use tictactoe_minimax::{Board, Cell};
    ///
    /// let board: Board = "XX./O../...".parse().unwrap();
    /// assert_eq!(board.cell(0, 1), Some(Cell::X));
    /// assert_eq!(board.cell(1, 0), Some(Cell::O));
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(MinimaxError::ParseBoard(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let parsed: Vec<Cell> = row
                .chars()
                .map(|c| {
                    Cell::from_glyph(c).ok_or_else(|| {
                        MinimaxError::ParseBoard(format!("unexpected character {:?}", c))
                    })
                })
                .collect::<Result<_>>()?;

            if parsed.len() != BOARD_SIZE {
                return Err(MinimaxError::ParseBoard(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    parsed.len(),
                    BOARD_SIZE
                )));
            }
            cells[r].copy_from_slice(&parsed);
        }

        Ok(Board { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert!(board.iter_cells().all(Cell::is_empty));
        assert_eq!(board, Board::default());
        assert_eq!(board.state_key(), 0);
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = initial_state();
        assert_eq!(board.cell(3, 0), None);
        assert_eq!(board.cell(0, 3), None);
        assert_eq!(board.cell(2, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let board = initial_state();
        let next = board.with_cell(Move::new(1, 2), Cell::O);
        assert_eq!(board.cell(1, 2), Some(Cell::Empty));
        assert_eq!(next.cell(1, 2), Some(Cell::O));
    }

    #[test]
    fn test_state_keys_are_distinct() {
        let a: Board = "X../.../...".parse().unwrap();
        let b: Board = "O../.../...".parse().unwrap();
        let c: Board = ".../.../..X".parse().unwrap();
        assert_ne!(a.state_key(), b.state_key());
        assert_ne!(a.state_key(), c.state_key());
        assert_ne!(b.state_key(), c.state_key());
    }

    #[test]
    fn test_parse_accepts_newlines_and_spaces() {
        let board: Board = "X_O\n.X.\n--O\n".parse().unwrap();
        assert_eq!(board.cell(0, 1), Some(Cell::Empty));
        assert_eq!(board.cell(0, 2), Some(Cell::O));
        assert_eq!(board.cell(1, 1), Some(Cell::X));
        assert_eq!(board.cell(2, 2), Some(Cell::O));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        let indented: Board = "XX.\n  O..\n...".parse().unwrap();
        assert_eq!(indented, "XX./O../...".parse().unwrap());

        let padded: Board = "\nXX.\nO..\n...\n   ".parse().unwrap();
        assert_eq!(padded, indented);

        let crlf: Board = "XX.\r\nO..\r\n...\r\n".parse().unwrap();
        assert_eq!(crlf, indented);

        // Blanks inside a row are not cells
        assert!(matches!(
            "X O/.../...".parse::<Board>(),
            Err(MinimaxError::ParseBoard(_))
        ));
    }

    #[test]
    fn test_move_index_is_none_off_board() {
        assert_eq!(Move::new(0, 0).index(), Some(0));
        assert_eq!(Move::new(2, 2).index(), Some(8));
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(0, 3).index(), None);
        assert_eq!(Move::new(usize::MAX, 0).index(), None);
        assert_eq!(Move::new(0, usize::MAX).index(), None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "XX/.../...".parse::<Board>(),
            Err(MinimaxError::ParseBoard(_))
        ));
        assert!(matches!(
            "XXX/.../".parse::<Board>(),
            Err(MinimaxError::ParseBoard(_))
        ));
        assert!(matches!(
            "XQX/.../...".parse::<Board>(),
            Err(MinimaxError::ParseBoard(_))
        ));
    }

    #[test]
    fn test_display_renders_grid() {
        let board: Board = "X../.O./...".parse().unwrap();
        let rendered = board.to_string();
        assert!(rendered.starts_with("  0 1 2\n"));
        assert!(rendered.contains("0 X . . \n"));
        assert!(rendered.contains("1 . O . \n"));
    }
}
