//! Traits defining game state representation for minimax search.
//!
//! The GameState trait is the primary interface that must be implemented for any
//! two-player, zero-sum, perfect-information game searched by [`Minimax`](crate::Minimax).
//! The tic-tac-toe [`Board`](crate::Board) is the reference implementation.

use std::fmt::Debug;

use crate::board::{self, Board, Move};
use crate::Result;

/// Game-theoretic value of a state from the maximizing player's perspective.
///
/// For tic-tac-toe this is always one of `-1`, `0` or `1`.
pub type Utility = i32;

/// Trait for actions that can be taken in a game
///
/// Actions represent the moves or decisions that can be made in a game.
/// The search only clones and compares them, so the trait has no methods.
pub trait Action: Clone + Debug + PartialEq + Send + Sync {}

/// Trait for players in a game
///
/// Exactly one of the two players maximizes utility; the other minimizes it.
pub trait Player: Clone + Debug + PartialEq + Send + Sync {
    /// Returns true for the player whose wins score positive utility
    fn is_maximizer(&self) -> bool;
}

/// Trait defining the game state interface required for minimax
///
/// States are values: applying an action yields a new state and leaves the
/// original untouched, so sibling branches of the search never interfere.
pub trait GameState: Clone + Send + Sync {
    /// The type of actions that can be taken in this game
    type Action: Action;

    /// The type of players in this game
    type Player: Player;

    /// Returns the list of legal actions from this state
    ///
    /// The order of this list is the order in which the search visits
    /// children, and therefore decides which of several equally good actions
    /// is reported first.
    ///
    /// # Example
    ///
    /// ```
    /// use tictactoe_minimax::{initial_state, GameState};
    ///
    /// let board = initial_state();
    /// assert_eq!(board.get_legal_actions().len(), 9);
    /// ```
    fn get_legal_actions(&self) -> Vec<Self::Action>;

    /// Applies an action to the current state, returning the new state
    ///
    /// # Errors
    ///
    /// Returns [`MinimaxError::InvalidMove`](crate::MinimaxError::InvalidMove)
    /// if the action is not legal in this state.
    fn apply_action(&self, action: &Self::Action) -> Result<Self>;

    /// Returns true if this state is terminal (game over)
    ///
    /// Terminal states should return an empty list from `get_legal_actions()`,
    /// or at least never be expanded by the search.
    fn is_terminal(&self) -> bool;

    /// Returns the utility of this state for the maximizing player
    ///
    /// Only meaningful on terminal states; non-terminal states may return any
    /// neutral value.
    fn get_utility(&self) -> Utility;

    /// Returns the player whose turn it is in this state
    ///
    /// `None` when no player is to move (for example a full board).
    fn get_current_player(&self) -> Option<Self::Player>;

    /// Returns an exact key identifying this state, used for transposition tables
    ///
    /// Two states with the same key must be interchangeable for the search.
    /// The default returns `None`, which keeps the state out of any table.
    fn state_key(&self) -> Option<u64> {
        None
    }
}

impl Action for Move {}

impl Player for board::Player {
    fn is_maximizer(&self) -> bool {
        *self == board::Player::X
    }
}

impl GameState for Board {
    type Action = Move;
    type Player = board::Player;

    fn get_legal_actions(&self) -> Vec<Self::Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.legal_moves()
    }

    fn apply_action(&self, action: &Self::Action) -> Result<Self> {
        crate::transition::apply_move(self, *action)
    }

    fn is_terminal(&self) -> bool {
        Board::is_terminal(self)
    }

    fn get_utility(&self) -> Utility {
        self.utility()
    }

    fn get_current_player(&self) -> Option<Self::Player> {
        self.current_player()
    }

    fn state_key(&self) -> Option<u64> {
        Some(Board::state_key(self))
    }
}
