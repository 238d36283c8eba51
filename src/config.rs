//! Configuration options for the minimax search
//!
//! None of these options change the value the search assigns to a position.
//! They trade speed for memory, or decide which of several equally good moves
//! is returned.

/// How to choose among moves that share the best value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Return the first optimal move in legal-move order
    ///
    /// For tic-tac-toe boards that is row-major order, so the result is
    /// deterministic.
    FirstFound,

    /// Return a uniformly random optimal move
    ///
    /// Every root move must then be searched with a full window, so this is
    /// slower than `FirstFound` when pruning is enabled.
    Random,
}

/// Configuration for the minimax search
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use tictactoe_minimax::{SearchConfig, config::TieBreak};
///
/// let config = SearchConfig::default()
///     .with_alpha_beta(false)
///     .with_transpositions(true)
///     .with_tie_break(TieBreak::Random);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Whether to prune branches that cannot affect the result
    pub alpha_beta: bool,

    /// Whether to use transposition tables
    ///
    /// Transposition tables reuse exact values for states reached through
    /// different move orders. Only states exposing a key are stored.
    pub use_transpositions: bool,

    /// Policy for choosing among equally good moves
    pub tie_break: TieBreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            alpha_beta: true,
            use_transpositions: false,
            tie_break: TieBreak::FirstFound,
        }
    }
}

impl SearchConfig {
    /// Plain exhaustive minimax: no pruning, no table
    pub fn exhaustive() -> Self {
        SearchConfig {
            alpha_beta: false,
            ..Self::default()
        }
    }

    /// Sets whether to use alpha-beta pruning
    pub fn with_alpha_beta(mut self, alpha_beta: bool) -> Self {
        self.alpha_beta = alpha_beta;
        self
    }

    /// Sets whether to use transposition tables
    pub fn with_transpositions(mut self, use_transpositions: bool) -> Self {
        self.use_transpositions = use_transpositions;
        self
    }

    /// Sets the tie-break policy
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
