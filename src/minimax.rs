//! Main implementation of the minimax search
//!
//! Two cooperating evaluators walk the game tree: `max_value` scores a state
//! where the maximizing player moves, `min_value` one where the minimizing
//! player moves, and each recurses into the other. Optional alpha-beta
//! pruning and a transposition table speed the walk up without changing any
//! value it returns.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::time::Instant;

use log::{debug, trace};
use rand::seq::SliceRandom;

use crate::{
    config::{SearchConfig, TieBreak},
    game_state::{GameState, Player, Utility},
    stats::SearchStatistics,
    MinimaxError, Result,
};

/// Bounds outside which a value no longer matters to any ancestor
#[derive(Debug, Clone, Copy)]
struct Window {
    alpha: Utility,
    beta: Utility,
}

impl Window {
    fn full() -> Self {
        Window {
            alpha: Utility::MIN,
            beta: Utility::MAX,
        }
    }

    /// A fail-soft result strictly inside the window is exact
    fn is_exact(&self, value: Utility) -> bool {
        self.alpha < value && value < self.beta
    }
}

/// Exhaustive minimax searcher
///
/// A searcher can be reused across many positions; its transposition table
/// (when enabled) persists between calls, while statistics are reset at the
/// start of every public search method.
///
/// The table is never evicted: it gains an entry for every distinct state
/// the searcher has valued and keeps them until
/// [`clear_transpositions`](Minimax::clear_transpositions) is called or the
/// searcher is dropped. Tic-tac-toe caps it at a few thousand entries; for
/// larger games, clear it between unrelated searches.
pub struct Minimax<S: GameState> {
    /// Configuration for the search
    config: SearchConfig,

    /// Statistics gathered during the last search
    statistics: SearchStatistics,

    /// Exact values keyed by `GameState::state_key` and whether the
    /// maximizer was to move. Unbounded; see the struct docs.
    table: HashMap<(u64, bool), Utility>,

    _state: PhantomData<S>,
}

impl<S: GameState> Minimax<S> {
    /// Creates a new searcher with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        Minimax {
            config,
            statistics: SearchStatistics::new(),
            table: HashMap::new(),
            _state: PhantomData,
        }
    }

    /// Returns the configuration in use
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the search statistics
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Drops every cached value
    pub fn clear_transpositions(&mut self) {
        self.table.clear();
    }

    /// Value of `state` assuming the maximizing player moves next
    pub fn max_value(&mut self, state: &S) -> Result<Utility> {
        let start = self.begin();
        let value = self.max_value_within(state, Window::full(), 0);
        self.finish(start);
        value
    }

    /// Value of `state` assuming the minimizing player moves next
    pub fn min_value(&mut self, state: &S) -> Result<Utility> {
        let start = self.begin();
        let value = self.min_value_within(state, Window::full(), 0);
        self.finish(start);
        value
    }

    /// Returns an optimal action for the player to move
    ///
    /// The maximizing player gets an action whose reply value is highest, the
    /// minimizing player one whose reply value is lowest. Ties are settled by
    /// the configured [`TieBreak`].
    ///
    /// # Errors
    ///
    /// [`MinimaxError::NoLegalMoves`] if `state` is terminal or has no player
    /// to move.
    pub fn best_move(&mut self, state: &S) -> Result<S::Action> {
        let start = self.begin();
        let result = self.best_move_inner(state);
        self.finish(start);

        if let Ok(action) = &result {
            debug!(
                "Chose {:?} after {} nodes\n{}",
                action,
                self.statistics.nodes_visited,
                self.statistics.summary()
            );
        }
        result
    }

    /// Every legal action paired with its exact minimax value, in action order
    ///
    /// # Errors
    ///
    /// [`MinimaxError::NoLegalMoves`] if `state` is terminal.
    pub fn evaluate_moves(&mut self, state: &S) -> Result<Vec<(S::Action, Utility)>> {
        let start = self.begin();
        let result = self.evaluate_moves_inner(state);
        self.finish(start);
        result
    }

    /// All actions that achieve the best value for the player to move
    ///
    /// # Errors
    ///
    /// [`MinimaxError::NoLegalMoves`] if `state` is terminal.
    pub fn optimal_moves(&mut self, state: &S) -> Result<Vec<S::Action>> {
        let start = self.begin();
        let result = self.optimal_moves_inner(state);
        self.finish(start);
        result
    }

    /// Plays optimal moves for both sides until the game ends
    ///
    /// Returns the terminal state and the actions taken to reach it. The
    /// statistics afterwards cover the whole game.
    pub fn play_out(&mut self, state: &S) -> Result<(S, Vec<S::Action>)> {
        let start = self.begin();
        let result = self.play_out_inner(state);
        self.finish(start);

        if let Ok((terminal, trace)) = &result {
            debug!(
                "Played out {} moves, final utility {}",
                trace.len(),
                terminal.get_utility()
            );
        }
        result
    }

    fn begin(&mut self) -> Instant {
        self.statistics = SearchStatistics::new();
        Instant::now()
    }

    fn finish(&mut self, start: Instant) {
        self.statistics.total_time = start.elapsed();
    }

    fn play_out_inner(&mut self, state: &S) -> Result<(S, Vec<S::Action>)> {
        let mut current = state.clone();
        let mut trace = Vec::new();

        while !current.is_terminal() {
            let action = self.best_move_inner(&current)?;
            current = current.apply_action(&action)?;
            trace.push(action);
        }

        Ok((current, trace))
    }

    fn best_move_inner(&mut self, state: &S) -> Result<S::Action> {
        if self.config.tie_break == TieBreak::Random {
            let candidates = self.optimal_moves_inner(state)?;
            let mut rng = rand::thread_rng();
            return candidates
                .choose(&mut rng)
                .cloned()
                .ok_or(MinimaxError::NoLegalMoves);
        }

        let player = Self::player_to_move(state)?;
        let maximizing = player.is_maximizer();
        let mut window = Window::full();
        let mut best: Option<(S::Action, Utility)> = None;

        for action in state.get_legal_actions() {
            let child = state.apply_action(&action)?;
            let value = self.reply_value(&child, maximizing, window)?;
            trace!("Root move {:?} -> {}", action, value);

            let improves = match &best {
                None => true,
                Some((_, best_value)) if maximizing => value > *best_value,
                Some((_, best_value)) => value < *best_value,
            };
            if improves {
                best = Some((action, value));
            }

            if self.config.alpha_beta {
                if maximizing {
                    window.alpha = window.alpha.max(value);
                } else {
                    window.beta = window.beta.min(value);
                }
            }
        }

        best.map(|(action, _)| action).ok_or(MinimaxError::NoLegalMoves)
    }

    fn evaluate_moves_inner(&mut self, state: &S) -> Result<Vec<(S::Action, Utility)>> {
        let maximizing = Self::player_to_move(state)?.is_maximizer();

        state
            .get_legal_actions()
            .into_iter()
            .map(|action| {
                let child = state.apply_action(&action)?;
                let value = self.reply_value(&child, maximizing, Window::full())?;
                trace!("Move {:?} has value {}", action, value);
                Ok((action, value))
            })
            .collect()
    }

    fn optimal_moves_inner(&mut self, state: &S) -> Result<Vec<S::Action>> {
        let maximizing = Self::player_to_move(state)?.is_maximizer();
        let scored = self.evaluate_moves_inner(state)?;

        let values = scored.iter().map(|(_, value)| *value);
        let best = if maximizing { values.max() } else { values.min() };
        let best = best.ok_or(MinimaxError::NoLegalMoves)?;

        Ok(scored
            .into_iter()
            .filter(|(_, value)| *value == best)
            .map(|(action, _)| action)
            .collect())
    }

    fn player_to_move(state: &S) -> Result<S::Player> {
        if state.is_terminal() {
            return Err(MinimaxError::NoLegalMoves);
        }
        state.get_current_player().ok_or(MinimaxError::NoLegalMoves)
    }

    /// Value of a child reached by the player at the root
    fn reply_value(&mut self, child: &S, maximizing: bool, window: Window) -> Result<Utility> {
        if maximizing {
            self.min_value_within(child, window, 1)
        } else {
            self.max_value_within(child, window, 1)
        }
    }

    fn max_value_within(&mut self, state: &S, window: Window, depth: usize) -> Result<Utility> {
        if let Some(value) = self.visit(state, true, depth) {
            return Ok(value);
        }

        let mut bounds = window;
        let mut best: Option<Utility> = None;

        for action in state.get_legal_actions() {
            let child = state.apply_action(&action)?;
            let value = self.min_value_within(&child, bounds, depth + 1)?;
            let best_value = best.map_or(value, |b| b.max(value));
            best = Some(best_value);

            if self.config.alpha_beta {
                if best_value >= bounds.beta {
                    self.statistics.cutoffs += 1;
                    break;
                }
                bounds.alpha = bounds.alpha.max(best_value);
            }
        }

        let value = best.unwrap_or_else(|| state.get_utility());
        self.remember(state, true, value, window);
        Ok(value)
    }

    fn min_value_within(&mut self, state: &S, window: Window, depth: usize) -> Result<Utility> {
        if let Some(value) = self.visit(state, false, depth) {
            return Ok(value);
        }

        let mut bounds = window;
        let mut best: Option<Utility> = None;

        for action in state.get_legal_actions() {
            let child = state.apply_action(&action)?;
            let value = self.max_value_within(&child, bounds, depth + 1)?;
            let best_value = best.map_or(value, |b| b.min(value));
            best = Some(best_value);

            if self.config.alpha_beta {
                if best_value <= bounds.alpha {
                    self.statistics.cutoffs += 1;
                    break;
                }
                bounds.beta = bounds.beta.min(best_value);
            }
        }

        let value = best.unwrap_or_else(|| state.get_utility());
        self.remember(state, false, value, window);
        Ok(value)
    }

    /// Counts the node and returns its value if no expansion is needed
    fn visit(&mut self, state: &S, maximizing: bool, depth: usize) -> Option<Utility> {
        self.statistics.nodes_visited += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(depth);

        if state.is_terminal() {
            self.statistics.terminal_nodes += 1;
            return Some(state.get_utility());
        }

        if self.config.use_transpositions {
            let cached = state
                .state_key()
                .and_then(|key| self.table.get(&(key, maximizing)));
            if let Some(value) = cached {
                self.statistics.transposition_hits += 1;
                return Some(*value);
            }
        }

        None
    }

    fn remember(&mut self, state: &S, maximizing: bool, value: Utility, window: Window) {
        if !self.config.use_transpositions {
            return;
        }
        // Values outside the window are only bounds once pruning is on.
        if self.config.alpha_beta && !window.is_exact(value) {
            return;
        }
        if let Some(key) = state.state_key() {
            self.table.insert((key, maximizing), value);
        }
    }
}

impl<S: GameState> Default for Minimax<S> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Value of `state` for the maximizing player to move, with default settings
pub fn max_value<S: GameState>(state: &S) -> Result<Utility> {
    Minimax::default().max_value(state)
}

/// Value of `state` for the minimizing player to move, with default settings
pub fn min_value<S: GameState>(state: &S) -> Result<Utility> {
    Minimax::default().min_value(state)
}

/// Optimal action for the player to move, with default settings
///
/// ```
/// use tictactoe_minimax::{best_move, Board, Move};
///
/// // X threatens the top row; O must block.
/// let board: Board = "XX./O../...".parse().unwrap();
/// assert_eq!(best_move(&board).unwrap(), Move::new(0, 2));
/// ```
pub fn best_move<S: GameState>(state: &S) -> Result<S::Action> {
    Minimax::default().best_move(state)
}
