//! Statistics collection for minimax searches
//!
//! This module provides structures for collecting and reporting statistics
//! about a single search.

use std::time::Duration;

/// Statistics collected during a minimax search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    /// Number of states evaluated
    pub nodes_visited: usize,

    /// Number of evaluated states that were terminal
    pub terminal_nodes: usize,

    /// Number of times the remaining siblings were skipped by pruning
    pub cutoffs: usize,

    /// Number of values served from the transposition table
    pub transposition_hits: usize,

    /// Deepest ply reached below the root
    pub max_depth: usize,

    /// Total time spent searching
    pub total_time: Duration,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            nodes_visited: 0,
            terminal_nodes: 0,
            cutoffs: 0,
            transposition_hits: 0,
            max_depth: 0,
            total_time: Duration::from_secs(0),
        }
    }

    /// Returns the number of nodes evaluated per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes_visited as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Minimax Search Statistics:\n\
             - Nodes visited: {}\n\
             - Terminal nodes: {}\n\
             - Cutoffs: {}\n\
             - Transposition hits: {}\n\
             - Max depth: {}\n\
             - Total time: {:.3} seconds\n\
             - Nodes per second: {:.1}",
            self.nodes_visited,
            self.terminal_nodes,
            self.cutoffs,
            self.transposition_hits,
            self.max_depth,
            self.total_time.as_secs_f64(),
            self.nodes_per_second()
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
