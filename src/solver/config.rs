//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

/// Solver configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Search depth budget in plies.
    ///
    /// A budget of 1 (or 0) resolves nothing: every option comes back as
    /// an `Undecided` candidate. Proving a win at depth `d` requires a
    /// budget of at least `d + 1`.
    pub max_depth: u32,

    /// Random seed for tie-breaking among equally-optimal moves.
    pub seed: u64,

    /// Stop scanning a position's options once one is a proven win.
    ///
    /// This is the search's only pruning rule. Disabling it never changes
    /// the classification or depth of the result, only the move set and
    /// the running time; the switch exists so tests can check exactly that.
    pub shortcut_on_win: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            seed: 42,
            shortcut_on_win: true,
        }
    }
}

impl SolverConfig {
    /// Create a new config with a custom depth budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with the win shortcut toggled.
    pub fn with_shortcut_on_win(mut self, shortcut: bool) -> Self {
        self.shortcut_on_win = shortcut;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.max_depth, 5);
        assert!(config.shortcut_on_win);
    }

    #[test]
    fn test_builder_methods() {
        let config = SolverConfig::default()
            .with_max_depth(9)
            .with_seed(7)
            .with_shortcut_on_win(false);
        assert_eq!(config.max_depth, 9);
        assert_eq!(config.seed, 7);
        assert!(!config.shortcut_on_win);
    }

    #[test]
    fn test_config_serde() {
        let config = SolverConfig::default().with_max_depth(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.max_depth, 3);
    }
}
