//! Depth-bounded backward induction over the outcome lattice.
//!
//! The solver classifies a position for the player to move by recursing
//! through `Position::options`, reversing each child's classification for
//! the parent, and folding the results with [`Outcome::combine`]. The
//! recursion is synchronous and blocking; the depth budget is the only
//! bound on its cost.

use crate::core::{GameRng, PlayerId};
use crate::position::Position;

use super::config::SolverConfig;
use super::outcome::Outcome;

/// Exhaustive game-tree solver with a depth budget.
///
/// Classification (`solve`) is deterministic; only move *selection*
/// (`best_move`) draws on the RNG, to vary play among equally-optimal
/// moves.
#[derive(Clone, Debug)]
pub struct Solver {
    config: SolverConfig,
    rng: GameRng,
}

impl Solver {
    /// Create a solver from a configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Create a solver with the given depth budget and default settings.
    #[must_use]
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self::new(SolverConfig::default().with_max_depth(max_depth))
    }

    /// The solver's configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Classify `position` for `player` within the configured budget.
    ///
    /// Returns `NoMoves` if `player` has no options, `Undecided` over all
    /// immediate options if the budget is exhausted (a budget of 0 or 1
    /// resolves nothing), and otherwise the folded classification of the
    /// option subtrees.
    #[must_use]
    pub fn solve<P: Position>(&self, position: &P, player: PlayerId) -> Outcome<P> {
        self.solve_to_depth(position, player, self.config.max_depth)
    }

    fn solve_to_depth<P: Position>(
        &self,
        position: &P,
        player: PlayerId,
        depth: u32,
    ) -> Outcome<P> {
        let options = position.options(player);
        if options.is_empty() {
            return Outcome::NoMoves;
        }
        if depth <= 1 {
            // Budget exhausted before any option can be resolved: report
            // every immediate option as an unknown-quality candidate.
            return Outcome::Undecided {
                depth: 0,
                moves: options,
            };
        }

        let mut best = Outcome::NoMoves;
        for option in options {
            let child = self.solve_to_depth(&option, player.other(), depth - 1);
            best = best.combine(child.reversed(option));

            // A proven win needs no further comparison. This is the only
            // pruning rule; it is not alpha-beta.
            if self.config.shortcut_on_win && best.is_win() {
                break;
            }
        }
        best
    }

    /// Pick a move for `player`, uniformly at random among the optimal
    /// moves found within the budget.
    ///
    /// Returns `None` only when the position has no options at all.
    pub fn best_move<P: Position>(&mut self, position: &P, player: PlayerId) -> Option<P> {
        let outcome = self.solve(position, player);
        log::debug!(
            "solver: {} to move, {} optimal move(s), depth {}",
            position.player_name(player),
            outcome.moves().len(),
            outcome.depth(),
        );
        let mut moves = outcome.into_moves();
        self.rng.take(&mut moves)
    }
}
