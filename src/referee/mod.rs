//! Turn-taking referee: the owner of game-progress state.
//!
//! The referee holds the current position and the player to move,
//! requests moves from its two `Player` collaborators, validates each
//! submission against `Position::options`, and detects termination under
//! the normal-play convention (the player with no move loses).
//!
//! ## State machine
//!
//! `AwaitingMove(Left)` and `AwaitingMove(Right)` alternate on every
//! accepted move until `GameOver(winner)`. No other states exist. An
//! invalid submission is rejected (logged, state untouched) and the same
//! player stays on the clock; a `None` submission is a forfeit and ends
//! the game immediately in the opponent's favor.
//!
//! ## Pacing
//!
//! Between applying a move and requesting the next one the referee calls
//! an injectable [`Pacing`] strategy. The default does nothing, keeping
//! tests synchronous; interactive front ends can inject a real delay so a
//! rendering collaborator gets a chance to update. Pacing never affects
//! move order: moves are applied strictly one at a time.

use std::time::Duration;

use crate::core::PlayerId;
use crate::players::Player;
use crate::position::Position;

/// Renders positions for players that do not bring their own display.
///
/// Rendering itself is outside the core; this is the seam it plugs into.
pub trait View<P: Position> {
    /// Render the position.
    fn draw(&mut self, position: &P);
}

/// Controls the gap between applying a move and requesting the next one.
pub trait Pacing {
    /// Called once before each move request.
    fn pause(&self);
}

/// No pause at all. The default, and what tests want.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Pacing for NoDelay {
    fn pause(&self) {}
}

/// Sleep a fixed duration before each move request.
///
/// Gives a view time to redraw before the next player starts thinking.
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay(pub Duration);

impl Pacing for FixedDelay {
    fn pause(&self) {
        std::thread::sleep(self.0);
    }
}

/// Result of submitting a candidate move to the referee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was applied; the other player is now on the clock.
    Accepted,
    /// The candidate was not a legal option. Nothing changed; the same
    /// player is still on the clock.
    Rejected,
    /// The move (or forfeit) ended the game.
    GameOver(PlayerId),
}

/// Drives one game between two players from an initial position.
pub struct Referee<P: Position> {
    position: P,
    current: PlayerId,
    complete: bool,
    players: [Box<dyn Player<P>>; 2],
    pacing: Box<dyn Pacing>,
    view: Option<Box<dyn View<P>>>,
}

impl<P: Position> Referee<P> {
    /// Create a referee in `AwaitingMove(Left)` over `initial`.
    #[must_use]
    pub fn new(initial: P, players: [Box<dyn Player<P>>; 2]) -> Self {
        let mut referee = Self {
            position: initial,
            current: PlayerId::first(),
            complete: false,
            players,
            pacing: Box::new(NoDelay),
            view: None,
        };
        referee.draw_for_current();
        referee
    }

    /// Replace the pacing strategy.
    #[must_use]
    pub fn with_pacing(mut self, pacing: impl Pacing + 'static) -> Self {
        self.pacing = Box::new(pacing);
        self
    }

    /// Attach a shared view, drawn for players without one of their own.
    #[must_use]
    pub fn with_view(mut self, view: impl View<P> + 'static) -> Self {
        self.view = Some(Box::new(view));
        self.draw_for_current();
        self
    }

    /// The current position.
    #[must_use]
    pub fn position(&self) -> &P {
        &self.position
    }

    /// The player on the clock (after completion: the loser).
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.complete
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.complete.then(|| self.current.other())
    }

    /// Submit a candidate position for the player on the clock.
    ///
    /// `None` is a forfeit and ends the game in the opponent's favor
    /// without consulting `options`. A candidate that is not a legal
    /// option is rejected: logged, ignored, and the same player stays on
    /// the clock. A legal candidate becomes the current position, the
    /// turn passes, and the game ends if the new player to move has no
    /// options.
    ///
    /// # Panics
    ///
    /// Panics if called after the game has ended; that is a contract
    /// violation by the caller, not a game event.
    pub fn move_to(&mut self, candidate: Option<P>) -> MoveResult {
        assert!(!self.complete, "move submitted after the game ended");

        let Some(candidate) = candidate else {
            log::warn!(
                "{} forfeits",
                self.position.player_name(self.current)
            );
            return self.end_game();
        };

        if !self.position.has_option(self.current, &candidate) {
            log::warn!(
                "rejected move from {}: candidate is not an option of the current position",
                self.position.player_name(self.current)
            );
            return MoveResult::Rejected;
        }

        self.position = candidate;
        self.current = self.current.other();
        self.draw_for_current();

        if self.position.options(self.current).is_empty() {
            self.end_game()
        } else {
            MoveResult::Accepted
        }
    }

    /// Request one move from the player on the clock and submit it.
    ///
    /// # Panics
    ///
    /// Panics if called after the game has ended.
    pub fn step(&mut self) -> MoveResult {
        assert!(!self.complete, "move requested after the game ended");
        self.pacing.pause();
        let candidate =
            self.players[self.current.index()].give_position(self.current, &self.position);
        self.move_to(candidate)
    }

    /// Drive the game to completion and return the winner.
    ///
    /// A player whose submissions keep getting rejected is simply asked
    /// again, exactly as if it had not answered yet.
    pub fn run(&mut self) -> PlayerId {
        loop {
            if let MoveResult::GameOver(winner) = self.step() {
                return winner;
            }
        }
    }

    fn end_game(&mut self) -> MoveResult {
        self.complete = true;
        let winner = self.current.other();
        if let Some(view) = self.view.as_mut() {
            view.draw(&self.position);
        }
        log::info!("game over: {} wins", self.position.player_name(winner));
        MoveResult::GameOver(winner)
    }

    fn draw_for_current(&mut self) {
        if !self.players[self.current.index()].has_view() {
            if let Some(view) = self.view.as_mut() {
                view.draw(&self.position);
            }
        }
    }
}
