use crate::{GameError, Outcome, Result, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

/// A two-party game as seen by the search.
///
/// States are immutable from the search's point of view: every transition
/// produces a new state. Two states that compare equal are treated as the
/// same position, no matter how they were reached.
pub trait Game {
    /// The game state. `Eq` is the transposition key; `Hash` must agree with it.
    type State: Clone + Eq + Hash + Debug;

    /// A move for the side to move.
    type Action: Copy + Eq + Ord + Hash + Debug;

    /// Returns true if the game has ended
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Returns the result of a finished game.
    ///
    /// # Errors
    /// Returns `GameError::NotTerminal` if the game is still in progress.
    fn outcome(&self, state: &Self::State) -> Result<Outcome>;

    /// Returns the party whose turn it is
    fn side_to_move(&self, state: &Self::State) -> Side;

    /// Returns all legal actions for the side to move
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action, returning a new state.
    ///
    /// Transitions may be stochastic, so the same `(state, action)` pair can
    /// lead to different successors depending on `rng`.
    fn apply_action<R: Rng + ?Sized>(
        &self,
        state: &Self::State,
        action: Self::Action,
        rng: &mut R,
    ) -> Result<Self::State>;

    /// Picks the action a playout takes from `state`.
    ///
    /// Defaults to a uniformly random legal action.
    fn default_policy<R: Rng + ?Sized>(
        &self,
        state: &Self::State,
        rng: &mut R,
    ) -> Result<Self::Action> {
        self.legal_actions(state)
            .choose(rng)
            .copied()
            .ok_or(GameError::NoLegalActions)
    }
}
