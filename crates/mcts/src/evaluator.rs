//! Evaluation abstraction for MCTS.
//!
//! An evaluator turns a state into a [`Value`] from the first party's fixed
//! perspective, independent of whose turn it is at the state:
//! - `RolloutEvaluator` plays the game out with the engine's default policy
//! - `OutcomeEvaluator` only scores finished games

use duel_core::{Game, Result, Value};
use rand::Rng;
use std::cell::RefCell;

/// Trait for evaluating game positions.
pub trait Evaluator<G: Game> {
    /// Estimate the value of `state` for the first party, in [0, 1].
    fn evaluate(&self, game: &G, state: &G::State) -> Result<Value>;

    /// Convert a value to the other party's perspective.
    ///
    /// Must be an involution: `reverse(reverse(v)) == v`.
    fn reverse(&self, value: Value) -> Value {
        value.reverse()
    }
}

impl<G: Game, E: Evaluator<G> + ?Sized> Evaluator<G> for &E {
    fn evaluate(&self, game: &G, state: &G::State) -> Result<Value> {
        (**self).evaluate(game, state)
    }

    fn reverse(&self, value: Value) -> Value {
        (**self).reverse(value)
    }
}

/// Evaluator using random playouts.
///
/// Terminal states are scored from their outcome directly. Any other state
/// is played to completion with [`Game::default_policy`] and the engine's
/// stochastic transitions.
#[derive(Debug)]
pub struct RolloutEvaluator<R: Rng> {
    /// Random number generator (wrapped in RefCell for interior mutability).
    rng: RefCell<R>,

    /// Optional cap on playout length.
    max_depth: Option<usize>,
}

impl<R: Rng> RolloutEvaluator<R> {
    /// Create an evaluator that plays every game to the end.
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
            max_depth: None,
        }
    }

    /// Stop playouts after `max_depth` moves and score them as a draw.
    ///
    /// Useful for games whose playouts are not guaranteed to terminate.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Play from `initial_state` until the game ends or the depth cap is hit.
    fn rollout<G: Game>(&self, game: &G, initial_state: &G::State) -> Result<Value> {
        let mut rng = self.rng.borrow_mut();
        let mut state = initial_state.clone();
        let mut depth = 0;

        while !game.is_terminal(&state) {
            if self.max_depth.is_some_and(|max| depth >= max) {
                return Ok(Value::DRAW);
            }
            let action = game.default_policy(&state, &mut *rng)?;
            state = game.apply_action(&state, action, &mut *rng)?;
            depth += 1;
        }

        game.outcome(&state).map(Value::from)
    }
}

impl<G: Game, R: Rng> Evaluator<G> for RolloutEvaluator<R> {
    fn evaluate(&self, game: &G, state: &G::State) -> Result<Value> {
        if game.is_terminal(state) {
            return game.outcome(state).map(Value::from);
        }
        self.rollout(game, state)
    }
}

/// Evaluator that scores finished games by their outcome and everything
/// else as a draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomeEvaluator;

impl<G: Game> Evaluator<G> for OutcomeEvaluator {
    fn evaluate(&self, game: &G, state: &G::State) -> Result<Value> {
        if game.is_terminal(state) {
            game.outcome(state).map(Value::from)
        } else {
            Ok(Value::DRAW)
        }
    }
}
