//! Pendulum: a tug-of-war over a token on a line.
//!
//! The token starts at 0 on the track `-reach..=reach`. The side to move
//! pushes it one step left or right. The first party wins when the token
//! reaches `+reach`, the second party when it reaches `-reach`.
//!
//! Positions repeat whenever a push is undone, so the state graph is full of
//! cycles. With a non-zero `slip` a push lands in the opposite direction with
//! that probability, which makes transitions stochastic.

use duel_core::{Game, GameError, Outcome, Result, Side};
use rand::Rng;

/// Token position and side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PendulumState {
    position: i32,
    to_move: Side,
}

impl PendulumState {
    pub fn new(position: i32, to_move: Side) -> Self {
        Self { position, to_move }
    }

    pub fn position(&self) -> i32 {
        self.position
    }
}

/// Direction of a push.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Push {
    Left,
    Right,
}

impl Push {
    fn step(self) -> i32 {
        match self {
            Push::Left => -1,
            Push::Right => 1,
        }
    }
}

/// Pendulum game implementation.
#[derive(Clone, Copy, Debug)]
pub struct Pendulum {
    reach: i32,
    slip: f64,
}

impl Pendulum {
    /// Deterministic game on `-reach..=reach`.
    pub fn new(reach: i32) -> Self {
        Self {
            reach: reach.max(1),
            slip: 0.0,
        }
    }

    /// Probability that a push goes the other way, clamped to [0, 1].
    pub fn with_slip(mut self, slip: f64) -> Self {
        self.slip = if slip.is_nan() { 0.0 } else { slip.clamp(0.0, 1.0) };
        self
    }

    pub fn reach(&self) -> i32 {
        self.reach
    }

    pub fn initial_state(&self) -> PendulumState {
        PendulumState::new(0, Side::First)
    }
}

impl Game for Pendulum {
    type State = PendulumState;
    type Action = Push;

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.position.abs() >= self.reach
    }

    fn outcome(&self, state: &Self::State) -> Result<Outcome> {
        if state.position >= self.reach {
            Ok(Outcome::FirstPartyWin)
        } else if state.position <= -self.reach {
            Ok(Outcome::SecondPartyWin)
        } else {
            Err(GameError::NotTerminal)
        }
    }

    fn side_to_move(&self, state: &Self::State) -> Side {
        state.to_move
    }

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if self.is_terminal(state) {
            Vec::new()
        } else {
            vec![Push::Left, Push::Right]
        }
    }

    fn apply_action<R: Rng + ?Sized>(
        &self,
        state: &Self::State,
        action: Self::Action,
        rng: &mut R,
    ) -> Result<Self::State> {
        if self.is_terminal(state) {
            return Err(GameError::IllegalAction(format!(
                "{:?} after the game ended at {}",
                action, state.position
            )));
        }

        let slipped = self.slip > 0.0 && rng.gen_bool(self.slip);
        let step = if slipped { -action.step() } else { action.step() };
        Ok(PendulumState::new(
            state.position + step,
            state.to_move.opposite(),
        ))
    }
}
