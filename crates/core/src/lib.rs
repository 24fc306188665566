//! Duel Core - the game engine contract
//!
//! This crate defines what a two-party, turn-alternating, stochastic game
//! has to provide before it can be searched with `duel_mcts`. The search
//! never looks inside a state or an action; it only asks the engine the
//! questions listed on [`Game`].
//!
//! # Types
//!
//! - [`Game`] - Trait for game engines
//! - [`Side`] - Which party is to move
//! - [`Outcome`] - Result of a finished game
//! - [`Value`] - Scalar estimate in [0, 1] from the first party's perspective

mod error;
mod game;
mod types;

pub use error::{GameError, Result};
pub use game::Game;
pub use types::{Outcome, Side, Value};
