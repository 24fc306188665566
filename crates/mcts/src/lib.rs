//! Transposition-aware Monte Carlo Tree Search.
//!
//! This crate searches any game implementing `duel_core::Game`. Positions
//! reached along different move orders share one node, so the search works
//! on a graph rather than a tree, and that graph may contain cycles.
//!
//! # Features
//!
//! - **Transpositions**: one node per distinct state, looked up by equality
//! - **UCB1 Selection**: `average + X * sqrt(ln(N) / n)`, X is the only tunable
//! - **Incremental Expansion**: one untried action per simulation
//! - **Cycle Detection**: a simulation that walks back onto its own path
//!   stops and evaluates the repeated position
//! - **Fixed Perspective**: values are first-party values; second-party nodes
//!   store their reverse
//!
//! # Example
//!
//! ```
//! use duel_mcts::{games::TicTacToe, recommend_action, Mcts, MctsConfig, RolloutEvaluator};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let game = TicTacToe;
//! let state = game.initial_state();
//!
//! let config = MctsConfig::with_simulations(200);
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let evaluator = RolloutEvaluator::new(rng.clone());
//! let mut mcts = Mcts::new(config, evaluator, rng);
//!
//! let registry = mcts.search(&game, &state).unwrap();
//! println!("Nodes: {}", registry.len());
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let action = recommend_action(&registry, &state, &mut rng).unwrap();
//! println!("Best action: {}", action);
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod games;
mod node;
mod registry;
pub mod search;
mod ucb;

pub use config::MctsConfig;
pub use error::{Result, SearchError};
pub use evaluator::{Evaluator, OutcomeEvaluator, RolloutEvaluator};
pub use node::{ActionStats, Node, NodeId};
pub use registry::Registry;
pub use search::{recommend_action, run_search, Mcts, SearchStats, SelectionPath};
pub use ucb::ucb1;
