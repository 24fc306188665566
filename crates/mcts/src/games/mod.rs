//! Reference game engines.
//!
//! Small games used to exercise the search:
//! - `TicTacToe` reaches the same board through many move orders
//! - `Pendulum` revisits positions, so its state graph has cycles

pub mod pendulum;
pub mod tictactoe;

pub use pendulum::{Pendulum, PendulumState, Push};
pub use tictactoe::{TicTacToe, TicTacToeAction, TicTacToeState};
