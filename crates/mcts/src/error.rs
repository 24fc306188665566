//! Errors that abort a search.

use duel_core::GameError;
use thiserror::Error;

/// Errors that can occur during MCTS search.
///
/// States and actions are carried as their `Debug` rendering so the error
/// does not depend on the game's types.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Transition failed applying {action} to {state}: {source}")]
    Transition {
        state: String,
        action: String,
        #[source]
        source: GameError,
    },

    #[error("Evaluation failed at {state}: {source}")]
    Evaluation {
        state: String,
        #[source]
        source: GameError,
    },

    #[error("Average requested for an action with zero visits")]
    ZeroVisits,

    #[error("Node is already fully expanded: {state}")]
    AlreadyExpanded { state: String },

    #[error("Non-terminal state has no legal actions: {state}")]
    NoLegalActions { state: String },

    #[error("Root state is terminal: {state}")]
    TerminalRoot { state: String },

    #[error("State is not in the registry: {state}")]
    UnknownState { state: String },

    #[error("No action statistics recorded for {state}")]
    NoStatistics { state: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
