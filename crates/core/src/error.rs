use thiserror::Error;

/// Errors raised by a game engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Game is not terminal")]
    NotTerminal,

    #[error("No legal actions available")]
    NoLegalActions,

    #[error("Illegal action: {0}")]
    IllegalAction(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Engine failure: {0}")]
    Engine(String),
}

/// Convenience Result type for game engine operations
pub type Result<T> = std::result::Result<T, GameError>;
