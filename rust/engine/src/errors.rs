use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid game configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("Guess has {actual} fields, expected {expected}")]
    InvalidGuessLength { expected: usize, actual: usize },
    #[error("Guess field at position {position} is not allowed: {value}")]
    InvalidGuessValue { position: usize, value: String },
    #[error("Move number {received} out of order (expected {expected})")]
    InvalidMoveNumber { received: u32, expected: u32 },
    #[error("Game is already finished")]
    GameClosed,
}
