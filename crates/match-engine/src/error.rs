//! Error codes for match operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Input is not one of rock, paper or scissors
    #[error("Invalid choice: {0:?} (expected rock, paper or scissors)")]
    InvalidChoice(String),

    /// A round was played after the match ended
    #[error("Match is over; reset before playing another round")]
    InvalidState,

    #[error("Invalid match config: {0}")]
    InvalidConfig(String),
}
