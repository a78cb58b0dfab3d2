//! Match Engine for Rock Paper Scissors
//!
//! Core game logic for a first-to-N match against a random opponent.
//! This crate is compiled to:
//! - Native (for tests and embedding hosts)
//! - WASM (for the browser frontend)

mod choice;
mod config;
mod engine;
mod error;
pub mod messages;
mod random;

#[cfg(feature = "wasm")]
mod wasm;

pub use choice::{Choice, RoundOutcome};
pub use config::{MatchConfig, DEFAULT_WINNING_THRESHOLD};
pub use engine::{MatchEngine, MatchState, MatchWinner, RoundResult};
pub use error::MatchError;
pub use random::{RandomSource, ScriptedSource, SeededRng};

#[cfg(not(target_arch = "wasm32"))]
pub use random::EntropySource;

/// Dominance table for a single round, from the player's side.
///
/// Every ordered pair is listed so an unexpected pair can never fall
/// through to a default.
pub fn judge(player: Choice, opponent: Choice) -> RoundOutcome {
    match (player, opponent) {
        (Choice::Rock, Choice::Rock) => RoundOutcome::Tie,
        (Choice::Rock, Choice::Paper) => RoundOutcome::OpponentWin,
        (Choice::Rock, Choice::Scissors) => RoundOutcome::PlayerWin,
        (Choice::Paper, Choice::Rock) => RoundOutcome::PlayerWin,
        (Choice::Paper, Choice::Paper) => RoundOutcome::Tie,
        (Choice::Paper, Choice::Scissors) => RoundOutcome::OpponentWin,
        (Choice::Scissors, Choice::Rock) => RoundOutcome::OpponentWin,
        (Choice::Scissors, Choice::Paper) => RoundOutcome::PlayerWin,
        (Choice::Scissors, Choice::Scissors) => RoundOutcome::Tie,
    }
}
