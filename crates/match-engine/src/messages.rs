//! Text shown to the player by the frontend

use crate::choice::RoundOutcome;
use crate::engine::{MatchWinner, RoundResult};

/// Banner shown at the start of every match
pub fn intro(winning_threshold: u32) -> String {
    format!("First to {} wins.", winning_threshold)
}

pub fn round_message(result: &RoundResult) -> String {
    let verdict = match result.outcome {
        RoundOutcome::PlayerWin => "You win this round!",
        RoundOutcome::OpponentWin => "Computer wins this round!",
        RoundOutcome::Tie => "It's a tie!",
    };
    format!(
        "You chose {}, Computer chose {}. {}",
        result.player_choice, result.opponent_choice, verdict
    )
}

pub fn game_over_message(winner: MatchWinner) -> &'static str {
    match winner {
        MatchWinner::Player => "🎉 You win the game!",
        MatchWinner::Opponent => "💻 Computer wins the game!",
    }
}
