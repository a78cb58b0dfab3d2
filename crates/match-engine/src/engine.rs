//! Match execution engine

use serde::{Deserialize, Serialize};

use crate::choice::{Choice, RoundOutcome};
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::judge;
use crate::random::RandomSource;

/// Scores and lifecycle flag of the current match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u32,
    pub opponent_score: u32,
    pub is_over: bool,
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based round number within the match
    pub round: u32,
    pub player_choice: Choice,
    pub opponent_choice: Choice,
    pub outcome: RoundOutcome,
    pub player_score: u32,
    pub opponent_score: u32,
    pub is_over: bool,
}

/// Side that reached the winning threshold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchWinner {
    Player,
    Opponent,
}

/// Owns one match: its config, state, opponent randomness and round log.
///
/// Each match needs its own engine; nothing is shared between instances.
#[derive(Debug)]
pub struct MatchEngine<R> {
    config: MatchConfig,
    state: MatchState,
    rng: R,
    history: Vec<RoundResult>,
}

impl<R: RandomSource> MatchEngine<R> {
    /// Create an engine for a fresh match
    ///
    /// # Errors
    /// `InvalidConfig` if the winning threshold is zero.
    pub fn new(config: MatchConfig, rng: R) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            config,
            state: MatchState::default(),
            rng,
            history: Vec::new(),
        })
    }

    /// Create an engine with the default first-to-2 rules
    pub fn with_default_config(rng: R) -> Self {
        Self {
            config: MatchConfig::default(),
            state: MatchState::default(),
            rng,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Rounds of the current match, oldest first
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    pub fn rounds_played(&self) -> u32 {
        self.history.len() as u32
    }

    /// Winner of the match, once it is over
    pub fn winner(&self) -> Option<MatchWinner> {
        if !self.state.is_over {
            return None;
        }
        if self.state.player_score >= self.config.winning_threshold {
            Some(MatchWinner::Player)
        } else {
            Some(MatchWinner::Opponent)
        }
    }

    /// Draw the opponent's hand for this round
    pub fn generate_opponent_choice(&mut self) -> Choice {
        self.rng.next_choice()
    }

    /// Resolve one round against a freshly drawn opponent hand and apply
    /// the score change. Does not decide whether the match has ended.
    ///
    /// # Errors
    /// `InvalidState` if the match is already over, including a score that
    /// reached the threshold without `check_match_over` having run yet. The
    /// over flag is latched in that case; scores are untouched and no
    /// randomness is consumed.
    pub fn resolve_round(&mut self, human_choice: Choice) -> Result<RoundResult, MatchError> {
        if self.check_match_over() {
            log::warn!("Rejected round: match is already over");
            return Err(MatchError::InvalidState);
        }

        let opponent_choice = self.generate_opponent_choice();
        let outcome = judge(human_choice, opponent_choice);

        match outcome {
            RoundOutcome::PlayerWin => self.state.player_score += 1,
            RoundOutcome::OpponentWin => self.state.opponent_score += 1,
            RoundOutcome::Tie => {}
        }

        let result = RoundResult {
            round: self.rounds_played() + 1,
            player_choice: human_choice,
            opponent_choice,
            outcome,
            player_score: self.state.player_score,
            opponent_score: self.state.opponent_score,
            is_over: self.state.is_over,
        };

        log::debug!(
            "Round {}: {} vs {} -> {:?} ({}-{})",
            result.round,
            human_choice,
            opponent_choice,
            outcome,
            result.player_score,
            result.opponent_score,
        );

        self.history.push(result.clone());
        Ok(result)
    }

    /// Mark the match over if either score has reached the threshold.
    pub fn check_match_over(&mut self) -> bool {
        let threshold = self.config.winning_threshold;
        if self.state.player_score >= threshold || self.state.opponent_score >= threshold {
            if !self.state.is_over {
                log::info!(
                    "Match over after {} rounds: {}-{}",
                    self.rounds_played(),
                    self.state.player_score,
                    self.state.opponent_score,
                );
            }
            self.state.is_over = true;
            if let Some(last) = self.history.last_mut() {
                last.is_over = true;
            }
            return true;
        }
        false
    }

    /// Play one full round: draw, resolve, score, and check for match end.
    ///
    /// # Errors
    /// `InvalidState` if the match is already over.
    pub fn play_round(&mut self, human_choice: Choice) -> Result<RoundResult, MatchError> {
        let mut result = self.resolve_round(human_choice)?;
        result.is_over = self.check_match_over();
        Ok(result)
    }

    /// Play a round from a frontend choice name such as `"rock"`.
    ///
    /// # Errors
    /// `InvalidChoice` for an unknown name (checked before anything else),
    /// otherwise as `play_round`.
    pub fn play_round_str(&mut self, choice: &str) -> Result<RoundResult, MatchError> {
        let human_choice: Choice = choice.parse().map_err(|e| {
            log::warn!("Rejected round: {}", e);
            e
        })?;
        self.play_round(human_choice)
    }

    /// Start a new match, whatever state the current one is in
    pub fn reset_match(&mut self) {
        log::info!(
            "Match reset (was {}-{}, over: {})",
            self.state.player_score,
            self.state.opponent_score,
            self.state.is_over,
        );
        self.state = MatchState::default();
        self.history.clear();
    }
}
