//! Choices and round outcomes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::judge;

/// A hand played in a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices in index order
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Lowercase name, as sent by the frontend buttons
    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    /// Map a uniform draw in [0, 1) onto a choice.
    ///
    /// Out-of-range draws are clamped so a misbehaving source can never
    /// produce an invalid hand.
    pub fn from_uniform(u: f64) -> Choice {
        let scaled = (u * Self::ALL.len() as f64).floor();
        if scaled.is_nan() || scaled < 1.0 {
            Choice::Rock
        } else if scaled < 2.0 {
            Choice::Paper
        } else {
            Choice::Scissors
        }
    }

    /// True if `self` wins against `other`
    pub fn beats(self, other: Choice) -> bool {
        judge(self, other) == RoundOutcome::PlayerWin
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(MatchError::InvalidChoice(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = MatchError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Choice::Rock),
            1 => Ok(Choice::Paper),
            2 => Ok(Choice::Scissors),
            other => Err(MatchError::InvalidChoice(other.to_string())),
        }
    }
}

/// Result of a single round, from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWin,
    OpponentWin,
    Tie,
}

impl RoundOutcome {
    /// The same round seen from the opponent's side
    pub fn flipped(self) -> RoundOutcome {
        match self {
            RoundOutcome::PlayerWin => RoundOutcome::OpponentWin,
            RoundOutcome::OpponentWin => RoundOutcome::PlayerWin,
            RoundOutcome::Tie => RoundOutcome::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("rock".parse::<Choice>(), Ok(Choice::Rock));
        assert_eq!("Paper".parse::<Choice>(), Ok(Choice::Paper));
        assert_eq!(" scissors ".parse::<Choice>(), Ok(Choice::Scissors));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "lizard".parse::<Choice>(),
            Err(MatchError::InvalidChoice("lizard".to_string()))
        );
        assert!("".parse::<Choice>().is_err());
    }

    #[test]
    fn test_index_roundtrip() {
        for c in Choice::ALL {
            assert_eq!(Choice::try_from(c.index()), Ok(c));
        }
        assert!(matches!(Choice::try_from(3), Err(MatchError::InvalidChoice(_))));
    }

    #[test]
    fn test_from_uniform_buckets() {
        assert_eq!(Choice::from_uniform(0.0), Choice::Rock);
        assert_eq!(Choice::from_uniform(0.33), Choice::Rock);
        assert_eq!(Choice::from_uniform(0.34), Choice::Paper);
        assert_eq!(Choice::from_uniform(0.66), Choice::Paper);
        assert_eq!(Choice::from_uniform(0.67), Choice::Scissors);
        assert_eq!(Choice::from_uniform(0.999_999), Choice::Scissors);
    }

    #[test]
    fn test_from_uniform_clamps() {
        assert_eq!(Choice::from_uniform(-0.5), Choice::Rock);
        assert_eq!(Choice::from_uniform(1.0), Choice::Scissors);
        assert_eq!(Choice::from_uniform(f64::NAN), Choice::Rock);
    }

    #[test]
    fn test_beats_cycle() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Scissors.beats(Choice::Paper));
        assert!(Choice::Paper.beats(Choice::Rock));
        assert!(!Choice::Rock.beats(Choice::Rock));
        assert!(!Choice::Scissors.beats(Choice::Rock));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Choice::Scissors).unwrap(), "\"scissors\"");
        let c: Choice = serde_json::from_str("\"paper\"").unwrap();
        assert_eq!(c, Choice::Paper);
    }
}
