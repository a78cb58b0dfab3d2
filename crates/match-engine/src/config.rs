//! Match configuration

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// First player to this score wins
pub const DEFAULT_WINNING_THRESHOLD: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    pub winning_threshold: u32,
}

impl MatchConfig {
    pub fn new(winning_threshold: u32) -> Self {
        Self { winning_threshold }
    }

    /// Parse a config from JSON, e.g. `{"winning_threshold": 3}`.
    ///
    /// Missing fields take their defaults. The result is validated.
    pub fn from_json(json: &str) -> Result<Self, MatchError> {
        let config: MatchConfig = serde_json::from_str(json)
            .map_err(|e| MatchError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.winning_threshold == 0 {
            return Err(MatchError::InvalidConfig(
                "winning_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINNING_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(MatchConfig::default().winning_threshold, 2);
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        assert!(matches!(
            MatchConfig::new(0).validate(),
            Err(MatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let config = MatchConfig::from_json(r#"{"winning_threshold": 5}"#).unwrap();
        assert_eq!(config.winning_threshold, 5);

        let config = MatchConfig::from_json("{}").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            MatchConfig::from_json(r#"{"winning_threshold": 0}"#),
            Err(MatchError::InvalidConfig(_))
        ));
        assert!(matches!(
            MatchConfig::from_json(r#"{"winning_threshold": -1}"#),
            Err(MatchError::InvalidConfig(_))
        ));
        assert!(matches!(
            MatchConfig::from_json(r#"{"winning_treshold": 5}"#),
            Err(MatchError::InvalidConfig(_))
        ));
        assert!(matches!(
            MatchConfig::from_json("not json"),
            Err(MatchError::InvalidConfig(_))
        ));
    }
}
