//! WASM bindings for the browser frontend

#![cfg(feature = "wasm")]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::messages::{game_over_message, intro, round_message};
use crate::{Choice, MatchConfig, MatchEngine, MatchError, RandomSource, RoundResult, SeededRng};

/// Opponent randomness from the browser's `Math.random()`
struct JsRandom;

impl RandomSource for JsRandom {
    fn next_uniform(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

fn to_js_error(e: MatchError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Plain struct so serde-wasm-bindgen emits an object, not a `Map`
#[derive(Serialize)]
struct PlayResponse<'a> {
    round: &'a RoundResult,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_over: Option<&'static str>,
}

/// One match, owned by the page that created it
#[wasm_bindgen]
pub struct WasmMatch {
    engine: MatchEngine<Box<dyn RandomSource>>,
}

impl WasmMatch {
    fn with_rng(winning_threshold: u32, rng: Box<dyn RandomSource>) -> Result<WasmMatch, JsError> {
        let engine = MatchEngine::new(MatchConfig::new(winning_threshold), rng)
            .map_err(to_js_error)?;
        Ok(WasmMatch { engine })
    }
}

#[wasm_bindgen]
impl WasmMatch {
    /// Start a match against a `Math.random()` opponent
    #[wasm_bindgen(constructor)]
    pub fn new(winning_threshold: u32) -> Result<WasmMatch, JsError> {
        Self::with_rng(winning_threshold, Box::new(JsRandom))
    }

    /// Start a match with a reproducible opponent, for replays
    pub fn new_seeded(winning_threshold: u32, seed: u64) -> Result<WasmMatch, JsError> {
        Self::with_rng(winning_threshold, Box::new(SeededRng::new(seed)))
    }

    /// Play a round with the button's `data-choice` value.
    ///
    /// Returns `{ round, message, game_over? }`: the round result, the
    /// message to display, and the game-over banner once the match has ended.
    pub fn play(&mut self, choice: &str) -> Result<JsValue, JsError> {
        let round = self.engine.play_round_str(choice).map_err(to_js_error)?;
        let response = PlayResponse {
            round: &round,
            message: round_message(&round),
            game_over: self.engine.winner().map(game_over_message),
        };
        to_js_value(&response)
    }

    pub fn reset(&mut self) {
        self.engine.reset_match();
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js_value(&self.engine.state())
    }

    pub fn history(&self) -> Result<JsValue, JsError> {
        to_js_value(&self.engine.history())
    }

    pub fn intro(&self) -> String {
        intro(self.engine.config().winning_threshold)
    }
}

/// Choice names accepted by `WasmMatch::play`
#[wasm_bindgen]
pub fn get_choices() -> Result<JsValue, JsError> {
    let names: Vec<&str> = Choice::ALL.iter().map(|c| c.name()).collect();
    to_js_value(&names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RoundOutcome, ScriptedSource};

    #[test]
    fn test_play_response_shape() {
        let mut engine =
            MatchEngine::new(MatchConfig::new(1), ScriptedSource::new(vec![Choice::Scissors])).unwrap();
        let round = engine.play_round(Choice::Rock).unwrap();
        assert_eq!(round.outcome, RoundOutcome::PlayerWin);

        let response = PlayResponse {
            round: &round,
            message: round_message(&round),
            game_over: engine.winner().map(game_over_message),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["round"].is_object());
        assert_eq!(json["round"]["player_score"], 1);
        assert_eq!(json["round"]["is_over"], true);
        assert_eq!(json["message"], "You chose rock, Computer chose scissors. You win this round!");
        assert_eq!(json["game_over"], "🎉 You win the game!");
    }
}
