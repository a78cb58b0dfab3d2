//! Randomness sources for the opponent
//!
//! The engine never calls a global random function. It draws from a
//! `RandomSource` handed to it at construction, so tests and replays can
//! substitute a deterministic sequence.

use crate::choice::Choice;

/// Source of opponent randomness
pub trait RandomSource {
    /// Uniform value in [0, 1)
    fn next_uniform(&mut self) -> f64;

    /// Uniform choice among the three hands
    fn next_choice(&mut self) -> Choice {
        Choice::from_uniform(self.next_uniform())
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    fn next_choice(&mut self) -> Choice {
        (**self).next_choice()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    fn next_choice(&mut self) -> Choice {
        (**self).next_choice()
    }
}

/// Seeded pseudo-random number generator
///
/// Deterministic: same seed = same sequence. Uses xorshift64*.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        let mut state = seed.wrapping_mul(0x517cc1b727220a95) ^ 0x9e3779b97f4a7c15;
        // xorshift never leaves the all-zero state
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RandomSource for SeededRng {
    fn next_uniform(&mut self) -> f64 {
        // Top 53 bits fill the f64 mantissa exactly
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed sequence of choices, wrapping around at the end.
///
/// An empty script always yields rock.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    choices: Vec<Choice>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(choices: impl Into<Vec<Choice>>) -> Self {
        Self { choices: choices.into(), position: 0 }
    }

    /// Number of choices handed out so far
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        // Centre of the bucket that maps back to the scripted choice
        (self.next_choice().index() as f64 + 0.5) / Choice::ALL.len() as f64
    }

    fn next_choice(&mut self) -> Choice {
        if self.choices.is_empty() {
            return Choice::Rock;
        }
        let choice = self.choices[self.position % self.choices.len()];
        self.position += 1;
        choice
    }
}

/// Thread-local OS-seeded generator for interactive play
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct EntropySource {
    rng: rand::rngs::ThreadRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl EntropySource {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for EntropySource {
    fn next_uniform(&mut self) -> f64 {
        use rand::Rng;
        self.rng.gen::<f64>()
    }
}
