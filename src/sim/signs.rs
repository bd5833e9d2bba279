//! Random sign sources
//!
//! Serve direction and the vertical nudge on paddle hits are the only random
//! choices in the simulation. Both draw a single ±1 from a [`SignSource`] so
//! tests can script the exact sequence.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplies uniformly random signs (+1.0 or -1.0)
pub trait SignSource {
    fn next_sign(&mut self) -> f32;
}

/// Seeded PCG-backed sign source used in play
#[derive(Debug, Clone)]
pub struct SeededSigns {
    seed: u64,
    rng: Pcg32,
}

impl SeededSigns {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SignSource for SeededSigns {
    fn next_sign(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }
}

/// Replays a fixed list of signs, cycling when exhausted.
///
/// An empty script always yields +1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSigns {
    script: Vec<f32>,
    pending: VecDeque<f32>,
}

impl ScriptedSigns {
    pub fn new(signs: impl IntoIterator<Item = f32>) -> Self {
        let script: Vec<f32> = signs
            .into_iter()
            .map(|s| if s < 0.0 { -1.0 } else { 1.0 })
            .collect();
        Self {
            pending: script.iter().copied().collect(),
            script,
        }
    }

    /// Always +1
    pub fn positive() -> Self {
        Self::new([1.0])
    }
}

impl SignSource for ScriptedSigns {
    fn next_sign(&mut self) -> f32 {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending.pop_front().unwrap_or(1.0)
    }
}
