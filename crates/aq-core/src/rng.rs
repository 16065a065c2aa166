//! Deterministic tie-breaking among equally good candidates.
//!
//! # Determinism strategy
//!
//! The reference planner re-initialises its pseudo-random source from the
//! run seed at *every* tie-break rather than drawing from one evolving
//! stream.  Flight logs recorded with that behaviour are only reproducible if
//! the same pattern is kept, so it is the default ([`TieBreakMode::Reseeded`]).
//! The conventional evolving stream is available as [`TieBreakMode::Stream`].
//!
//! In both modes a decision draws exactly one value, even when only one
//! candidate is offered, so the stream position depends only on the number of
//! decisions taken.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// How the tie-breaker sources its randomness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TieBreakMode {
    /// Fresh generator seeded from the run seed at every decision.
    #[default]
    Reseeded,
    /// One generator seeded once per run and advanced by every decision.
    Stream,
}

impl TieBreakMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TieBreakMode::Reseeded => "reseeded",
            TieBreakMode::Stream   => "stream",
        }
    }
}

impl std::fmt::Display for TieBreakMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Choose one of `candidates` with a generator freshly seeded from `seed`.
///
/// Returns `None` only if `candidates` is empty.
pub fn pick(seed: u64, candidates: &[usize]) -> Option<usize> {
    draw(&mut SmallRng::seed_from_u64(seed), candidates)
}

#[inline]
fn draw(rng: &mut SmallRng, candidates: &[usize]) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}

// ── TieBreaker ────────────────────────────────────────────────────────────────

/// Seeded selector shared by the tour constructor and the navigator of one
/// planning run.
///
/// Not `Sync`: every run owns its own tie-breaker.
pub struct TieBreaker {
    seed: u64,
    mode: TieBreakMode,
    stream: SmallRng,
    decisions: u64,
}

impl TieBreaker {
    pub fn new(seed: u64, mode: TieBreakMode) -> Self {
        Self {
            seed,
            mode,
            stream: SmallRng::seed_from_u64(seed),
            decisions: 0,
        }
    }

    /// Shorthand for the reference behaviour.
    pub fn reseeded(seed: u64) -> Self {
        Self::new(seed, TieBreakMode::Reseeded)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mode(&self) -> TieBreakMode {
        self.mode
    }

    /// Number of decisions taken so far.
    pub fn decisions(&self) -> u64 {
        self.decisions
    }

    /// Choose one of `candidates`.  Returns `None` if `candidates` is empty.
    pub fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        self.decisions += 1;
        match self.mode {
            TieBreakMode::Reseeded => pick(self.seed, candidates),
            TieBreakMode::Stream   => draw(&mut self.stream, candidates),
        }
    }
}

impl std::fmt::Debug for TieBreaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TieBreaker")
            .field("seed", &self.seed)
            .field("mode", &self.mode)
            .field("decisions", &self.decisions)
            .finish()
    }
}
