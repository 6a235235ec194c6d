//! Per-position renderer choice for the mixed list

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Which renderer a list position gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Native,
    Embedded,
}

/// Sticky per-position renderer assignment.
///
/// Scrolling forward, a fresh position past the highest embedded one
/// gets a 1-in-N chance of rendering embedded; every other fresh
/// position renders native. Both outcomes are remembered, so a
/// revisited position never re-rolls and embedded cells keep their
/// spots across scroll direction changes.
#[derive(Debug, Clone)]
pub struct CellPolicy {
    embedded: BTreeSet<usize>,
    native: BTreeSet<usize>,
    one_in: u32,
    rng: StdRng,
}

impl CellPolicy {
    /// Policy with a 1-in-`one_in` embed chance for eligible positions.
    /// `one_in` is clamped to at least 1 (always embed).
    pub fn new(one_in: u32) -> Self {
        Self::with_rng(one_in, StdRng::from_entropy())
    }

    /// Deterministic policy; same seed, same choices.
    pub fn with_seed(one_in: u32, seed: u64) -> Self {
        Self::with_rng(one_in, StdRng::seed_from_u64(seed))
    }

    fn with_rng(one_in: u32, rng: StdRng) -> Self {
        Self {
            embedded: BTreeSet::new(),
            native: BTreeSet::new(),
            one_in: one_in.max(1),
            rng,
        }
    }

    /// Resolve the renderer for `position`, fixing it on first visit.
    ///
    /// Only fresh positions past the highest embedded one (or any fresh
    /// position while none is embedded yet) roll the coin; fresh
    /// positions behind that frontier are revisits in scroll terms and
    /// go native.
    pub fn choose(&mut self, position: usize) -> Renderer {
        if self.embedded.contains(&position) {
            return Renderer::Embedded;
        }
        if self.native.contains(&position) {
            return Renderer::Native;
        }

        let past_frontier = match self.embedded.iter().next_back() {
            Some(&highest) => position > highest,
            None => true,
        };

        if past_frontier && self.rng.gen_ratio(1, self.one_in) {
            self.embedded.insert(position);
            debug!(position, "position assigned to the embedded renderer");
            Renderer::Embedded
        } else {
            self.native.insert(position);
            Renderer::Native
        }
    }

    /// Has `position` ever rendered embedded?
    pub fn is_embedded(&self, position: usize) -> bool {
        self.embedded.contains(&position)
    }
}
