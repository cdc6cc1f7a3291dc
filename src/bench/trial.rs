// Wed Feb 04 2026 - Alex

use crate::memory::{GuardedRegion, MemoryError};
use crate::pattern::{random_pattern, Pattern};
use crate::scanner::reference;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Maximum start offset of the logical scan window inside the data zone.
/// Varying it per trial shifts pointer alignment without remapping the
/// region.
const MAX_WINDOW_OFFSET: usize = 100;

const MIN_PLANT_COUNT: usize = 2;
const MAX_PLANT_COUNT: usize = 10;

/// One generated benchmark input: a window into the shared region, the
/// pattern to search for, and the ground-truth result set the reference
/// scanner produced over that exact window.
pub struct Trial {
    pub window_offset: usize,
    pub window_len: usize,
    pub pattern: Pattern,
    pub expected: HashSet<usize>,
    pub planted: Vec<usize>,
}

/// Owns the guarded region and the shared PRNG stream for a run, and stamps
/// out trials from them. The region is allocated once; every trial re-derives
/// a window over the same allocation.
pub struct TrialSource {
    region: GuardedRegion,
    rng: StdRng,
    seed: u64,
}

impl TrialSource {
    /// Region of `capacity` random bytes. Seed 0 draws a fresh seed from OS
    /// entropy; the seed actually used is kept for the banner so a failing
    /// run can be replayed.
    pub fn random(capacity: usize, seed: u64) -> Result<Self, MemoryError> {
        let (mut rng, seed) = seeded_rng(seed);
        let mut region = GuardedRegion::new(capacity)?;
        region.fill_random(&mut rng);
        Ok(Self { region, rng, seed })
    }

    /// Region holding `content` as a deterministic corpus, zero-padded at
    /// the front up to the page-rounding boundary.
    pub fn from_corpus(content: &[u8], seed: u64) -> Result<Self, MemoryError> {
        let (rng, seed) = seeded_rng(seed);
        let mut region = GuardedRegion::new(content.len())?;
        region.load_corpus(content);
        Ok(Self { region, rng, seed })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn full_size(&self) -> usize {
        self.region.data_size()
    }

    pub fn window<'a>(&'a self, trial: &Trial) -> &'a [u8] {
        &self.region.data()[trial.window_offset..]
    }

    /// Build the next trial: pick a window, draw a pattern, plant between 2
    /// and 10 copies of its exact bytes at random offsets (wildcard positions
    /// keep whatever the window already holds, so incidental extra matches
    /// are legitimate), then let the reference scanner define the expected
    /// set over the final window content.
    pub fn generate(&mut self) -> Trial {
        let window_offset = self.rng.gen_range(0..=MAX_WINDOW_OFFSET);
        let window_len = self.region.data_size() - window_offset;

        let pattern = random_pattern(&mut self.rng);

        let plant_count = self.rng.gen_range(MIN_PLANT_COUNT..=MAX_PLANT_COUNT);
        let mut planted = Vec::with_capacity(plant_count);

        if pattern.len() <= window_len {
            for _ in 0..plant_count {
                let offset = self.rng.gen_range(0..=(window_len - pattern.len()));

                let window = &mut self.region.data_mut()[window_offset..];
                for (j, (&byte, &exact)) in
                    pattern.bytes().iter().zip(pattern.mask()).enumerate()
                {
                    if exact {
                        window[offset + j] = byte;
                    }
                }

                planted.push(offset);
            }
        }

        let expected: HashSet<usize> =
            reference::scan(self.window_slice(window_offset), &pattern)
                .into_iter()
                .collect();

        Trial {
            window_offset,
            window_len,
            pattern,
            expected,
            planted,
        }
    }

    fn window_slice(&self, window_offset: usize) -> &[u8] {
        &self.region.data()[window_offset..]
    }
}

fn seeded_rng(seed: u64) -> (StdRng, u64) {
    let seed = if seed == 0 { rand::random() } else { seed };
    (StdRng::seed_from_u64(seed), seed)
}
