// Mon Feb 02 2026 - Alex

use crate::pattern::Pattern;
use rand::rngs::StdRng;
use rand::Rng;

pub const MIN_PATTERN_LENGTH: usize = 5;
pub const MAX_PATTERN_LENGTH: usize = 32;

/// Probability that a given position is an exact byte rather than a wildcard.
const EXACT_PROBABILITY: f64 = 0.9;

/// Draw a random pattern of length [5,32]. Each position is exact with
/// probability 0.9, otherwise a wildcard. A draw that comes out all-wildcard
/// is discarded and redrawn at the same length, so the returned pattern
/// always has at least one exact position.
pub fn random_pattern(rng: &mut StdRng) -> Pattern {
    let length = rng.gen_range(MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH);

    let mut bytes = vec![0u8; length];
    let mut mask = vec![false; length];

    loop {
        let mut any_exact = false;

        for i in 0..length {
            if rng.gen_bool(EXACT_PROBABILITY) {
                bytes[i] = rng.gen_range(0u8..=0xFF);
                mask[i] = true;
                any_exact = true;
            } else {
                bytes[i] = 0;
                mask[i] = false;
            }
        }

        if any_exact {
            break;
        }
    }

    Pattern::new(bytes, mask)
}
