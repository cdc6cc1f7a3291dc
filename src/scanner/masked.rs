// Tue Feb 03 2026 - Alex

use crate::pattern::Pattern;
use crate::scanner::Scanner;

/// Configure-then-scan entry that lowers the bool mask to a byte mask
/// (0xFF exact, 0x00 wildcard) and pre-applies it to the pattern bytes, so
/// the inner comparison is `data & mask == bytes` with no branching on the
/// mask representation.
#[derive(Default)]
pub struct MaskedCompareScanner {
    bytes: Vec<u8>,
    mask: Vec<u8>,
}

impl MaskedCompareScanner {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            mask: Vec::new(),
        }
    }

    fn matches_at(&self, window: &[u8]) -> bool {
        window.iter()
            .zip(self.bytes.iter())
            .zip(self.mask.iter())
            .all(|((&d, &b), &m)| d & m == b)
    }
}

impl Scanner for MaskedCompareScanner {
    fn name(&self) -> &str {
        "MaskedCompare"
    }

    fn configure(&mut self, pattern: &Pattern) {
        self.mask = pattern.mask_as_bytes();
        self.bytes = pattern.bytes().iter()
            .zip(self.mask.iter())
            .map(|(&b, &m)| b & m)
            .collect();
    }

    fn scan(&self, data: &[u8], _pattern: &Pattern) -> Vec<usize> {
        let mut results = Vec::new();

        if self.bytes.is_empty() || data.len() < self.bytes.len() {
            return results;
        }

        for offset in 0..=(data.len() - self.bytes.len()) {
            if self.matches_at(&data[offset..offset + self.bytes.len()]) {
                results.push(offset);
            }
        }

        results
    }
}
