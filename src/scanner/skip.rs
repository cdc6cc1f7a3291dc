// Tue Feb 03 2026 - Alex

use crate::pattern::Pattern;
use crate::scanner::Scanner;

/// Stateless scanner that prefilters on the first exact byte of the pattern
/// before running the full mask-aware comparison. Takes the pattern per
/// call; `configure` is a no-op.
#[derive(Default)]
pub struct FirstByteSkipScanner;

impl FirstByteSkipScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Scanner for FirstByteSkipScanner {
    fn name(&self) -> &str {
        "FirstByteSkip"
    }

    fn scan(&self, data: &[u8], pattern: &Pattern) -> Vec<usize> {
        let mut results = Vec::new();

        if pattern.is_empty() || data.len() < pattern.len() {
            return results;
        }

        let first_exact = pattern.mask().iter()
            .position(|&m| m)
            .unwrap_or(0);

        let first_byte = pattern.bytes()[first_exact];

        for offset in 0..=(data.len() - pattern.len()) {
            if data[offset + first_exact] == first_byte && pattern.matches(&data[offset..]) {
                results.push(offset);
            }
        }

        results
    }
}
