// Tue Feb 03 2026 - Alex

use crate::pattern::Pattern;
use crate::scanner::Scanner;

/// Exhaustive ground-truth matcher. Tests every start offset in
/// `[0, data.len() - pattern.len()]` against the mask-aware predicate with
/// no prefiltering and no early termination across offsets. Every other
/// algorithm is judged against this result set, so it stays deliberately
/// naive: O(length x patternLength), run once per trial.
pub fn scan(data: &[u8], pattern: &Pattern) -> Vec<usize> {
    let mut results = Vec::new();

    if pattern.is_empty() || data.len() < pattern.len() {
        return results;
    }

    for offset in 0..=(data.len() - pattern.len()) {
        if pattern.matches(&data[offset..]) {
            results.push(offset);
        }
    }

    results
}

/// The baseline entry: binds the pattern in `configure` and runs the
/// reference algorithm over it, demonstrating the configure-then-scan
/// calling convention.
#[derive(Default)]
pub struct SimpleScanner {
    current: Option<Pattern>,
}

impl SimpleScanner {
    pub fn new() -> Self {
        Self { current: None }
    }
}

impl Scanner for SimpleScanner {
    fn name(&self) -> &str {
        "Simple"
    }

    fn configure(&mut self, pattern: &Pattern) {
        self.current = Some(pattern.clone());
    }

    fn scan(&self, data: &[u8], _pattern: &Pattern) -> Vec<usize> {
        match &self.current {
            Some(pattern) => scan(data, pattern),
            None => Vec::new(),
        }
    }
}
