// Tue Feb 03 2026 - Alex

use crate::scanner::Scanner;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Registry is sealed; cannot register '{0}'")]
    Sealed(String),
    #[error("Scanner name '{0}' is already registered")]
    DuplicateName(String),
}

/// One registered algorithm plus its accumulated statistics. Counters are
/// mutated once per trial during the benchmark phase and read-only during
/// reporting.
pub struct ScannerEntry {
    pub scanner: Box<dyn Scanner>,
    pub elapsed_cycles: u64,
    pub failed: u64,
}

impl ScannerEntry {
    fn new(scanner: Box<dyn Scanner>) -> Self {
        Self {
            scanner,
            elapsed_cycles: 0,
            failed: 0,
        }
    }

    pub fn name(&self) -> &str {
        self.scanner.name()
    }
}

/// Process-wide list of scanner implementations. Built explicitly during a
/// startup phase; `seal` closes it to further registration before the first
/// trial runs. Registration order only sets the pre-sort iteration order.
#[derive(Default)]
pub struct Registry {
    entries: Vec<ScannerEntry>,
    sealed: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            sealed: false,
        }
    }

    /// Registry pre-loaded with the bundled scanners, still open for more.
    pub fn with_default_scanners() -> Self {
        use crate::scanner::{FirstByteSkipScanner, MaskedCompareScanner, SimpleScanner};

        let mut registry = Self::new();
        registry.register(Box::new(SimpleScanner::new())).expect("open registry");
        registry.register(Box::new(FirstByteSkipScanner::new())).expect("open registry");
        registry.register(Box::new(MaskedCompareScanner::new())).expect("open registry");
        registry
    }

    pub fn register(&mut self, scanner: Box<dyn Scanner>) -> Result<(), RegistryError> {
        let name = scanner.name().to_string();

        if self.sealed {
            return Err(RegistryError::Sealed(name));
        }

        if self.entries.iter().any(|e| e.name() == name) {
            return Err(RegistryError::DuplicateName(name));
        }

        log::debug!("Registered scanner '{}'", name);
        self.entries.push(ScannerEntry::new(scanner));
        Ok(())
    }

    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScannerEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [ScannerEntry] {
        &mut self.entries
    }

    /// Rank entries: correctness dominates speed. Stable, so equal entries
    /// keep their registration order.
    pub fn sort_entries(&mut self) {
        self.entries.sort_by(|a, b| {
            a.failed.cmp(&b.failed).then(a.elapsed_cycles.cmp(&b.elapsed_cycles))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::SimpleScanner;

    #[test]
    fn test_register_then_seal() {
        let mut registry = Registry::new();
        registry.register(Box::new(SimpleScanner::new())).unwrap();
        registry.seal();

        let err = registry.register(Box::new(SimpleScanner::new()));
        assert!(matches!(err, Err(RegistryError::Sealed(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = Registry::new();
        registry.register(Box::new(SimpleScanner::new())).unwrap();

        let err = registry.register(Box::new(SimpleScanner::new()));
        assert!(matches!(err, Err(RegistryError::DuplicateName(_))));
    }

    #[test]
    fn test_default_scanners() {
        let registry = Registry::with_default_scanners();
        let names: Vec<&str> = registry.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Simple", "FirstByteSkip", "MaskedCompare"]);
        assert!(!registry.is_sealed());
    }

    #[test]
    fn test_sort_failures_dominate_cycles() {
        let mut registry = Registry::with_default_scanners();
        {
            let entries = registry.entries_mut();
            // Simple: slow but correct. FirstByteSkip: fast but wrong.
            entries[0].elapsed_cycles = 9_000;
            entries[1].elapsed_cycles = 10;
            entries[1].failed = 3;
            entries[2].elapsed_cycles = 500;
        }
        registry.sort_entries();

        let names: Vec<&str> = registry.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["MaskedCompare", "Simple", "FirstByteSkip"]);
    }
}
