// Wed Feb 04 2026 - Alex

use crate::bench::cycles;
use crate::bench::report::{ReportRow, RunReport};
use crate::bench::trial::TrialSource;
use crate::scanner::Registry;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

/// Single-pass benchmark loop: for each of `trials` generated inputs, every
/// registered scanner is invoked, timed, and verified against the reference
/// result set. A panic out of a scan call (including a bounds-check panic
/// from reading past the window) is contained at the call boundary and
/// counted as a failure for that scanner on that trial only; neither the
/// trial nor the run aborts. Strictly sequential: no thread may perturb
/// the cycle measurements or the trial buffer mid-verification.
pub struct Driver {
    trials: usize,
}

impl Driver {
    pub fn new(trials: usize) -> Self {
        Self { trials }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn run(&self, source: &mut TrialSource, registry: &mut Registry) -> RunReport {
        let mut total_window_bytes: u64 = 0;

        // Panic output from contained scanner faults would drown the report.
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));

        for trial_index in 0..self.trials {
            let trial = source.generate();
            total_window_bytes += trial.window_len as u64;

            let window = source.window(&trial);

            for entry in registry.entries_mut() {
                let scanner = &mut entry.scanner;

                let start = cycles::now();
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    scanner.configure(&trial.pattern);
                    scanner.scan(window, &trial.pattern)
                }));
                let end = cycles::now();

                match outcome {
                    Ok(offsets) => {
                        entry.elapsed_cycles += end.wrapping_sub(start);

                        let results: HashSet<usize> = offsets.into_iter().collect();
                        if results != trial.expected {
                            entry.failed += 1;
                            log::debug!(
                                "{} failed trial {} ({}): got {} results, expected {}",
                                entry.name(),
                                trial_index,
                                trial.pattern,
                                results.len(),
                                trial.expected.len()
                            );
                        }
                    }
                    Err(_) => {
                        entry.failed += 1;
                        log::debug!(
                            "{} failed trial {} ({}): contained fault",
                            entry.name(),
                            trial_index,
                            trial.pattern
                        );
                    }
                }
            }
        }

        panic::set_hook(previous_hook);

        registry.sort_entries();

        let rows = registry.entries().iter()
            .enumerate()
            .map(|(rank, entry)| ReportRow {
                rank,
                name: entry.name().to_string(),
                elapsed_cycles: entry.elapsed_cycles,
                cycles_per_byte: if total_window_bytes == 0 {
                    0.0
                } else {
                    entry.elapsed_cycles as f64 / total_window_bytes as f64
                },
                failed: entry.failed,
            })
            .collect();

        RunReport {
            rows,
            trials: self.trials,
            total_window_bytes,
        }
    }
}
