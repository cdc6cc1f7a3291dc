// Tue Feb 03 2026 - Alex

use crate::pattern::Pattern;

/// A pluggable scanning algorithm. The driver calls `configure` once per
/// trial before `scan`, and passes the pattern to `scan` as well, so an
/// implementation may bind the target up front (configure-then-scan) or take
/// it per call and ignore `configure` entirely. Both conventions get
/// identical treatment.
///
/// `scan` returns the start offsets of every full match it believes exists
/// in `data`. No ordering is required and duplicates are tolerated; the
/// driver normalizes results through set conversion. Implementations must
/// not read outside `data`: the window is flanked by guard pages and an
/// out-of-bounds read is expected to fault, which the driver contains and
/// counts as a failure.
pub trait Scanner {
    /// Stable display name used in the report.
    fn name(&self) -> &str;

    /// Bind the current pattern. Optional; stateless scanners ignore it.
    fn configure(&mut self, _pattern: &Pattern) {}

    fn scan(&self, data: &[u8], pattern: &Pattern) -> Vec<usize>;
}
