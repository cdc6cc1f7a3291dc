// Wed Feb 04 2026 - Alex

pub mod cycles;
pub mod trial;
pub mod driver;
pub mod report;

pub use trial::{Trial, TrialSource};
pub use driver::Driver;
pub use report::{ReportRow, RunReport};
