// Wed Feb 04 2026 - Alex

pub mod pattern;
pub mod memory;
pub mod scanner;
pub mod bench;
pub mod corpus;
pub mod utils;

pub use pattern::Pattern;
pub use memory::GuardedRegion;
pub use scanner::{Registry, Scanner};
pub use bench::{Driver, RunReport, TrialSource};
