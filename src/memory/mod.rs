// Mon Feb 02 2026 - Alex

pub mod page;
pub mod region;
pub mod error;

pub use page::{align_up, page_size};
pub use region::GuardedRegion;
pub use error::MemoryError;
