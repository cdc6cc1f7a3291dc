// Mon Feb 02 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Allocation of {0} bytes failed: {1}")]
    AllocationFailed(usize, std::io::Error),
    #[error("Protection change at offset {0} failed: {1}")]
    ProtectionFailed(usize, std::io::Error),
    #[error("Invalid region size: {0}")]
    InvalidSize(usize),
}
