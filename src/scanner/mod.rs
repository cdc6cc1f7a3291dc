// Tue Feb 03 2026 - Alex

pub mod traits;
pub mod reference;
pub mod skip;
pub mod masked;
pub mod registry;

pub use traits::Scanner;
pub use reference::SimpleScanner;
pub use skip::FirstByteSkipScanner;
pub use masked::MaskedCompareScanner;
pub use registry::{Registry, RegistryError, ScannerEntry};
