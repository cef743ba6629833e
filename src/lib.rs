// Crate root: declare modules and control visibility
pub mod error;
pub mod input;
pub mod logging;
pub mod map_file;
pub mod progress;
pub mod report;
pub mod symbols;
pub mod utils;

// Re-export commonly used API from the library for binaries/tests
pub use error::ProgressError;
pub use map_file::parse_map;
pub use progress::{calculate, ProgressReport};
pub use symbols::{OriginKind, Symbol};
