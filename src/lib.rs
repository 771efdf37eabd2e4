//! recolor: swap a legacy brand color for its replacement across a component tree
//!
//! This library exposes recolor's core functionality for use in integration and
//! property-based tests. The main binary is at src/main.rs.

pub mod cli;
pub mod color_swap;
pub mod config;
pub mod error_helpers;
pub mod file_processor;
pub mod local_files;
pub mod logger;
pub mod report;
pub mod scanner;
pub mod sweep;

// Re-export commonly used types for convenience
pub use color_swap::{ColorSwap, NEW_COLOR, OLD_COLOR, OLD_COLOR_UPPER};
pub use config::Config;
pub use file_processor::{FileOutcome, FileProcessor};
pub use local_files::{FileSystem, LocalFs};
pub use report::Reporter;
pub use scanner::{Scanner, TARGET_EXTENSION, TARGET_ROOT};
pub use sweep::{Sweep, SweepSummary};
