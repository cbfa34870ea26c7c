//! typeseq CLI - conformance harness for the compile-time sequence algorithms
//!
//! Every check in the table is resolved while this crate compiles; running
//! the binary only reports the outcome, in a `file:line OK` / `FAIL` format.
//!
//! # Configuration
//!
//! Create a `typeseq.toml` file in the working directory (or pass `--config`):
//!
//! ```toml
//! print_ok = false
//! full_path = true
//! color = "never"
//! ```
//!
//! Command-line flags and `TYPESEQ_*` environment variables override the file.
//!
//! # Commands
//!
//! - `typeseq run` - Run every suite (the default)
//! - `typeseq run --suite sort --suite slice` - Run selected suites
//! - `typeseq list` - List the suites

pub mod config;
pub mod error;
pub mod harness;
pub mod output;
pub mod suite;

pub use config::{ColorMode, ConfigError, HarnessConfig};
pub use error::CliError;
pub use harness::{Harness, Location, Report};
pub use suite::Suite;
