//! ahash-core: Core library for batch file hashing
//!
//! A run is a single linear pass over one directory:
//!
//! - **scanner** - match `<input>/*.<ext>` (non-recursive)
//! - **hasher** - SHA-256 of each matched file, lowercase hex
//! - **report** - write `hashes-output-YYMMDD.txt` and optionally echo records

pub mod config;
pub mod error;
pub mod hasher;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use config::{FailurePolicy, RunConfig, ALL_EXTENSIONS};
pub use error::{Error, Result};
pub use hasher::{compute_file_hash, hash_batch, BatchOutcome, FileFailure, HashRecord};
pub use report::{output_file_name, Report, ReportWriter};
pub use scanner::{MatchedFile, Scanner};
