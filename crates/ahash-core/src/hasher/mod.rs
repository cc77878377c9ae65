//! Hasher module: SHA-256 digests of matched files
//!
//! Each file is read whole into memory and hashed; digests are lowercase hex.

mod batch;
mod digest;

pub use batch::{hash_batch, BatchOutcome, FileFailure, HashRecord};
pub use digest::{compute_file_hash, content_hash};

#[cfg(test)]
mod tests;
