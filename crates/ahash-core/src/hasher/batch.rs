//! Batch hashing under a failure policy

use std::path::PathBuf;

use tracing::{trace, warn};

use super::digest::compute_file_hash;
use crate::config::FailurePolicy;
use crate::error::{Error, Result};
use crate::scanner::MatchedFile;

/// One line of the report: file name and its digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord {
    pub name: String,
    pub digest: String,
}

impl HashRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            digest: digest.into(),
        }
    }
}

/// A file that could not be hashed under [`FailurePolicy::KeepGoing`]
#[derive(Debug)]
pub struct FileFailure {
    pub name: String,
    pub path: PathBuf,
    pub error: Error,
}

/// Results of hashing a batch, in the order the files were given
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<HashRecord>,
    pub failures: Vec<FileFailure>,
}

impl BatchOutcome {
    /// True when every file was hashed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of files processed, hashed or not
    #[must_use]
    pub fn processed(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Hash every file, calling `on_file` after each one
///
/// # Errors
/// Under [`FailurePolicy::FailFast`], returns the first read error and
/// discards every digest computed so far. Under
/// [`FailurePolicy::KeepGoing`] this never fails; unreadable files are
/// collected in [`BatchOutcome::failures`].
pub fn hash_batch<F>(
    files: &[MatchedFile],
    policy: FailurePolicy,
    mut on_file: F,
) -> Result<BatchOutcome>
where
    F: FnMut(&MatchedFile),
{
    let mut outcome = BatchOutcome::default();

    for file in files {
        let result = compute_file_hash(&file.path);
        on_file(file);

        match (result, policy) {
            (Ok(digest), _) => {
                trace!("{}: {}", file.name, digest);
                outcome.records.push(HashRecord::new(&file.name, digest));
            }
            (Err(e), FailurePolicy::FailFast) => return Err(e),
            (Err(e), FailurePolicy::KeepGoing) => {
                warn!("Skipping {}: {}", file.path.display(), e);
                outcome.failures.push(FileFailure {
                    name: file.name.clone(),
                    path: file.path.clone(),
                    error: e,
                });
            }
        }
    }

    Ok(outcome)
}
