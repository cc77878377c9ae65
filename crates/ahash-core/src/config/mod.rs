//! Run configuration
//!
//! Built once from the command line, then consumed read-only by the
//! scanner, hasher and report writer.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension filter sentinel meaning "every file with an extension"
pub const ALL_EXTENSIONS: &str = "*";

/// What to do when a matched file cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run on the first unreadable file
    #[default]
    FailFast,
    /// Record the failure and keep hashing the remaining files
    KeepGoing,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail-fast"),
            Self::KeepGoing => write!(f, "keep-going"),
        }
    }
}

/// Configuration for a single hashing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
    pub clean: bool,
    pub verbose: bool,
    pub failure_policy: FailurePolicy,
}

impl RunConfig {
    /// Create a configuration that hashes every file in `input_dir`
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            extension: ALL_EXTENSIONS.to_string(),
            clean: false,
            verbose: false,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Create a configuration, defaulting missing directories to the
    /// process working directory
    ///
    /// # Errors
    /// Returns an error if a directory is missing and the working directory
    /// cannot be determined.
    pub fn resolve(input_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<Self> {
        if let (Some(input), Some(output)) = (&input_dir, &output_dir) {
            return Ok(Self::new(input, output));
        }

        let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;
        Ok(Self::resolve_with(input_dir, output_dir, &cwd))
    }

    /// Same as [`RunConfig::resolve`] with an explicit fallback directory
    #[must_use]
    pub fn resolve_with(
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        fallback: &Path,
    ) -> Self {
        Self::new(
            input_dir.unwrap_or_else(|| fallback.to_path_buf()),
            output_dir.unwrap_or_else(|| fallback.to_path_buf()),
        )
    }

    /// Set the extension filter; a leading dot is ignored and an empty
    /// value means all extensions
    #[must_use]
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = normalize_extension(extension.as_ref());
        self
    }

    /// Omit file names from the report file
    #[must_use]
    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Echo every record to the console
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the failure policy
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Whether the extension filter matches every extension
    #[must_use]
    pub fn matches_all(&self) -> bool {
        self.extension == ALL_EXTENSIONS
    }
}

fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    let ext = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if ext.is_empty() {
        ALL_EXTENSIONS.to_string()
    } else {
        ext.to_string()
    }
}
