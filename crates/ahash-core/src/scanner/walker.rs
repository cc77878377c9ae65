//! File walker: Lists matching files in a single directory

use std::path::{Path, PathBuf};

use globset::GlobMatcher;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::pattern::{compile, file_pattern};
use crate::config::ALL_EXTENSIONS;
use crate::error::Result;

/// A file matched by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    pub path: PathBuf,
    /// Base name, used as the report key
    pub name: String,
}

impl MatchedFile {
    /// Build a matched file from a path, taking the name from its last component
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// Scanner for matching files in one directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    extension: String,
}

impl Scanner {
    /// Create a new scanner matching every extension in `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: ALL_EXTENSIONS.to_string(),
        }
    }

    /// Only match files ending in `.<extension>`
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The file name pattern this scanner matches
    #[must_use]
    pub fn pattern(&self) -> String {
        file_pattern(&self.extension)
    }

    /// List matching regular files, sorted by file name
    ///
    /// Symlinks are followed. A matching entry that cannot be inspected
    /// (e.g. a dangling symlink) is still returned so that hashing reports
    /// it; non-matching ones are skipped. A directory that cannot be read
    /// yields no matches.
    ///
    /// # Errors
    /// Returns an error if the pattern is malformed.
    pub fn scan(&self) -> Result<Vec<MatchedFile>> {
        let pattern = self.pattern();
        let matcher = compile(&pattern)?;
        let root = self
            .root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone());

        let mut files = Vec::new();
        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    warn!("Cannot read {}: {}", root.display(), e);
                    return Ok(Vec::new());
                }
                Err(e) => {
                    match e.path().filter(|path| is_match(&matcher, path)) {
                        Some(path) => {
                            debug!("Matched uninspectable entry {}", path.display());
                            files.push(MatchedFile::from_path(path));
                        }
                        None => warn!("Skipping entry in {}: {}", root.display(), e),
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() || !matcher.is_match(entry.file_name()) {
                continue;
            }

            debug!("Matched {}", entry.path().display());
            files.push(MatchedFile::from_path(entry.into_path()));
        }

        Ok(files)
    }

    /// Get the directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_match(matcher: &GlobMatcher, path: &Path) -> bool {
    path.file_name().is_some_and(|name| matcher.is_match(name))
}
