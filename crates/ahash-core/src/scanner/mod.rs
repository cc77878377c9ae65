//! Scanner module: File enumeration
//!
//! Matches the direct children of a directory against `*.<ext>`.
//! Subdirectories are never descended into.

mod pattern;
mod walker;

pub use pattern::file_pattern;
pub use walker::{MatchedFile, Scanner};

#[cfg(test)]
mod tests;
