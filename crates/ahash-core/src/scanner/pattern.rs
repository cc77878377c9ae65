//! Glob pattern construction

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{Error, Result};

/// Build the file name pattern for an extension filter
///
/// `"*"` yields `*.*`, i.e. every name containing at least one dot.
#[must_use]
pub fn file_pattern(extension: &str) -> String {
    format!("*.{extension}")
}

/// Compile a file name pattern; `*` never crosses a path separator
///
/// Only `*`, `?`, `[...]` and `\` escapes are special. Braces match
/// literally rather than as `{a,b}` alternation.
pub(crate) fn compile(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(&literal_braces(pattern))
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| Error::GlobPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn literal_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' | '}' if !in_class => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }

    out
}
