//! Trust-database record decoding and the path inclusion filter.

use anyhow::{Context, Result};
use regex::Regex;
use std::borrow::Cow;
use std::io::BufRead;

/// Extract the path from one dump record.
///
/// Blank lines and `#` comments carry no path. Otherwise the path is the
/// second whitespace-separated field (`<source> <path> <size> <digest>`).
pub fn parse_record(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    line.split_whitespace().nth(1)
}

/// Read every record from `reader` and collect the paths they name.
///
/// Invalid UTF-8 in a record is replaced with U+FFFD and logged; only I/O
/// failures abort the read.
pub fn read_paths<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    let mut skipped = 0usize;
    let mut buf = Vec::new();
    let mut lineno = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("failed to read record {}", lineno + 1))?;
        if read == 0 {
            break;
        }
        lineno += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::warn!(record = lineno, "record is not valid UTF-8, invalid bytes replaced");
        }
        match parse_record(&line) {
            Some(path) => paths.push(path.to_string()),
            None => skipped += 1,
        }
    }
    tracing::debug!(records = paths.len(), skipped, "input decoded");
    Ok(paths)
}

/// Decides which raw paths enter the tree. Applied before normalization.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    prefix: String,
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl PathFilter {
    /// Build a filter. Empty regex strings mean "not set".
    pub fn new(prefix: &str, include: &str, exclude: &str) -> Result<Self> {
        Ok(Self {
            prefix: prefix.to_string(),
            include: compile_optional(include, "--include-regex")?,
            exclude: compile_optional(exclude, "--exclude-regex")?,
        })
    }

    /// A filter that accepts every path.
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn accepts(&self, path: &str) -> bool {
        if !self.prefix.is_empty() && !path.starts_with(&self.prefix) {
            return false;
        }
        if let Some(ref include) = self.include {
            if !include.is_match(path) {
                return false;
            }
        }
        if let Some(ref exclude) = self.exclude {
            if exclude.is_match(path) {
                return false;
            }
        }
        true
    }
}

fn compile_optional(pattern: &str, option: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(pattern)
        .map(Some)
        .with_context(|| format!("{option}: invalid regex {pattern:?}"))
}
