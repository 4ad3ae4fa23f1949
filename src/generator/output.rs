//! Generated-file header, atomic writes and freshness checks.

#![allow(missing_docs)]

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use crate::core::errors::{MksError, Result};

pub const GENERATED_MARKER: &str = "// Code generated by mockseam. DO NOT EDIT.";
pub const DIGEST_PREFIX: &str = "// mockseam-digest: ";

/// Header lines for a generated file.
#[must_use]
pub fn header(roots: &[String], digest: &str) -> String {
    format!(
        "{GENERATED_MARKER}\n{DIGEST_PREFIX}{digest}\n// roots: {}\n// include!() this file in the module that declares each root type.\n",
        roots.join(", ")
    )
}

/// Digest recorded in a generated file's header, if it has one.
#[must_use]
pub fn read_digest(text: &str) -> Option<&str> {
    let mut lines = text.lines();
    if lines.next()? != GENERATED_MARKER {
        return None;
    }
    lines
        .take(3)
        .find_map(|line| line.strip_prefix(DIGEST_PREFIX))
        .map(str::trim)
}

/// Result of comparing an on-disk file against freshly computed inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Freshness {
    Current,
    Stale { found: Option<String> },
    Missing,
}

impl Freshness {
    #[must_use]
    pub const fn is_current(&self) -> bool {
        matches!(self, Self::Current)
    }
}

pub fn freshness(path: &Path, expected: &str) -> Result<Freshness> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Freshness::Missing),
        Err(source) => return Err(MksError::io(path, source)),
    };
    Ok(match read_digest(&text) {
        Some(found) if found == expected => Freshness::Current,
        found => Freshness::Stale {
            found: found.map(str::to_string),
        },
    })
}

/// Write `text` to `path` via a sibling temp file and rename.
///
/// An existing file is only replaced when it carries the generated marker.
pub fn write_atomic(path: &Path, text: &str) -> Result<()> {
    match fs::read(path) {
        Ok(existing) if !existing.starts_with(GENERATED_MARKER.as_bytes()) => {
            return Err(MksError::ForeignOutput {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(source) => return Err(MksError::io(path, source)),
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| MksError::io(parent, source))?;
    }

    let tmp_path = temp_path(path);
    let result = (|| {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        file.write_all(text.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(MksError::io(path, source));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Format a written file in place. Formatting is cosmetic; callers log failures.
pub fn run_rustfmt(path: &Path) -> std::result::Result<(), String> {
    let output = Command::new("rustfmt")
        .arg("--edition")
        .arg("2024")
        .arg(path)
        .output()
        .map_err(|e| format!("could not run rustfmt: {e}"))?;
    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }
}
