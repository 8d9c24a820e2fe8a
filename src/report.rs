// File: ./src/report.rs
//! Success and failure text reports.
//!
//! Plain tab-separated lines, one item per line, written next to the other
//! run outputs. The failure report only exists when there were failures.

use crate::storage::LocalStorage;
use anyhow::{Context, Result};
use std::path::Path;

pub const SUCCESS_FILE: &str = "successful.txt";
pub const FAILURE_FILE: &str = "failed_deductions.txt";

/// Write the resolved-items report, one `name\t\tdate` line per item.
pub fn write_success(output_dir: &Path, lines: &[String]) -> Result<()> {
    let path = output_dir.join(SUCCESS_FILE);
    LocalStorage::atomic_write(&path, lines.join("\n"))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Write the failed-deductions report; skipped entirely when empty.
pub fn write_failures(output_dir: &Path, lines: &[String]) -> Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    let path = output_dir.join(FAILURE_FILE);
    LocalStorage::atomic_write(&path, lines.join("\n"))
        .with_context(|| format!("Failed to write {}", path.display()))
}
