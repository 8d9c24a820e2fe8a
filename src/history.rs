// File: ./src/history.rs
//! Day-keyed run history.
//!
//! Stores one record per calendar day: how many wishlist items the run saw
//! and how many of them were still prerelease. Re-running on the same day
//! overwrites that day's record. The whole store is rewritten atomically
//! under a file lock once per run.

use crate::context::AppContext;
use crate::storage::LocalStorage;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCounts {
    pub prerelease: u32,
    pub total: u32,
}

/// The entire history file. Keys are `YYYY-MM-DD` strings, so BTreeMap
/// iteration order is chronological.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct History(pub BTreeMap<String, DayCounts>);

impl History {
    /// Internal helper: read the store from a path without acquiring locks.
    /// A missing or corrupt file yields an empty history.
    fn load_internal(path: &Path) -> Self {
        if path.exists()
            && let Ok(content) = fs::read_to_string(path)
            && let Ok(history) = serde_json::from_str(&content)
        {
            return history;
        }
        Self::default()
    }

    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_history_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        LocalStorage::with_lock(&path, || Ok(Self::load_internal(&path)))
    }

    /// Record (or overwrite) one day's counts and persist the whole store.
    /// Returns the updated history so callers can chart it without a
    /// second read.
    pub fn record(ctx: &dyn AppContext, day: NaiveDate, counts: DayCounts) -> Result<Self> {
        let path = ctx.get_history_path()?;
        LocalStorage::with_lock(&path, || {
            let mut history = Self::load_internal(&path);
            history
                .0
                .insert(day.format("%Y-%m-%d").to_string(), counts);
            let json = serde_json::to_string_pretty(&history)?;
            LocalStorage::atomic_write(&path, json)?;
            Ok(history)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
