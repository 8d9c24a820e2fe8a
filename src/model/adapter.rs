// File: ./src/model/adapter.rs
//! Converts raw storefront wishlist records into `WishlistItem`s.
//!
//! The wishlist endpoint is loosely typed: `release_date` may be a number,
//! a numeric string, an empty string or missing entirely, and the
//! prerelease marker shows up as an integer flag. The adapter absorbs all
//! of that so the rest of the crate only sees typed items.

use crate::model::item::{ItemKind, WishlistItem};
use serde_json::Value;

/// Epoch seconds out of whatever shape the endpoint used today. Zero and
/// negative values count as "no confirmed date".
fn parse_epoch(value: &Value) -> Option<i64> {
    let seconds = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if seconds <= 0.0 {
        return None;
    }
    Some(seconds as i64)
}

fn truthy_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0) != 0.0,
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        _ => false,
    }
}

impl WishlistItem {
    /// Build an item from one raw record. Records without a name are
    /// unusable and yield `None`.
    pub fn from_raw(id: u64, raw: &Value) -> Option<Self> {
        let name = raw.get("name")?.as_str()?.to_string();
        let kind = ItemKind::from_raw(raw.get("type").and_then(Value::as_str).unwrap_or(""));
        let release_timestamp = raw.get("release_date").and_then(parse_epoch);
        let prerelease = truthy_flag(raw.get("prerelease"));
        let release_string = raw
            .get("release_string")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Some(Self {
            id,
            name,
            kind,
            release_timestamp,
            release_string,
            prerelease,
        })
    }
}
