// File: ./src/model/item.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Entry kind as reported by the storefront. Only the Game/DLC distinction
/// matters downstream (DLC events are opt-in).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    Game,
    Dlc,
    Other(String),
}

impl ItemKind {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Game" => ItemKind::Game,
            "DLC" => ItemKind::Dlc,
            other => ItemKind::Other(other.to_string()),
        }
    }
}

/// One wishlist entry, built from a single fetched raw record and consumed
/// exactly once by the inference engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: u64,
    pub name: String,
    pub kind: ItemKind,
    /// Confirmed release timestamp in epoch seconds. A raw value of zero,
    /// an empty string or a missing field all map to `None`.
    pub release_timestamp: Option<i64>,
    /// Free-form release estimate, carried by prerelease entries.
    pub release_string: Option<String>,
    pub prerelease: bool,
}

impl WishlistItem {
    pub fn store_url(&self) -> String {
        format!("https://store.steampowered.com/app/{}", self.id)
    }
}

/// Outcome of release-date inference for a single item. Exactly one variant
/// per item; an item is never both resolved and failed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DateResolution {
    /// A concrete calendar date. `note` carries the estimation basis when
    /// the date came from text rather than a confirmed timestamp.
    Resolved {
        date: NaiveDate,
        note: Option<String>,
    },
    /// The release string matched the blocklist; skipped silently.
    Filtered,
    /// The release string could not be parsed; the original is kept for
    /// diagnostics.
    Failed { raw: String },
}
