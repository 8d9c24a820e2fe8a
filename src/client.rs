// File: ./src/client.rs
//! Wishlist fetching.
//!
//! Paginates the storefront wishlist endpoint until an empty page shows up,
//! merging everything into one id-keyed map. Each request carries its own
//! timeout and consecutive pages are paced to stay under the rate limit.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://store.steampowered.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct WishlistClient {
    http: reqwest::Client,
    base_url: String,
}

impl WishlistClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Numeric profiles address the `profiles` route, vanity names the `id`
    /// route.
    fn wishlist_url(&self, profile: &str) -> String {
        if !profile.is_empty() && profile.chars().all(|c| c.is_ascii_digit()) {
            format!("{}/wishlist/profiles/{}/wishlistdata/", self.base_url, profile)
        } else {
            format!("{}/wishlist/id/{}/wishlistdata/", self.base_url, profile)
        }
    }

    /// Fetch every wishlist page and merge them into one map. The BTreeMap
    /// key gives downstream processing its ascending-id order.
    pub async fn fetch_wishlist(
        &self,
        profile: &str,
        locale: &str,
        max_pages: u32,
        page_delay: Duration,
    ) -> Result<BTreeMap<u64, Value>> {
        let url = self.wishlist_url(profile);
        let mut items = BTreeMap::new();

        for page in 0..max_pages {
            let page_param = page.to_string();
            let response = self
                .http
                .get(&url)
                .query(&[("l", locale), ("p", page_param.as_str())])
                .send()
                .await
                .with_context(|| format!("Wishlist request failed (page {})", page))?;
            let body: Value = response
                .json()
                .await
                .with_context(|| format!("Wishlist page {} is not valid JSON", page))?;

            if page_is_empty(&body) {
                // No more remaining items.
                break;
            }
            if body.get("success").is_some() {
                bail!("Wishlist for '{}' is not public", profile);
            }
            let Value::Object(map) = body else {
                bail!("Unexpected wishlist payload shape on page {}", page);
            };
            for (key, value) in map {
                let Ok(id) = key.parse::<u64>() else {
                    log::warn!("Skipping non-numeric app id '{}'", key);
                    continue;
                };
                items.insert(id, value);
            }
            log::debug!("Fetched wishlist page {} ({} items so far)", page, items.len());

            if page + 1 < max_pages && !page_delay.is_zero() {
                tokio::time::sleep(page_delay).await;
            }
        }

        Ok(items)
    }
}

fn page_is_empty(body: &Value) -> bool {
    match body {
        Value::Object(map) => map.is_empty(),
        Value::Array(list) => list.is_empty(),
        Value::Null => true,
        _ => false,
    }
}
