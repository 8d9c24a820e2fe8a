// File: src/controller.rs
//! Run pipeline.
//!
//! Fetches the wishlist, resolves a release date per item, then hands the
//! results to the calendar, report, history and chart writers. Items are
//! processed sequentially in ascending id order; the only state shared
//! across items is the read-only `InferenceContext`.

use crate::calendar;
use crate::charts;
use crate::client::WishlistClient;
use crate::config::Config;
use crate::context::AppContext;
use crate::history::{DayCounts, History};
use crate::model::{DateResolution, InferenceContext, ItemKind, WishlistItem};
use crate::report;
use crate::storage::LocalStorage;
use anyhow::{Context, Result};
use chrono::Utc;
use std::time::Duration;

pub const ICS_FILE: &str = "wishlist.ics";
pub const HISTORY_CHART_FILE: &str = "wishlist_history_chart.png";
pub const HISTORY_STACK_PLOT_FILE: &str = "wishlist_history_stack_plot.png";

/// Run-level counters, also recorded to the history store.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub total: u32,
    pub prerelease: u32,
    pub resolved: u32,
    pub filtered: u32,
    pub failed: u32,
}

pub async fn run(
    ctx: &dyn AppContext,
    config: &Config,
    client: &WishlistClient,
) -> Result<RunSummary> {
    // Captured once, so every date comparison in this run agrees on what
    // "today" means.
    let now = Utc::now();
    let engine = InferenceContext::new(now);

    let raw_items = client
        .fetch_wishlist(
            &config.profile,
            &config.locale,
            config.max_pages,
            Duration::from_secs(config.page_delay_secs),
        )
        .await?;
    log::info!("Fetched {} wishlist entries", raw_items.len());

    let mut summary = RunSummary::default();
    let mut events = Vec::new();
    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for (id, raw) in &raw_items {
        summary.total += 1;
        let Some(item) = WishlistItem::from_raw(*id, raw) else {
            log::warn!("Skipping malformed wishlist entry {}", id);
            continue;
        };
        if item.prerelease {
            summary.prerelease += 1;
        }

        match engine.resolve(&item)? {
            None => {}
            Some(DateResolution::Filtered) => summary.filtered += 1,
            Some(DateResolution::Failed { raw: unparsed }) => {
                summary.failed += 1;
                failures.push(format!("{}\t\t{}", item.name, unparsed));
            }
            Some(DateResolution::Resolved { date, note }) => {
                summary.resolved += 1;
                successes.push(format!("{}\t\t{}", item.name, date.format("%Y-%m-%d")));
                if item.kind == ItemKind::Dlc && !config.include_dlc {
                    continue;
                }
                events.push(calendar::build_event(&item, date, note.as_deref(), now));
            }
        }
    }

    let output_dir = ctx.get_output_dir()?;

    report::write_success(&output_dir, &successes)?;
    report::write_failures(&output_dir, &failures)?;

    let cal = calendar::build_calendar(events);
    let ics_path = output_dir.join(ICS_FILE);
    LocalStorage::atomic_write(&ics_path, cal.to_string())
        .with_context(|| format!("Failed to write {}", ics_path.display()))?;

    let history = History::record(
        ctx,
        now.date_naive(),
        DayCounts {
            prerelease: summary.prerelease,
            total: summary.total,
        },
    )?;

    charts::render_line_chart(&history, &output_dir.join(HISTORY_CHART_FILE), now)?;
    charts::render_stack_plot(&history, &output_dir.join(HISTORY_STACK_PLOT_FILE), now)?;

    log::info!(
        "Resolved {} dates ({} filtered, {} failed) out of {} items, {} prerelease",
        summary.resolved,
        summary.filtered,
        summary.failed,
        summary.total,
        summary.prerelease
    );

    Ok(summary)
}
