// File: ./src/model/infer.rs
//! Release-date inference engine.
//!
//! Decides, for each wishlist item, whether a confirmed release timestamp
//! exists or a date must be inferred from free-form text. Text inference
//! runs the raw string through a blocklist check, an ordered substitution
//! table and a year-only shortcut, delegates the actual date parsing, then
//! rolls stale results forward until they are no longer in the past.

use crate::model::item::{DateResolution, WishlistItem};
use crate::model::parser;
use anyhow::{Result, bail};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use regex::Regex;

/// Strings meaning "no date has been announced". A match skips the item
/// without recording a failure.
const BLOCKLIST: &[&str] = &[
    "tbd",
    "tba",
    "to be announced",
    "when it's done",
    "when it's ready",
    "即将推出",
    "即将宣布",
    "coming soon",
];

/// Ordered rewrite rules mapping vague tokens to parseable month anchors.
/// Applied sequentially as literal replacements; a later rule may match text
/// produced by an earlier one, so the order is load-bearing.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("spring", "mar"),
    ("summer", "jun"),
    ("fall", "sep"),
    ("winter", "dec"),
    ("q1", "feb"),
    ("q2", "may"),
    ("q3", "aug"),
    ("q4", "nov"),
    ("第一季度", "feb"),
    ("第二季度", "may"),
    ("第三季度", "aug"),
    ("第四季度", "nov"),
    ("年", "."),
    ("月", "."),
    ("日", "."),
    ("号", "."),
];

/// Matches a substituted string that kept nothing but a year and a trailing
/// separator ("2099." or "2099 .").
const YEAR_ONLY_PATTERN: &str = r"^(\d{4})\s*\.$";

/// Upper bound on forward-roll hops (roughly 200 years of two-month jumps).
/// Exceeding it means the clock or the parsed date is malformed.
const MAX_ROLL_HOPS: u32 = 1200;

/// Lowercase a raw release string and run it through the substitution table.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_lowercase();
    for (from, to) in SUBSTITUTIONS {
        text = text.replace(from, to);
    }
    text.trim().to_string()
}

/// Immutable per-run inference inputs. `now` is captured once at run start
/// so every date comparison within a run agrees on what "today" means.
#[derive(Debug)]
pub struct InferenceContext {
    now: DateTime<Utc>,
    year_only: Regex,
}

impl InferenceContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            // The pattern is a vetted constant; compilation cannot fail.
            year_only: Regex::new(YEAR_ONLY_PATTERN).unwrap(),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Resolve one item.
    ///
    /// `Ok(None)` is the "insufficient data" outcome: the item carries
    /// neither a confirmed timestamp nor a usable release string, and
    /// produces no event and no failure record. The `Err` arm only fires on
    /// the forward-roll iteration cap.
    pub fn resolve(&self, item: &WishlistItem) -> Result<Option<DateResolution>> {
        if let Some(ts) = item.release_timestamp {
            // A confirmed timestamp always wins over free-form text.
            let Some(dt) = DateTime::from_timestamp(ts, 0) else {
                bail!(
                    "item {} carries an out-of-range release timestamp: {}",
                    item.id,
                    ts
                );
            };
            return Ok(Some(DateResolution::Resolved {
                date: dt.date_naive(),
                note: None,
            }));
        }

        if !item.prerelease {
            return Ok(None);
        }
        let Some(raw) = item.release_string.as_deref() else {
            return Ok(None);
        };
        self.infer_from_text(raw).map(Some)
    }

    /// Run the text-inference stages on one raw release string.
    fn infer_from_text(&self, raw: &str) -> Result<DateResolution> {
        let lowered = raw.to_lowercase();
        if BLOCKLIST.iter().any(|needle| lowered.contains(needle)) {
            return Ok(DateResolution::Filtered);
        }

        let substituted = normalize(raw);
        let candidate = self
            .year_only_anchor(&substituted)
            .unwrap_or(substituted);

        let Some(parsed) = parser::parse_release_date(&candidate, self.today()) else {
            return Ok(DateResolution::Failed {
                raw: raw.to_string(),
            });
        };

        let date = self.roll_forward(parsed)?;
        Ok(DateResolution::Resolved {
            date,
            note: Some(format!("Estimation based on \"{}\"", raw)),
        })
    }

    /// Year-only shortcut: a string that substitution reduced to `<year> .`
    /// becomes a literal date: mid-September of that year while that is
    /// still ahead, the last day of the year otherwise.
    fn year_only_anchor(&self, text: &str) -> Option<String> {
        let caps = self.year_only.captures(text)?;
        let year = caps[1].parse::<i32>().ok()?;
        let anchor = NaiveDate::from_ymd_opt(year, 9, 15)?;
        if anchor > self.today() {
            Some(format!("{}-09-15", year))
        } else {
            Some(format!("{}-12-31", year))
        }
    }

    /// Advance a stale date in last-day-of-month-after-next hops until it
    /// lands at or after today. A no-op for dates already at or past today.
    fn roll_forward(&self, start: NaiveDate) -> Result<NaiveDate> {
        let today = self.today();
        let mut date = start;
        let mut hops = 0;
        while date < today {
            hops += 1;
            if hops > MAX_ROLL_HOPS {
                bail!(
                    "forward-roll from {} did not converge on today ({}) within {} hops",
                    start,
                    today,
                    MAX_ROLL_HOPS
                );
            }
            date = last_day_of_month_after_next(date);
        }
        Ok(date)
    }
}

/// Last day of the month two months ahead (Mar 1 -> May 31).
pub fn last_day_of_month_after_next(date: NaiveDate) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() + 3;
    if month > 12 {
        month -= 12;
        year += 1;
    }
    // Month is normalized into 1..=12 above; construction cannot fail.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap() - Duration::days(1)
}
