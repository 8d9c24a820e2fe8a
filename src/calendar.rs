// File: ./src/calendar.rs
//! Calendar event building.
//!
//! Thin mapping from resolved wishlist items to all-day VEVENTs. Each event
//! links back to the store page and, for inferred dates, carries the
//! estimation note in its description.

use crate::model::WishlistItem;
use chrono::{DateTime, NaiveDate, Utc};
use icalendar::{Calendar, Component, Event, EventLike};

pub const CALENDAR_NAME: &str = "Steam Wishlist";

/// One all-day calendar entry for a resolved item. The item id doubles as
/// the event UID, which keeps re-imports stable across runs.
pub fn build_event(
    item: &WishlistItem,
    date: NaiveDate,
    note: Option<&str>,
    now: DateTime<Utc>,
) -> Event {
    let mut description = item.store_url();
    if let Some(note) = note {
        description.push('\n');
        description.push_str(note);
    }

    let mut event = Event::new();
    event
        .uid(&item.id.to_string())
        .summary(&item.name)
        .description(&description)
        .all_day(date)
        .timestamp(now);
    event.add_property("LAST-MODIFIED", now.format("%Y%m%dT%H%M%SZ").to_string());
    event.add_property("CATEGORIES", "game_release");
    event
}

/// Assemble the full VCALENDAR.
pub fn build_calendar(events: Vec<Event>) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.name(CALENDAR_NAME);
    for event in events {
        calendar.push(event);
    }
    calendar
}
