// Tests for calendar event building and VCALENDAR serialization.
use chrono::{NaiveDate, TimeZone, Utc};
use wishcal::calendar;
use wishcal::model::{ItemKind, WishlistItem};

fn item(id: u64, name: &str) -> WishlistItem {
    WishlistItem {
        id,
        name: name.to_string(),
        kind: ItemKind::Game,
        release_timestamp: None,
        release_string: None,
        prerelease: true,
    }
}

#[test]
fn event_serializes_expected_properties() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 8, 30, 0).unwrap();
    let date = NaiveDate::from_ymd_opt(2030, 11, 30).unwrap();

    let event = calendar::build_event(
        &item(620, "Portal 2"),
        date,
        Some("Estimation based on \"Q4 2030\""),
        now,
    );
    let ics = calendar::build_calendar(vec![event]).to_string();

    assert!(ics.contains("BEGIN:VCALENDAR"));
    assert!(ics.contains("BEGIN:VEVENT"));
    assert!(ics.contains("UID:620"));
    assert!(ics.contains("SUMMARY:Portal 2"));
    assert!(ics.contains("DTSTART"));
    assert!(
        ics.contains("20301130"),
        "expected an all-day date stamp, got:\n{}",
        ics
    );
    assert!(ics.contains("CATEGORIES:game_release"));
    assert!(ics.contains("https://store.steampowered.com/app/620"));
    assert!(ics.contains("LAST-MODIFIED:20250101T083000Z"));
    assert!(ics.contains("END:VEVENT"));
    assert!(ics.contains("END:VCALENDAR"));
}

#[test]
fn events_without_a_note_only_link_the_store_page() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 8, 30, 0).unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

    let event = calendar::build_event(&item(440, "Team Fortress 3"), date, None, now);
    let ics = calendar::build_calendar(vec![event]).to_string();

    assert!(ics.contains("https://store.steampowered.com/app/440"));
    assert!(!ics.contains("Estimation based on"));
}

#[test]
fn calendar_holds_one_event_per_item() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 8, 30, 0).unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

    let events = vec![
        calendar::build_event(&item(10, "Alpha"), date, None, now),
        calendar::build_event(&item(20, "Beta"), date, None, now),
    ];
    let ics = calendar::build_calendar(events).to_string();
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert!(ics.contains("UID:10"));
    assert!(ics.contains("UID:20"));
}
