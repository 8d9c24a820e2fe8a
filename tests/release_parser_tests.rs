// Tests for the release-string date parser: accepted shapes, the
// last-day-of-month policy and the prefer-future policy.
use chrono::NaiveDate;
use wishcal::model::parser::{last_day_of_month, parse_release_date};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// A fixed anchor for the prefer-future tests.
fn today() -> NaiveDate {
    date(2025, 8, 7)
}

#[test]
fn iso_dates_parse_exactly() {
    assert_eq!(
        parse_release_date("2099-09-15", today()),
        Some(date(2099, 9, 15))
    );
}

#[test]
fn dot_separated_numeric_dates_parse_year_first() {
    // The shape left behind by the CJK marker substitution.
    assert_eq!(
        parse_release_date("2025 . 8 . 6 .", today()),
        Some(date(2025, 8, 6))
    );
    assert_eq!(
        parse_release_date("2025.12.31", today()),
        Some(date(2025, 12, 31))
    );
}

#[test]
fn year_last_numeric_dates_read_day_first() {
    assert_eq!(
        parse_release_date("6 8 2025", today()),
        Some(date(2025, 8, 6))
    );
    // Falls back to month-first when day-first is impossible.
    assert_eq!(
        parse_release_date("8 15 2025", today()),
        Some(date(2025, 8, 15))
    );
}

#[test]
fn month_and_year_resolve_to_the_last_day() {
    assert_eq!(
        parse_release_date("aug 2026", today()),
        Some(date(2026, 8, 31))
    );
    assert_eq!(
        parse_release_date("feb 2026", today()),
        Some(date(2026, 2, 28))
    );
    // Leap year.
    assert_eq!(
        parse_release_date("feb 2028", today()),
        Some(date(2028, 2, 29))
    );
    // Numeric month, no day.
    assert_eq!(
        parse_release_date("2025 . 8", today()),
        Some(date(2025, 8, 31))
    );
}

#[test]
fn named_month_with_day_and_year() {
    assert_eq!(
        parse_release_date("26 aug, 2025", today()),
        Some(date(2025, 8, 26))
    );
    assert_eq!(
        parse_release_date("aug. 26, 2025", today()),
        Some(date(2025, 8, 26))
    );
    assert_eq!(
        parse_release_date("september 3 2027", today()),
        Some(date(2027, 9, 3))
    );
}

#[test]
fn bare_years_anchor_to_the_current_month() {
    assert_eq!(
        parse_release_date("2026", today()),
        Some(date(2026, 8, 31))
    );
}

#[test]
fn bare_months_prefer_the_future() {
    // December has not passed yet this year.
    assert_eq!(parse_release_date("dec", today()), Some(date(2025, 12, 31)));
    // March has, so it rolls to next year.
    assert_eq!(parse_release_date("mar", today()), Some(date(2026, 3, 31)));
}

#[test]
fn month_and_day_without_year_prefer_the_future() {
    assert_eq!(
        parse_release_date("aug 20", today()),
        Some(date(2025, 8, 20))
    );
    assert_eq!(
        parse_release_date("aug 1", today()),
        Some(date(2026, 8, 1))
    );
}

#[test]
fn rejects_text_that_is_not_a_date() {
    assert_eq!(parse_release_date("hello world", today()), None);
    assert_eq!(parse_release_date("", today()), None);
    assert_eq!(parse_release_date("...", today()), None);
    // A bare day number carries no date information.
    assert_eq!(parse_release_date("15", today()), None);
    // Conflicting duplicate fields.
    assert_eq!(parse_release_date("2025 2026", today()), None);
    assert_eq!(parse_release_date("jan feb 2025", today()), None);
}

#[test]
fn rejects_calendar_invalid_dates() {
    assert_eq!(parse_release_date("feb 30 2025", today()), None);
    assert_eq!(parse_release_date("2025 . 13", today()), None);
    assert_eq!(parse_release_date("2025 . 13 . 5", today()), None);
}

#[test]
fn last_day_of_month_handles_bounds() {
    assert_eq!(last_day_of_month(2025, 12), Some(date(2025, 12, 31)));
    assert_eq!(last_day_of_month(2024, 2), Some(date(2024, 2, 29)));
    assert_eq!(last_day_of_month(2025, 0), None);
    assert_eq!(last_day_of_month(2025, 13), None);
}
