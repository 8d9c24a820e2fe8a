// File: ./src/model/parser.rs
//! Release-string date parsing.
//!
//! Consumes the normalized output of the inference engine's substitution
//! stage and turns it into a concrete calendar date. Two policies apply
//! throughout: when no day is given, the last day of the month is used, and
//! when the year is missing, the nearest future occurrence is preferred.

use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, PartialEq)]
enum Token {
    Month(u32),
    /// A digit run: value plus digit count, so `2025` and `25` stay apart.
    Number(u32, usize),
}

fn parse_month_name(s: &str) -> Option<u32> {
    match s {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Split a lowercased string into month-name and number tokens. Anything
/// that is neither (punctuation, whitespace) acts as a separator. A word
/// that is not a month name makes the whole string unparseable.
fn tokenize(input: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            let value = digits.parse::<u32>().ok()?;
            tokens.push(Token::Number(value, digits.len()));
        } else if c.is_alphabetic() {
            let mut word = String::new();
            while let Some(&a) = chars.peek() {
                if !a.is_alphabetic() {
                    break;
                }
                word.push(a);
                chars.next();
            }
            tokens.push(Token::Month(parse_month_name(&word)?));
        } else {
            chars.next();
        }
    }

    if tokens.is_empty() { None } else { Some(tokens) }
}

/// Last day of the given month, or `None` for an out-of-range month.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).map(|d| d - Duration::days(1))
}

/// Parse a normalized release string into a calendar date.
///
/// Returns `None` when the string does not describe a date. `today` anchors
/// the prefer-future policy for strings without a year.
pub fn parse_release_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let tokens = tokenize(&input.to_lowercase())?;
    let year_first = matches!(tokens.first(), Some(Token::Number(_, 4)));

    let mut year: Option<i32> = None;
    let mut month: Option<u32> = None;
    let mut smalls: Vec<u32> = Vec::new();

    for token in &tokens {
        match token {
            Token::Month(m) => {
                if month.is_some() {
                    return None;
                }
                month = Some(*m);
            }
            Token::Number(value, 4) => {
                if year.is_some() {
                    return None;
                }
                year = Some(*value as i32);
            }
            Token::Number(value, _) => smalls.push(*value),
        }
    }

    match (year, month, smalls.as_slice()) {
        // Named month with explicit day ("26 aug, 2025").
        (Some(y), Some(m), [d]) => NaiveDate::from_ymd_opt(y, m, *d),
        // Named month only ("aug 2026") resolves to the month's last day.
        (Some(y), Some(m), []) => last_day_of_month(y, m),
        // All-numeric with a day: "2025 . 8 . 6" reads year-month-day,
        // "6 8 2025" reads day-month (month-first only if day-month is
        // impossible).
        (Some(y), None, [a, b]) => {
            let (m, d) = if year_first {
                (*a, *b)
            } else if *b <= 12 {
                (*b, *a)
            } else {
                (*a, *b)
            };
            NaiveDate::from_ymd_opt(y, m, d)
        }
        // Numeric month without a day ("2025 . 8").
        (Some(y), None, [m]) => last_day_of_month(y, *m),
        // Bare year: anchor to the current month; a stale anchor is the
        // forward-roll stage's problem, not ours.
        (Some(y), None, []) => last_day_of_month(y, today.month()),
        // Month and day without a year: this year, or next if already past.
        (None, Some(m), [d]) => {
            let candidate = NaiveDate::from_ymd_opt(today.year(), m, *d)?;
            if candidate < today {
                NaiveDate::from_ymd_opt(today.year() + 1, m, *d)
            } else {
                Some(candidate)
            }
        }
        // Bare month name: next occurrence of that month's last day.
        (None, Some(m), []) => {
            let candidate = last_day_of_month(today.year(), m)?;
            if candidate < today {
                last_day_of_month(today.year() + 1, m)
            } else {
                Some(candidate)
            }
        }
        _ => None,
    }
}
