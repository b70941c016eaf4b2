//! Free-form date expression resolution for the schedule command.
//!
//! Expressions are tried in a fixed order, first match wins: the literal
//! keywords `today`/`tomorrow`, a day-of-week name with an optional
//! `next`/`n` qualifier, a `"<N> days"` offset, then a literal
//! `YYYY-MM-DD` date. `None` means the expression is unparseable.

use chrono::{Datelike, Days, NaiveDate};

const DOW_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

pub fn resolve(expr: &str, today: NaiveDate) -> Option<NaiveDate> {
    specials_to_date(expr, today)
        .or_else(|| dow_to_date(expr, today))
        .or_else(|| days_to_date(expr, today))
        .or_else(|| parse_date(expr))
}

fn specials_to_date(expr: &str, today: NaiveDate) -> Option<NaiveDate> {
    if expr.eq_ignore_ascii_case("today") {
        return Some(today);
    }
    if expr.eq_ignore_ascii_case("tomorrow") {
        return today.checked_add_days(Days::new(1));
    }
    None
}

/// Resolves a weekday name to its next occurrence strictly after today.
/// A leading `next` (or `n`) pushes the result out one more week.
pub fn dow_to_date(expr: &str, today: NaiveDate) -> Option<NaiveDate> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    let requested = tokens.last()?;
    let requested_dow = DOW_NAMES
        .iter()
        .position(|name| requested.eq_ignore_ascii_case(name))? as i64;

    let today_dow = today.weekday().num_days_from_sunday() as i64;

    let mut gap = requested_dow - today_dow;
    if gap <= 0 {
        gap += 7;
    }

    let mut date = today.checked_add_days(Days::new(gap as u64))?;
    if date <= today {
        date = date.checked_add_days(Days::new(7))?;
    }

    if tokens.len() > 1 && (tokens[0].eq_ignore_ascii_case("next") || tokens[0].eq_ignore_ascii_case("n")) {
        date = date.checked_add_days(Days::new(7))?;
    }

    Some(date)
}

fn days_to_date(expr: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lowered = expr.to_ascii_lowercase();
    let number = lowered
        .strip_suffix("days")
        .or_else(|| lowered.strip_suffix("day"))?
        .trim_end();
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let days: u64 = number.parse().ok()?;
    today.checked_add_days(Days::new(days))
}

fn parse_date(expr: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(expr, "%Y-%m-%d").ok()
}
