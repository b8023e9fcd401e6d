//! Display-text helpers shared by the search facades.
//!
//! Every sub-domain exposes a read-only search that narrows its collection by
//! substring match over fields rendered as text. The renderings here are the
//! exact forms the presentation layer displays, so a term that matches what a
//! user sees on screen matches the record.

use chrono::{Datelike, NaiveDate};

/// Case-insensitive substring match. An empty term matches everything.
pub fn contains_ci(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Render an amount in smallest currency units as decimal text, e.g.
/// `20000` -> `"200.00"`.
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Render a date long-form with an ordinal day, e.g. `"July 5th, 2023"`.
///
/// This is the display format the invoice views use, and therefore the form
/// the invoice search facade matches due dates against.
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{} {day}{suffix}, {}", date.format("%B"), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ci_ignores_case() {
        assert!(contains_ci("Jane Smith", "jane"));
        assert!(contains_ci("jane smith", "SMITH"));
        assert!(!contains_ci("Jane Smith", "zzz"));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(contains_ci("anything", ""));
        assert!(contains_ci("", ""));
    }

    #[test]
    fn format_cents_renders_two_decimals() {
        assert_eq!(format_cents(20000), "200.00");
        assert_eq!(format_cents(150), "1.50");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(0), "0.00");
    }

    #[test]
    fn long_date_uses_ordinal_days() {
        let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(long_date(d(2023, 7, 5)), "July 5th, 2023");
        assert_eq!(long_date(d(2023, 7, 1)), "July 1st, 2023");
        assert_eq!(long_date(d(2023, 6, 22)), "June 22nd, 2023");
        assert_eq!(long_date(d(2023, 6, 23)), "June 23rd, 2023");
        assert_eq!(long_date(d(2023, 6, 11)), "June 11th, 2023");
        assert_eq!(long_date(d(2023, 6, 13)), "June 13th, 2023");
    }
}
