//! Shared helpers for template rendering: escaping, filenames, date formats.

use chrono::{Datelike, Local, NaiveDate};

/// Format a date the way certificates spell it out ("January 2, 2026").
pub fn format_philippine_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

/// Ledger date format with an ordinal day ("January 2nd, 2026").
pub fn format_ordinal_date(date: NaiveDate) -> String {
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
    format!("{} {}{}, {}", month_name(date.month()), day, suffix, date.year())
}

/// Today's date, spelled out for the "Given this ..." line.
pub fn today_spelled_out() -> String {
    format_philippine_date(Local::now().date_naive())
}

fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTHS[((month.saturating_sub(1)) as usize).min(11)]
}

/// Escape user text dropped into Typst markup blocks.
pub fn escape_typst_markup(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '#' | '[' | ']' | '*' | '_' | '`' | '$' | '<' | '>' | '@' | '~' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Sanitize a string for use in filenames.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !last_dash && !result.is_empty() {
                result.push('-');
                last_dash = true;
            }
        }
    }

    if result.is_empty() {
        return fallback.to_string();
    }

    result.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_dates() {
        let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(format_ordinal_date(d(2026, 1, 1)), "January 1st, 2026");
        assert_eq!(format_ordinal_date(d(2026, 1, 2)), "January 2nd, 2026");
        assert_eq!(format_ordinal_date(d(2026, 1, 3)), "January 3rd, 2026");
        assert_eq!(format_ordinal_date(d(2026, 1, 11)), "January 11th, 2026");
        assert_eq!(format_ordinal_date(d(2026, 1, 21)), "January 21st, 2026");
    }

    #[test]
    fn test_spelled_out_date() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
        assert_eq!(format_philippine_date(d), "December 30, 2025");
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_typst_markup("a#b"), "a\\#b");
        assert_eq!(escape_typst_markup("[x]"), "\\[x\\]");
        assert_eq!(escape_typst_markup("plain text"), "plain text");
    }
}
