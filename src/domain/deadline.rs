use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NOT_SPECIFIED: &str = "Not Specified";

/// Storage format for deadlines. Applied once, when a record is created.
pub const CANONICAL_FORMAT: &str = "%d-%m-%Y";

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").unwrap());

static DAY_FIRST_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})[./-](\d{1,2})[./-](\d{4}|\d{2})\b").unwrap());

static DAY_MONTH_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?\s+(\d{4}|\d{2})\b",
    )
    .unwrap()
});

static MONTH_NAME_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})(?:st|nd|rd|th)?\s*,?\s+(\d{4}|\d{2})\b",
    )
    .unwrap()
});

fn expand_year(year: i32) -> i32 {
    // Two-digit years are always read as 20YY
    if year < 100 {
        2000 + year
    } else {
        year
    }
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Pulls a date out of an arbitrary string. Day-first by default, `.`, `/`
/// and `-` separators all accepted, two-digit years read as 20YY. The date
/// may sit anywhere inside surrounding prose ("Apply by 12.08.25 11:59 PM").
/// Returns None on anything that does not contain a calendar-valid date.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // ISO before the day-first scan so "2025-08-12" is not read as day 20
    if let Some(date) = ISO_DATE.captures_iter(raw).find_map(|c| {
        let year: i32 = c[1].parse().ok()?;
        let month: u32 = c[2].parse().ok()?;
        let day: u32 = c[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }) {
        return Some(date);
    }

    if let Some(date) = DAY_FIRST_DATE.captures_iter(raw).find_map(|c| {
        let day: u32 = c[1].parse().ok()?;
        let month: u32 = c[2].parse().ok()?;
        let year: i32 = c[3].parse().ok()?;
        NaiveDate::from_ymd_opt(expand_year(year), month, day)
    }) {
        return Some(date);
    }

    if let Some(date) = DAY_MONTH_NAME.captures_iter(raw).find_map(|c| {
        let day: u32 = c[1].parse().ok()?;
        let month = month_number(&c[2])?;
        let year: i32 = c[3].parse().ok()?;
        NaiveDate::from_ymd_opt(expand_year(year), month, day)
    }) {
        return Some(date);
    }

    MONTH_NAME_DAY.captures_iter(raw).find_map(|c| {
        let month = month_number(&c[1])?;
        let day: u32 = c[2].parse().ok()?;
        let year: i32 = c[3].parse().ok()?;
        NaiveDate::from_ymd_opt(expand_year(year), month, day)
    })
}

/// Canonical storage form of a deadline, or an empty string when the input
/// holds no parseable date.
pub fn normalize_date(raw: &str) -> String {
    match parse_flexible_date(raw) {
        Some(date) => date.format(CANONICAL_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Display form of a stored deadline. The stored value passes through
/// verbatim; only the empty case gets the placeholder.
pub fn display_date(stored: &str) -> String {
    if stored.trim().is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        stored.to_string()
    }
}

/// Urgency bucket for a displayed deadline, as a css color name.
pub fn deadline_color(deadline: &str) -> &'static str {
    deadline_color_on(deadline, Local::now().date_naive())
}

pub fn deadline_color_on(deadline: &str, today: NaiveDate) -> &'static str {
    if deadline.trim().is_empty() || deadline == NOT_SPECIFIED {
        return "gray";
    }
    let Some(deadline_date) = parse_flexible_date(deadline) else {
        return "gray";
    };

    let delta = (deadline_date - today).num_days();
    if delta < 0 {
        "red"
    } else if delta <= 1 {
        "orange"
    } else if delta <= 3 {
        "yellow"
    } else {
        "green"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parse_day_first_two_digit_year() {
        assert_eq!(parse_flexible_date("12.08.25"), Some(date(2025, 8, 12)));
        assert_eq!(parse_flexible_date("12/08/25"), Some(date(2025, 8, 12)));
        assert_eq!(parse_flexible_date("1-9-25"), Some(date(2025, 9, 1)));
    }

    #[test]
    fn parse_day_first_four_digit_year() {
        assert_eq!(parse_flexible_date("12-08-2025"), Some(date(2025, 8, 12)));
        assert_eq!(parse_flexible_date("31/12/1999"), Some(date(1999, 12, 31)));
    }

    #[test]
    fn parse_iso() {
        assert_eq!(parse_flexible_date("2025-08-12"), Some(date(2025, 8, 12)));
    }

    #[test]
    fn parse_month_names() {
        assert_eq!(parse_flexible_date("12 Aug 2025"), Some(date(2025, 8, 12)));
        assert_eq!(
            parse_flexible_date("12th August, 2025"),
            Some(date(2025, 8, 12))
        );
        assert_eq!(
            parse_flexible_date("Aug 12, 2025"),
            Some(date(2025, 8, 12))
        );
    }

    #[test]
    fn parse_from_surrounding_prose() {
        assert_eq!(
            parse_flexible_date("Apply by 12.08.25 before 11:59 PM IST"),
            Some(date(2025, 8, 12))
        );
        assert_eq!(
            parse_flexible_date("Deadline: 5th September 2025 (tentative)"),
            Some(date(2025, 9, 5))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("   "), None);
        assert_eq!(parse_flexible_date("as soon as possible"), None);
        assert_eq!(parse_flexible_date("31.02.25"), None);
        assert_eq!(parse_flexible_date("40.13.25"), None);
    }

    #[test]
    fn normalize_expands_two_digit_years() {
        assert_eq!(normalize_date("12.08.25"), "12-08-2025");
        assert_eq!(normalize_date("01.01.00"), "01-01-2000");
    }

    #[test]
    fn normalize_failure_is_empty() {
        assert_eq!(normalize_date("rolling basis"), "");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn normalize_is_idempotent_on_canonical_output() {
        for raw in ["12.08.25", "2025-08-12", "5 Sep 2025", "1/1/2026"] {
            let once = normalize_date(raw);
            assert_eq!(normalize_date(&once), once);
        }
    }

    #[test]
    fn display_placeholder() {
        assert_eq!(display_date(""), NOT_SPECIFIED);
        assert_eq!(display_date("  "), NOT_SPECIFIED);
        assert_eq!(display_date("12-08-2025"), "12-08-2025");
    }

    #[test]
    fn color_gray_for_missing_or_unparseable() {
        let today = date(2025, 8, 8);
        assert_eq!(deadline_color_on("", today), "gray");
        assert_eq!(deadline_color_on(NOT_SPECIFIED, today), "gray");
        assert_eq!(deadline_color_on("whenever", today), "gray");
    }

    #[test]
    fn color_red_for_past() {
        let today = date(2025, 8, 13);
        assert_eq!(deadline_color_on("12-08-2025", today), "red");
    }

    #[test]
    fn color_orange_for_today_and_tomorrow() {
        let today = date(2025, 8, 12);
        assert_eq!(deadline_color_on("12-08-2025", today), "orange");
        assert_eq!(deadline_color_on("13-08-2025", today), "orange");
    }

    #[test]
    fn color_yellow_within_three_days() {
        let today = date(2025, 8, 10);
        assert_eq!(deadline_color_on("12-08-2025", today), "yellow");
        assert_eq!(deadline_color_on("13-08-2025", today), "yellow");
    }

    #[test]
    fn color_green_when_safe() {
        let today = date(2025, 8, 1);
        assert_eq!(deadline_color_on("12-08-2025", today), "green");
    }

    #[test]
    fn normalize_then_classify_round_trip() {
        let normalized = normalize_date("12.08.25");
        assert_eq!(normalized, "12-08-2025");
        assert_eq!(deadline_color_on(&normalized, date(2025, 8, 1)), "green");
        assert_eq!(deadline_color_on(&normalized, date(2025, 8, 14)), "red");
    }
}
