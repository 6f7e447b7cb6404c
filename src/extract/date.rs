use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::lexicon::{month_number, BUDDHIST_ERA_OFFSET, THAI_MONTHS};

static NUMERIC_DATE: OnceLock<Regex> = OnceLock::new();
static THAI_MONTH_DATE: OnceLock<Regex> = OnceLock::new();
static CLOCK: OnceLock<Regex> = OnceLock::new();

/// Day, month and four-digit year split by "/" or "-", "15/08/2025".
fn numeric_date_pattern() -> &'static Regex {
    NUMERIC_DATE.get_or_init(|| {
        Regex::new(r"(\d{1,2})[/-](\d{1,2})[/-](\d{4})").expect("invalid numeric date pattern")
    })
}

/// Day, full Thai month name and four-digit Buddhist-era year,
/// "15 สิงหาคม 2568". Thai text often omits the spaces.
fn thai_month_date_pattern() -> &'static Regex {
    THAI_MONTH_DATE.get_or_init(|| {
        let months = THAI_MONTHS.join("|");
        let pattern = format!(r"(\d{{1,2}})\s*({months})\s*(\d{{4}})");
        Regex::new(&pattern).expect("invalid Thai month date pattern")
    })
}

fn clock_pattern() -> &'static Regex {
    CLOCK.get_or_init(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("invalid clock pattern"))
}

/// Finds a calendar date in the text.
///
/// The numeric "D/M/YYYY" grammar is tried before the Thai month grammar.
/// Numeric years are read as Gregorian; Thai month dates carry Buddhist-era
/// years and are shifted back by 543. A match that does not name a real
/// calendar day, "31/02/2025", is treated as no match.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    numeric_date(text).or_else(|| thai_month_date(text))
}

/// Finds an "H:MM" or "HH:MM" clock time in the text.
///
/// Out-of-range readings such as "25:61" are treated as no match.
pub fn extract_time(text: &str) -> Option<NaiveTime> {
    let captures = clock_pattern().captures(text)?;
    let hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = captures[2].parse().ok()?;

    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn numeric_date(text: &str) -> Option<NaiveDate> {
    let captures = numeric_date_pattern().captures(text)?;
    let day: u32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn thai_month_date(text: &str) -> Option<NaiveDate> {
    let captures = thai_month_date_pattern().captures(text)?;
    let day: u32 = captures[1].parse().ok()?;
    let month = month_number(&captures[2])?;
    let buddhist_year: i32 = captures[3].parse().ok()?;

    NaiveDate::from_ymd_opt(buddhist_year - BUDDHIST_ERA_OFFSET, month, day)
}
