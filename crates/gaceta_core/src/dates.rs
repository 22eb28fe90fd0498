use chrono::{DateTime, LocalResult, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII digits only; `\d` would also admit Unicode digits the numeric
    // parses below cannot handle.
    static ref DMY: Regex = Regex::new(r"^\s*([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})\s*$").unwrap();
}

/// Parses a `dd/mm/yyyy` token into UTC midnight of that calendar day.
///
/// Malformed tokens (and impossible dates like 31/02) fall back to the
/// current instant; callers treat that as "document carried a bad date",
/// not as a real article date.
pub fn parse(token: &str) -> DateTime<Utc> {
    let Some(caps) = DMY.captures(token) else {
        return Utc::now();
    };
    let day: u32 = caps[1].parse().unwrap();
    let month: u32 = caps[2].parse().unwrap();
    let year: i32 = caps[3].parse().unwrap();

    match Utc.with_ymd_and_hms(year, month, day, 0, 0, 0) {
        LocalResult::Single(date) => date,
        _ => Utc::now(),
    }
}

/// Renders a date as `Month D, YYYY` ("January 5, 2025"). Always formatted
/// from the UTC value, so the output does not depend on the viewer's
/// timezone.
pub fn format(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Renders a date back into the document's own `dd/mm/yyyy` shape.
pub fn format_dmy(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}
