use chrono::NaiveDate;
use chrono::NaiveDateTime;

#[rustfmt::skip]
const DATETIMES: [&str; 7] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
];

#[rustfmt::skip]
const DATES: [&str; 2] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
];

/// Parses a wall-clock timestamp without time zone.
/// Date-only values land on midnight.
pub fn parse(cell: &str) -> Option<NaiveDateTime> {
    let cell = cell.trim();
    DATETIMES
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(cell, fmt).ok())
        .or_else(|| {
            DATES
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
