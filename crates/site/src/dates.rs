// ABOUTME: Free-text timestamp resolution for feed and page dates.
// ABOUTME: Tries an ordered chain of known formats and reports unknown explicitly.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Resolves a free-text timestamp against an ordered chain of known formats.
///
/// Returns `None` when the input is empty or no format matches. Callers that
/// need a concrete instant decide for themselves what "unknown" means; the
/// resolver never substitutes the current time.
pub fn resolve_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // RFC3339 / ISO-8601 with zone, the common Atom shape.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // RFC2822 covers RFC1123 and RFC822 with zone, the common RSS shape.
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = parse_named_zone(s) {
        return Some(dt);
    }

    // Numeric-offset variants chrono's RFC parsers miss.
    const OFFSET_FORMATS: &[&str] = &[
        "%a, %d %b %Y %H:%M:%S %z",
        "%a, %e %b %Y %H:%M:%S %z",
        "%d %b %Y %H:%M:%S %z",
        "%e %b %Y %H:%M:%S %z",
        "%Y-%m-%dT%H:%M:%S%:z",
        "%Y-%m-%dT%H:%M:%S%z",
    ];
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    // Zone-less variants are taken as UTC. The last entry is ANSI C asctime.
    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%a, %d %b %Y %H:%M:%S",
        "%d %b %Y %H:%M:%S",
        "%e %b %Y %H:%M:%S",
        "%a %b %e %H:%M:%S %Y",
    ];
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive));
    }

    if let Some(dt) = parse_epoch(s) {
        return Some(dt);
    }

    // Last resort for loose real-world strings.
    dateparser::parse(s).ok()
}

/// Unix epoch seconds or milliseconds, digits only.
fn parse_epoch(s: &str) -> Option<DateTime<Utc>> {
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let value: i64 = s.parse().ok()?;
    if value >= 1_000_000_000_000 {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

/// Common named zone suffixes; chrono's `%Z` does not parse these.
fn parse_named_zone(s: &str) -> Option<DateTime<Utc>> {
    const ZONES: &[(&str, i32)] = &[
        ("GMT", 0),
        ("UTC", 0),
        ("EST", -5 * 3600),
        ("EDT", -4 * 3600),
        ("CST", -6 * 3600),
        ("CDT", -5 * 3600),
        ("MST", -7 * 3600),
        ("MDT", -6 * 3600),
        ("PST", -8 * 3600),
        ("PDT", -7 * 3600),
    ];
    const BASE_FORMATS: &[&str] = &[
        "%a, %d %b %Y %H:%M:%S",
        "%a, %e %b %Y %H:%M:%S",
        "%d %b %Y %H:%M:%S",
        "%e %b %Y %H:%M:%S",
    ];

    for (zone, offset_secs) in ZONES {
        if !s.ends_with(zone) {
            continue;
        }
        let base = s[..s.len() - zone.len()].trim_end();
        for fmt in BASE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(base, fmt) {
                let offset = FixedOffset::east_opt(*offset_secs)?;
                let dt = offset.from_local_datetime(&naive).single()?;
                return Some(dt.with_timezone(&Utc));
            }
        }
    }
    None
}
