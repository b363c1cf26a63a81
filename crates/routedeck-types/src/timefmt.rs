//! Tolerant timestamp normalization for display.
//!
//! The collection endpoint emits zoned timestamps in a loose format: an
//! optional bracketed region annotation (`2024-03-01T10:00:00+03:00[Europe/Moscow]`)
//! and a fractional-seconds component of anywhere between 1 and 9 digits.
//! Standard parsers only take millisecond precision, so the fraction is
//! rewritten to exactly 3 digits before parsing. Every failure degrades to
//! an empty display value; a bad timestamp must never abort a row render.

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

static ZONE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]\s*$").unwrap());
static FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([0-9]{1,9})([Zz+\-]|$)").unwrap());

/// Parse a loosely-formatted timestamp into an offset-aware date-time.
///
/// Accepts an optional trailing bracketed zone annotation (stripped and
/// discarded, never reapplied numerically) and 1-9 fractional-second digits
/// (truncated or zero-padded to milliseconds). Inputs without an offset are
/// interpreted in the local zone. Returns `None` for anything unparseable.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stripped = ZONE_SUFFIX.replace(trimmed, "");
    let prepared = FRACTION.replace(stripped.trim(), |caps: &regex::Captures| {
        let millis = format!("{:0<3}", &caps[1]);
        format!(".{}{}", &millis[..3], &caps[2])
    });

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&prepared) {
        return Some(parsed);
    }

    // No offset marker: interpret as local wall-clock time.
    let naive = NaiveDateTime::parse_from_str(&prepared, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&prepared, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    Some(match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.fixed_offset(),
        LocalResult::Ambiguous(first, _) => first.fixed_offset(),
        // A wall-clock time inside a spring-forward gap maps to no local
        // instant; keep the reading under the offset in effect around the
        // gap rather than dropping the value.
        LocalResult::None => assume_offset(naive, Local.offset_from_utc_datetime(&naive)),
    })
}

fn assume_offset(naive: NaiveDateTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    DateTime::from_naive_utc_and_offset(naive - offset, offset)
}

/// Normalize a raw wire timestamp into a local display string.
///
/// Empty, absent, or unparseable input yields an empty string. Never panics.
pub fn normalize(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S%.3f")
            .to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_garbage_yield_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("not a timestamp"), "");
        assert_eq!(normalize("2024-13-99T99:99:99Z"), "");
    }

    #[test]
    fn bracketed_zone_suffix_is_ignored() {
        let with_suffix = "2024-03-01T10:00:00.5+03:00[Europe/Moscow]";
        let without_suffix = "2024-03-01T10:00:00.5+03:00";
        assert_ne!(normalize(without_suffix), "");
        assert_eq!(normalize(with_suffix), normalize(without_suffix));
    }

    #[test]
    fn bracketed_suffix_without_fraction() {
        assert_eq!(
            normalize("2024-03-01T10:00:00Z[UTC]"),
            normalize("2024-03-01T10:00:00Z")
        );
    }

    #[test]
    fn short_fractions_are_right_padded() {
        // .5 == 500ms, .52 == 520ms
        let base = parse_timestamp("2024-03-01T10:00:00.500Z").unwrap();
        assert_eq!(parse_timestamp("2024-03-01T10:00:00.5Z").unwrap(), base);
        let two = parse_timestamp("2024-03-01T10:00:00.52Z").unwrap();
        assert_eq!(two, parse_timestamp("2024-03-01T10:00:00.520Z").unwrap());
    }

    #[test]
    fn long_fractions_are_truncated_to_millis() {
        let nanos = "2024-03-01T10:00:00.123456789Z";
        let millis = "2024-03-01T10:00:00.123Z";
        assert_eq!(
            parse_timestamp(nanos).unwrap(),
            parse_timestamp(millis).unwrap()
        );
    }

    #[test]
    fn all_fraction_lengths_parse() {
        for len in 1..=9 {
            let frac: String = "123456789".chars().take(len).collect();
            let raw = format!("2024-03-01T10:00:00.{}+00:00", frac);
            assert!(
                parse_timestamp(&raw).is_some(),
                "fraction of {} digits failed",
                len
            );
        }
    }

    #[test]
    fn offset_is_honored() {
        let utc = parse_timestamp("2024-03-01T10:00:00Z").unwrap();
        let offset = parse_timestamp("2024-03-01T13:00:00+03:00").unwrap();
        assert_eq!(utc, offset);
    }

    #[test]
    fn naive_timestamps_parse_as_local() {
        assert_ne!(normalize("2024-03-01T10:00:00"), "");
        assert_ne!(normalize("2024-03-01 10:00:00.25"), "");
    }

    #[test]
    fn assumed_offset_keeps_the_wall_clock_reading() {
        // resolution path for wall-clock times inside a DST transition gap
        let naive =
            NaiveDateTime::parse_from_str("2024-03-10T02:30:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let resolved = assume_offset(naive, offset);
        assert_eq!(resolved.to_rfc3339(), "2024-03-10T02:30:00-05:00");
        assert_eq!(
            resolved.naive_utc(),
            NaiveDateTime::parse_from_str("2024-03-10T07:30:00", "%Y-%m-%dT%H:%M:%S").unwrap()
        );
    }

    #[test]
    fn display_format_keeps_millis() {
        let shown = normalize("2024-03-01T10:00:00.123456Z");
        assert!(shown.ends_with(".123"), "got {:?}", shown);
    }
}
