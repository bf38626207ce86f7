use time::OffsetDateTime;
use time::macros::format_description;

/// Seconds in a Julian year (365.25 days)
pub const SECONDS_PER_YEAR: i64 = 60 * 60 * 24 * 36525 / 100;

/// Format a Unix timestamp as a `ctime`-style UTC string, e.g. `Thu Jan  1 00:00:00 1970`.
///
/// Instants the `time` crate cannot represent fall back to an approximate
/// year label such as `"292271025015 C.E."` or `"12000 B.C.E."`.
pub fn safe_calendar_string(timestamp: i64) -> String {
    exact_calendar_string(timestamp).unwrap_or_else(|| approximate_year_string(timestamp))
}

fn exact_calendar_string(timestamp: i64) -> Option<String> {
    let format = format_description!(
        "[weekday repr:short] [month repr:short] [day padding:space] [hour]:[minute]:[second] [year]"
    );

    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|dt| dt.format(&format).ok())
}

/// Rough era/year label for an instant, using a 365.25-day year
pub fn approximate_year_string(timestamp: i64) -> String {
    let year = approximate_year(timestamp);
    if year < 0 {
        format!("{} B.C.E.", year.unsigned_abs())
    } else {
        format!("{} C.E.", year)
    }
}

/// `floor(timestamp / SECONDS_PER_YEAR) + 1970`
pub fn approximate_year(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_YEAR) + 1970
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_per_year() {
        assert_eq!(SECONDS_PER_YEAR, 31_557_600);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(safe_calendar_string(0), "Thu Jan  1 00:00:00 1970");
    }

    #[test]
    fn test_known_instants() {
        assert_eq!(safe_calendar_string(1_700_000_000), "Tue Nov 14 22:13:20 2023");
        assert_eq!(safe_calendar_string(i32::MAX as i64), "Tue Jan 19 03:14:07 2038");
        assert_eq!(safe_calendar_string(i32::MIN as i64), "Fri Dec 13 20:45:52 1901");
        assert_eq!(safe_calendar_string(-1), "Wed Dec 31 23:59:59 1969");
    }

    #[test]
    fn test_far_future_falls_back() {
        let ts = 1i64 << 62;
        let formatted = safe_calendar_string(ts);
        assert!(formatted.ends_with(" C.E."));
        assert!(!formatted.ends_with("B.C.E."));
        assert_eq!(formatted, format!("{} C.E.", ts / 31_557_600 + 1970));
    }

    #[test]
    fn test_far_past_falls_back() {
        let formatted = safe_calendar_string(-(1i64 << 62));
        assert!(formatted.ends_with(" B.C.E."));
        assert!(!formatted.starts_with('-'));
    }

    #[test]
    fn test_extremes_never_panic() {
        assert_eq!(safe_calendar_string(i64::MAX), "292271025015 C.E.");
        assert_eq!(safe_calendar_string(i64::MIN), "292271021076 B.C.E.");
    }

    #[test]
    fn test_approximate_year_floors() {
        assert_eq!(approximate_year(0), 1970);
        assert_eq!(approximate_year(SECONDS_PER_YEAR - 1), 1970);
        assert_eq!(approximate_year(SECONDS_PER_YEAR), 1971);
        assert_eq!(approximate_year(-1), 1969);
    }

    #[test]
    fn test_approximate_year_string() {
        assert_eq!(approximate_year_string(0), "1970 C.E.");
        assert_eq!(approximate_year_string(-1971 * SECONDS_PER_YEAR), "1 B.C.E.");
        assert_eq!(approximate_year_string(-1970 * SECONDS_PER_YEAR), "0 C.E.");
    }
}
