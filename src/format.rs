//! Display formatting for counts, links and timestamps.

use chrono::{DateTime, Datelike, Utc};
use url::Url;

/// Maximum length of a displayed website link before it is cut off.
const MAX_URL_DISPLAY_LEN: usize = 30;

/// Twitter's legacy timestamp layout, e.g. `Tue Mar 21 20:50:14 +0000 2006`.
const TWITTER_TIME_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Abbreviate an engagement count: `1.5M`, `12K`, `999`.
#[must_use]
pub fn format_count(count: i64) -> String {
    if count >= 1_000_000 {
        format!("{}M", one_decimal(count as f64 / 1_000_000.0))
    } else if count >= 1_000 {
        format!("{}K", one_decimal(count as f64 / 1_000.0))
    } else {
        group_thousands(count)
    }
}

fn one_decimal(value: f64) -> String {
    let formatted = format!("{value:.1}");
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// Insert `,` separators the way an en-US locale would.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Return `raw` if it is an absolute `http` or `https` URL, safe to use as
/// a link target.
#[must_use]
pub fn web_link(raw: &str) -> Option<&str> {
    let parsed = Url::parse(raw).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(raw)
}

/// Shorten a website link to `host/path`, dropping `www.` and capping length.
///
/// Input that does not parse as a URL is returned unchanged.
#[must_use]
pub fn format_url(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    let host = parsed.host_str().unwrap_or_default();
    let mut display = host.strip_prefix("www.").unwrap_or(host).to_string();
    let path = parsed.path();
    if !path.is_empty() && path != "/" {
        display.push_str(path);
    }

    if display.chars().count() > MAX_URL_DISPLAY_LEN {
        let mut truncated: String = display.chars().take(MAX_URL_DISPLAY_LEN).collect();
        truncated.push_str("...");
        truncated
    } else {
        display
    }
}

/// Parse an API timestamp in RFC 3339 or Twitter's legacy layout.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, TWITTER_TIME_FORMAT))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render a post timestamp relative to `now`.
///
/// Recent posts get `now`, `5m`, `3h` or `2d`; older ones a calendar date,
/// with the year only when it differs from the current one.
#[must_use]
pub fn format_relative(raw: &str, now: DateTime<Utc>) -> String {
    let Some(created) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let elapsed = now.signed_duration_since(created);
    if elapsed.num_hours() < 24 {
        let hours = elapsed.num_hours();
        if hours < 1 {
            let minutes = elapsed.num_minutes();
            return if minutes < 1 {
                "now".to_string()
            } else {
                format!("{minutes}m")
            };
        }
        return format!("{hours}h");
    }

    if elapsed.num_days() < 7 {
        return format!("{}d", elapsed.num_days());
    }

    if created.year() == now.year() {
        created.format("%b %-d").to_string()
    } else {
        created.format("%b %-d, %Y").to_string()
    }
}

/// Render a join date as `March 2006`.
#[must_use]
pub fn format_joined(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_string(), |dt| dt.format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1K");
        assert_eq!(format_count(1260), "1.3K");
        assert_eq!(format_count(15_300), "15.3K");
        assert_eq!(format_count(1_500_000), "1.5M");
        assert_eq!(format_count(2_000_000), "2M");
        assert_eq!(format_count(123_456_789), "123.5M");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(12), "12");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-4321), "-4,321");
    }

    #[test]
    fn test_web_link_requires_http_scheme() {
        assert_eq!(web_link("https://example.com/a"), Some("https://example.com/a"));
        assert_eq!(web_link("http://example.com"), Some("http://example.com"));
        assert_eq!(web_link("javascript:alert(1)"), None);
        assert_eq!(web_link("JavaScript:alert(1)"), None);
        assert_eq!(web_link("data:text/html,<b>x</b>"), None);
        assert_eq!(web_link("example.com"), None);
        assert_eq!(web_link(""), None);
    }

    #[test]
    fn test_format_url() {
        assert_eq!(format_url("https://www.example.com/"), "example.com");
        assert_eq!(format_url("https://example.com/about"), "example.com/about");
        assert_eq!(
            format_url("https://www.example.com/a/very/long/path/that/keeps/going"),
            "example.com/a/very/long/path/t..."
        );
        assert_eq!(format_url("not a url"), "not a url");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let rfc = parse_timestamp("2024-06-15T11:00:00Z").unwrap();
        let legacy = parse_timestamp("Sat Jun 15 11:00:00 +0000 2024").unwrap();
        assert_eq!(rfc, legacy);
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_format_relative_recent() {
        let now = now();
        let ts = |d: Duration| (now - d).to_rfc3339();

        assert_eq!(format_relative(&ts(Duration::seconds(30)), now), "now");
        assert_eq!(format_relative(&ts(Duration::minutes(5)), now), "5m");
        assert_eq!(format_relative(&ts(Duration::minutes(59)), now), "59m");
        assert_eq!(format_relative(&ts(Duration::hours(3)), now), "3h");
        assert_eq!(format_relative(&ts(Duration::hours(23)), now), "23h");
        assert_eq!(format_relative(&ts(Duration::hours(24)), now), "1d");
        assert_eq!(format_relative(&ts(Duration::days(6)), now), "6d");
    }

    #[test]
    fn test_format_relative_future_is_now() {
        let now = now();
        let future = (now + Duration::minutes(10)).to_rfc3339();
        assert_eq!(format_relative(&future, now), "now");
    }

    #[test]
    fn test_format_relative_dates() {
        let now = now();
        assert_eq!(format_relative("2024-01-05T09:00:00Z", now), "Jan 5");
        assert_eq!(
            format_relative("Tue Mar 21 20:50:14 +0000 2006", now),
            "Mar 21, 2006"
        );
        assert_eq!(format_relative("garbage", now), "garbage");
    }

    #[test]
    fn test_format_joined() {
        assert_eq!(format_joined("Tue Mar 21 20:50:14 +0000 2006"), "March 2006");
        assert_eq!(format_joined("2019-11-02T00:00:00Z"), "November 2019");
        assert_eq!(format_joined("sometime"), "sometime");
    }
}
