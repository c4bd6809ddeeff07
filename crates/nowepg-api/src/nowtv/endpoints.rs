//! NowTV feed URL construction.

use chrono::NaiveDate;
use url::Url;

/// Production EPG host.
pub const NOWTV_BASE_URL: &str = "http://nowtv.now.com";

/// Channel group feed identifiers, in fixed fetch order.
pub const CHANNEL_GROUPS: [&str; 9] = [
    "ch_G01", "ch_G02", "ch_G03", "ch_G04", "ch_G05", "ch_G06", "ch_G07", "ch_G08", "ch_G09",
];

/// Formats a date as the feed path segment.
///
/// Example: `"20240101"`
#[must_use]
pub fn format_feed_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Builds the feed URL for one (channel group, date) pair.
///
/// Example:
/// `http://nowtv.now.com/gw-epg/epg/en_us/20240101/prf0/resp-genre/ch_G01.json`
#[must_use]
pub fn feed_url(base_url: &Url, group: &str, date: NaiveDate) -> String {
    format!(
        "{}/gw-epg/epg/en_us/{}/prf0/resp-genre/{}.json",
        base_url.as_str().trim_end_matches('/'),
        format_feed_date(date),
        group,
    )
}
