//! XMLTV timestamp formatting.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Utc};

/// Fixed feed offset (UTC+8). The source publishes Hong Kong local
/// times; the suffix is constant and never derived from the system
/// timezone.
#[allow(clippy::expect_used)]
static FEED_OFFSET: LazyLock<FixedOffset> =
    LazyLock::new(|| FixedOffset::east_opt(8 * 3600).expect("valid fixed offset"));

/// Formats an instant as an XMLTV `start`/`stop` attribute value.
///
/// Example: `"20240101080000 +0800"`
#[must_use]
pub fn format_xmltv(instant: DateTime<Utc>) -> String {
    format!(
        "{} +0800",
        instant.with_timezone(&*FEED_OFFSET).format("%Y%m%d%H%M%S")
    )
}
