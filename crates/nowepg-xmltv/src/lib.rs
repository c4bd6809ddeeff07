//! XMLTV document generation for nowepg.
//!
//! Serializes a `ScheduleAggregate` into the fixed XMLTV dialect
//! consumed by TV-guide database importers such as `mythfilldatabase`.

/// Timestamp formatting with the fixed feed offset.
pub mod timestamp;
/// XMLTV document emission.
pub mod writer;

pub use timestamp::format_xmltv;
pub use writer::{write_file, write_to};
