//! NowTV schedule value types.

use chrono::{DateTime, Utc};

/// One scheduled broadcast slot.
///
/// Constructed once per parsed JSON programme entry and never mutated.
/// `start <= end` is assumed from upstream data, not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Programme {
    /// Channel identifier, verbatim upstream JSON key.
    pub channel: String,
    /// Human-readable title (may be empty, never absent).
    pub name: String,
    /// Synopsis (may be empty).
    pub description: String,
    /// Broadcast start instant.
    pub start: DateTime<Utc>,
    /// Broadcast end instant.
    pub end: DateTime<Utc>,
}

/// Parse result for a single endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    /// Channel identifiers in source key order.
    ///
    /// Includes channels whose programme array was empty, so they still
    /// reach the aggregate channel list.
    pub channels: Vec<String>,
    /// Programmes in source enumeration order.
    pub programmes: Vec<Programme>,
}

/// Accumulated result of a full fetch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleAggregate {
    /// Distinct channel identifiers in first-seen order across all requests.
    pub channels: Vec<String>,
    /// All programmes in processing order. Programmes are never deduplicated.
    pub programmes: Vec<Programme>,
}
