//! NowTV EPG endpoint client module.
//!
//! Handles HTTP requests to the per-channel-group `ch_G0N.json` feeds,
//! parses the schedule payloads, and folds them into a single aggregate.

mod aggregate;
mod api;
mod client;
mod endpoints;
mod error;
mod json;
mod types;

pub use aggregate::{DEFAULT_DAYS_AHEAD, FailurePolicy, FetchPlan, fetch_all_schedules};
#[allow(clippy::module_name_repetitions)]
pub use api::{LocalNowTvApi, NowTvApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{NowTvClient, NowTvClientBuilder};
pub use endpoints::{CHANNEL_GROUPS, NOWTV_BASE_URL, feed_url, format_feed_date};
pub use error::ScheduleError;
pub use json::parse_schedule_body;
pub use types::{DaySchedule, Programme, ScheduleAggregate};
