//! `NowTvApi` trait definition.
#![allow(clippy::future_not_send)]

use chrono::NaiveDate;

use super::error::ScheduleError;
use super::types::DaySchedule;

/// NowTV EPG feed trait.
///
/// Abstracts the per-(group, date) fetch for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(NowTvApi: Send)]
pub trait LocalNowTvApi {
    /// Fetches and parses the schedule feed for one channel group and date.
    ///
    /// # Errors
    ///
    /// Returns a `ScheduleError` if the HTTP request fails, the server
    /// answers with a non-success status, or the body is malformed.
    async fn fetch_day_schedule(
        &self,
        group: &str,
        date: NaiveDate,
    ) -> Result<DaySchedule, ScheduleError>;
}
