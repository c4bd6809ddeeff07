//! Multi-day schedule aggregation.
//!
//! Drives the (date offset × channel group) iteration strictly
//! sequentially, so channel first-seen order and programme emission
//! order are deterministic and reproducible.

use std::collections::HashSet;

use anyhow::{Result, bail};
use chrono::{Days, NaiveDate};
use tracing::instrument;

use super::api::LocalNowTvApi;
use super::endpoints::CHANNEL_GROUPS;
use super::types::ScheduleAggregate;

/// Default forward window beyond the base date (inclusive, 5 total days).
pub const DEFAULT_DAYS_AHEAD: u32 = 4;

/// What to do when a single (date, group) fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run on the first failure and discard the aggregate.
    #[default]
    Abort,
    /// Log and skip the failed endpoint; fail only if every request failed.
    Continue,
}

/// Parameters for one aggregation run.
#[derive(Debug, Clone)]
pub struct FetchPlan {
    /// First date to fetch.
    pub base_date: NaiveDate,
    /// Days to fetch beyond `base_date` (inclusive window).
    pub days_ahead: u32,
    /// Channel group feeds, processed in list order for every date.
    pub groups: Vec<String>,
    /// Per-request failure handling.
    pub failure_policy: FailurePolicy,
}

impl FetchPlan {
    /// Creates a plan with the default window, group list, and policy.
    #[must_use]
    pub fn new(base_date: NaiveDate) -> Self {
        Self {
            base_date,
            days_ahead: DEFAULT_DAYS_AHEAD,
            groups: CHANNEL_GROUPS.iter().map(|g| String::from(*g)).collect(),
            failure_policy: FailurePolicy::Abort,
        }
    }
}

/// Fetches every (date offset, channel group) feed in the plan and folds
/// the results into one aggregate.
///
/// Dates are enumerated ascending from `base_date`; groups in list order.
/// Newly seen channel identifiers are appended in encounter order and
/// never duplicated; programmes are appended in parse order and never
/// deduplicated. Requests are awaited one at a time, never overlapped.
///
/// # Errors
///
/// With `FailurePolicy::Abort`, returns the first fetch/parse error with
/// the offending (date, group) context. With `FailurePolicy::Continue`,
/// returns an error only if every request failed, or if date arithmetic
/// overflows.
#[instrument(skip_all)]
pub async fn fetch_all_schedules(
    api: &(impl LocalNowTvApi + Sync),
    plan: &FetchPlan,
) -> Result<ScheduleAggregate> {
    let mut aggregate = ScheduleAggregate::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut failed: Vec<(NaiveDate, String)> = Vec::new();
    let mut requests: usize = 0;

    for offset in 0..=plan.days_ahead {
        let Some(date) = plan.base_date.checked_add_days(Days::new(u64::from(offset))) else {
            bail!("date offset {offset} overflows base date {}", plan.base_date);
        };

        for group in &plan.groups {
            requests = requests.saturating_add(1);

            let day = match api.fetch_day_schedule(group, date).await {
                Ok(day) => day,
                Err(e) => match plan.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(anyhow::Error::new(e)
                            .context(format!("schedule fetch failed for {group} on {date}")));
                    }
                    FailurePolicy::Continue => {
                        tracing::warn!(%date, group, error = %e, "Skipping failed endpoint");
                        failed.push((date, group.clone()));
                        continue;
                    }
                },
            };

            tracing::debug!(
                %date,
                group,
                channels = day.channels.len(),
                programmes = day.programmes.len(),
                "Folding day schedule"
            );

            for channel in day.channels {
                if seen.insert(channel.clone()) {
                    aggregate.channels.push(channel);
                }
            }
            aggregate.programmes.extend(day.programmes);
        }
    }

    if !failed.is_empty() {
        if failed.len() == requests {
            bail!("all {requests} schedule requests failed");
        }
        tracing::warn!(
            skipped = failed.len(),
            total = requests,
            "Aggregation completed with skipped endpoints"
        );
        for (date, group) in &failed {
            tracing::warn!(%date, group, "Endpoint skipped");
        }
    }

    tracing::info!(
        channels = aggregate.channels.len(),
        programmes = aggregate.programmes.len(),
        requests,
        "Schedule aggregation completed"
    );

    Ok(aggregate)
}
