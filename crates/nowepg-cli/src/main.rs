//! nowepg - NowTV schedule fetcher and XMLTV exporter.
//!
//! Fetches a multi-day window of per-channel-group schedule feeds,
//! aggregates them, and writes one XMLTV file suitable for
//! `mythfilldatabase --file 1 <output>.xml`.

/// Application configuration (TOML).
mod config;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use url::Url;

use crate::config::{AppConfig, resolve_config_path};
use nowepg_api::nowtv::{
    DEFAULT_DAYS_AHEAD, FailurePolicy, FetchPlan, NowTvClient, fetch_all_schedules,
};
use nowepg_xmltv::write_file;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Output XMLTV file path (must end in `.xml`).
    output: PathBuf,

    /// Days to fetch beyond the base date (default: 4, i.e. 5 total days).
    #[arg(long)]
    days: Option<u32>,

    /// Base date `YYYY-MM-DD` (default: today). Fixes the window for reproducible runs.
    #[arg(long)]
    base_date: Option<NaiveDate>,

    /// Skip failed endpoints instead of aborting the whole run.
    #[arg(long)]
    continue_on_error: bool,

    /// Override the EPG host (e.g. a mirror or test server).
    #[arg(long)]
    base_url: Option<Url>,

    /// Override config/data directory.
    #[arg(long)]
    dir: Option<PathBuf>,
}

/// Rejects output paths that do not end in `.xml`.
///
/// Checked before any network activity so a bad invocation never
/// issues a single request.
fn validate_output_path(path: &Path) -> Result<()> {
    if path.extension().and_then(OsStr::to_str) != Some("xml") {
        bail!("output path must end in .xml: {}", path.display());
    }
    Ok(())
}

/// Builds a `NowTvClient` with the default user agent.
///
/// # Errors
///
/// Returns an error if the client fails to build.
#[instrument(skip_all)]
fn build_client(base_url: Option<Url>) -> Result<NowTvClient> {
    let mut builder = NowTvClient::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    builder.build().context("failed to build NowTV client")
}

/// Runs the fetch-aggregate-export pipeline.
///
/// The output file is only opened after aggregation has fully
/// succeeded, so a failed run never creates or truncates it.
///
/// # Errors
///
/// Returns an error if the output path is invalid, config loading,
/// any fetch/parse step (subject to the failure policy), or the file
/// write fails.
#[instrument(skip_all)]
async fn run(cli: Cli) -> Result<()> {
    validate_output_path(&cli.output)?;

    let config_path =
        resolve_config_path(cli.dir.as_ref()).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let days_ahead = cli.days.or(config.fetch.days).unwrap_or(DEFAULT_DAYS_AHEAD);
    let continue_on_error =
        cli.continue_on_error || config.fetch.continue_on_error.unwrap_or(false);
    let base_url = match (cli.base_url, config.fetch.base_url) {
        (Some(url), _) => Some(url),
        (None, Some(raw)) => Some(
            raw.parse()
                .with_context(|| format!("invalid base_url in config: {raw}"))?,
        ),
        (None, None) => None,
    };
    let base_date = cli
        .base_date
        .unwrap_or_else(|| Local::now().date_naive());

    let client = build_client(base_url)?;

    let mut plan = FetchPlan::new(base_date);
    plan.days_ahead = days_ahead;
    if continue_on_error {
        plan.failure_policy = FailurePolicy::Continue;
    }

    tracing::info!(
        %base_date,
        days_ahead,
        groups = plan.groups.len(),
        "Fetching NowTV schedules"
    );
    let aggregate = fetch_all_schedules(&client, &plan)
        .await
        .context("schedule aggregation failed")?;

    tracing::info!(
        channels = aggregate.channels.len(),
        programmes = aggregate.programmes.len(),
        output = %cli.output.display(),
        "Writing XMLTV file"
    );
    write_file(&aggregate, &cli.output)?;

    tracing::info!("Done");
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if pipeline execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    run(cli).await
}
