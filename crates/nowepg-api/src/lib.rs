//! API client library for nowepg.
//!
//! Fetches per-channel-group schedule JSON from the NowTV EPG endpoints
//! and aggregates it across a multi-day window.

/// NowTV EPG endpoint client.
pub mod nowtv;
