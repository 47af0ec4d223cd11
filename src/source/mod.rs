//! Stats source abstraction.
//!
//! This module defines the `StatsSource` trait that allows the dashboard to
//! sample memory statistics from different backends through a unified
//! interface:
//! - `RandomSource`: synthetic values, for demos without a live process
//! - `HttpSource`: statistics fetched from a process's HTTP endpoint

mod http;
mod random;

pub use http::HttpSource;
pub use random::RandomSource;

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use thiserror::Error;

use crate::model::MemStats;

/// Errors that can occur while loading a snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Connection failure, request timeout, or failure reading the body.
    #[error("failed to get memory stats: {0}")]
    Transport(#[source] reqwest::Error),
    /// The endpoint answered with something other than `200 OK`.
    #[error("failed to get memory stats successfully: {0}")]
    Status(StatusCode),
    /// The body is not a valid stats document.
    #[error("failed to decode body: {0}")]
    Decode(#[source] serde_json::Error),
    /// The load context expired before the request could be issued.
    #[error("deadline exceeded before memory stats were loaded")]
    DeadlineExceeded,
}

/// Per-call context handed to [`StatsSource::load`].
///
/// A fresh context is created for every load. It carries an optional
/// deadline which network-backed sources turn into a request timeout.
#[derive(Clone, Copy, Debug)]
pub struct LoadContext {
    deadline: Option<Instant>,
}

impl LoadContext {
    /// A context that never expires.
    pub fn background() -> Self {
        Self { deadline: None }
    }

    /// A context expiring `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Time left before the deadline, or `None` if there is no deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns `true` once the deadline has passed.
    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }
}

/// A provider of memory statistics snapshots.
///
/// Implementations are selected by the caller at startup and handed to the
/// scheduler, which calls `load` once per tick. Failures are not retried here;
/// the caller decides what a failed load means for the run.
pub trait StatsSource {
    /// Produces a fresh snapshot.
    fn load(&self, ctx: &LoadContext) -> Result<MemStats, LoadError>;
}

impl<S: StatsSource + ?Sized> StatsSource for Box<S> {
    fn load(&self, ctx: &LoadContext) -> Result<MemStats, LoadError> {
        (**self).load(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_context_never_expires() {
        let ctx = LoadContext::background();
        assert!(ctx.remaining().is_none());
        assert!(!ctx.is_expired());
    }

    #[test]
    fn test_timeout_context() {
        let ctx = LoadContext::with_timeout(Duration::from_secs(60));
        let left = ctx.remaining().unwrap();
        assert!(left > Duration::from_secs(59));
        assert!(!ctx.is_expired());

        let expired = LoadContext::with_timeout(Duration::ZERO);
        assert!(expired.is_expired());
    }

    #[test]
    fn test_status_error_includes_reason() {
        let err = LoadError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "failed to get memory stats successfully: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_boxed_source_delegates() {
        let source: Box<dyn StatsSource> = Box::new(RandomSource::new());
        let stats = source.load(&LoadContext::background()).unwrap();
        assert!((0.0..1.0).contains(&stats.gc_cpu_fraction));
    }
}
