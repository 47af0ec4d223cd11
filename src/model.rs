//! Memory statistics snapshot.
//!
//! These structures mirror the JSON document served by a process exposing its
//! runtime memory statistics:
//!
//! ```json
//! {"memstats": {"GCCPUFraction": 0.0042, "...": "..."}}
//! ```
//!
//! Only the fields the dashboard displays are decoded; everything else is ignored.

use serde::Deserialize;

/// A point-in-time read of memory/GC statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct MemStats {
    /// Fraction of the process's CPU time spent in garbage collection since
    /// the process started, in `[0, 1]`.
    ///
    /// Missing from the document -> `0.0`.
    #[serde(rename = "GCCPUFraction", default)]
    pub gc_cpu_fraction: f64,
}

/// Top-level body returned by the stats endpoint.
///
/// The `memstats` object itself is required.
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub memstats: MemStats,
}

impl MemStats {
    /// Creates a snapshot holding only the GC CPU fraction.
    pub fn with_gc_cpu_fraction(gc_cpu_fraction: f64) -> Self {
        Self { gc_cpu_fraction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_body() {
        let body = r#"{"memstats": {"GCCPUFraction": 0.4523, "Alloc": 1024}, "cmdline": ["app"]}"#;
        let resp: StatsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.memstats.gc_cpu_fraction, 0.4523);
    }

    #[test]
    fn test_missing_fraction_defaults_to_zero() {
        let resp: StatsResponse = serde_json::from_str(r#"{"memstats": {}}"#).unwrap();
        assert_eq!(resp.memstats, MemStats::default());
    }

    #[test]
    fn test_missing_memstats_is_an_error() {
        assert!(serde_json::from_str::<StatsResponse>(r#"{"other": 1}"#).is_err());
        assert!(serde_json::from_str::<StatsResponse>(r#"{"memstats": null}"#).is_err());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let body = r#"{"memstats": {"GCCPUFraction": "high"}}"#;
        assert!(serde_json::from_str::<StatsResponse>(body).is_err());
    }
}
