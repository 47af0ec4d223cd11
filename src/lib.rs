//! memgauge - live terminal gauge of a process's GC CPU fraction.
//!
//! This library provides:
//! - `source` - pluggable providers of memory statistics snapshots
//! - `tui` - the dashboard window and the sampling-and-render loop

pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod tui;

pub use config::Config;
pub use error::RunError;
