//! Terminal User Interface for the memgauge dashboard.
//!
//! A single gauge row showing the fraction of CPU time the observed process
//! spends in garbage collection, refreshed on a fixed interval.

mod app;
mod event;
mod style;
mod terminal;
pub mod widgets;
mod window;

pub use app::{App, run};
pub use event::{Event, EventHandler};
pub use terminal::TerminalSession;
pub use window::{Dashboard, Grid, Window};
