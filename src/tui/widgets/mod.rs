//! Dashboard widgets.

mod gauge;

pub use gauge::{GAUGE_TITLE, GaugeState, GaugeWidget, format_label, normalize_fraction};
