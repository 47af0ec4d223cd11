//! GC CPU fraction gauge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Gauge};

use crate::model::MemStats;
use crate::tui::style::Styles;

/// Title shown on the gauge border.
pub const GAUGE_TITLE: &str = "GCCPUFraction 0%~100%";

/// Presentation state of the gauge, derived from the latest snapshot only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GaugeState {
    /// Bar fill, always within `0..=100`.
    pub percent: u16,
    /// Text drawn over the bar, e.g. `"0.42%"`. Empty until the first snapshot.
    pub label: String,
}

/// Gauge displaying the fraction of CPU time spent in garbage collection.
#[derive(Debug, Default)]
pub struct GaugeWidget {
    state: GaugeState,
}

/// Maps a raw fraction to an integer percent in `0..=100`.
///
/// `round(fraction * 100)`, clamped. Monotonic non-decreasing; NaN maps to 0.
pub fn normalize_fraction(fraction: f64) -> u16 {
    let percent = (fraction * 100.0).round();
    if percent.is_nan() {
        return 0;
    }
    percent.clamp(0.0, 100.0) as u16
}

/// Formats the raw (unclamped) fraction as a percentage with two decimals.
pub fn format_label(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

impl GaugeWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the presentation state with one derived from `stats`.
    pub fn apply_snapshot(&mut self, stats: &MemStats) {
        let fraction = stats.gc_cpu_fraction;
        self.state = GaugeState {
            percent: normalize_fraction(fraction),
            label: format_label(fraction),
        };
    }

    pub fn state(&self) -> &GaugeState {
        &self.state
    }

    /// Draws the gauge into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(GAUGE_TITLE)
            .borders(Borders::ALL)
            .border_style(Styles::border());

        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Styles::gauge_bar())
            .percent(self.state.percent)
            .label(Span::styled(self.state.label.as_str(), Styles::gauge_label()));

        frame.render_widget(gauge, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(fraction: f64) -> GaugeState {
        let mut widget = GaugeWidget::new();
        widget.apply_snapshot(&MemStats::with_gc_cpu_fraction(fraction));
        widget.state().clone()
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            applied(0.0),
            GaugeState {
                percent: 0,
                label: "0.00%".to_string()
            }
        );
        assert_eq!(
            applied(1.0),
            GaugeState {
                percent: 100,
                label: "100.00%".to_string()
            }
        );
    }

    #[test]
    fn test_rounds_to_nearest_percent() {
        let state = applied(0.4523);
        assert_eq!(state.percent, 45);
        assert_eq!(state.label, "45.23%");

        assert_eq!(normalize_fraction(0.455), 46);
        assert_eq!(normalize_fraction(0.994), 99);
        assert_eq!(normalize_fraction(0.996), 100);
    }

    #[test]
    fn test_small_fractions_are_not_rescaled() {
        // Direct scaling only: a tiny fraction stays near zero on the bar.
        assert_eq!(normalize_fraction(0.003), 0);
        assert_eq!(normalize_fraction(0.00423), 0);
        assert_eq!(format_label(0.00423), "0.42%");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(normalize_fraction(-0.5), 0);
        assert_eq!(normalize_fraction(1.5), 100);
        assert_eq!(normalize_fraction(f64::INFINITY), 100);
        assert_eq!(normalize_fraction(f64::NEG_INFINITY), 0);
        assert_eq!(normalize_fraction(f64::NAN), 0);
        // The label keeps the raw value.
        assert_eq!(format_label(1.5), "150.00%");
    }

    #[test]
    fn test_monotonic_over_unit_interval() {
        let mut prev = 0;
        for i in 0..=10_000 {
            let p = normalize_fraction(i as f64 / 10_000.0);
            assert!(p <= 100);
            assert!(p >= prev, "not monotonic at step {i}");
            prev = p;
        }
        assert_eq!(prev, 100);
    }

    #[test]
    fn test_no_stale_state() {
        let mut widget = GaugeWidget::new();
        assert_eq!(widget.state(), &GaugeState::default());

        widget.apply_snapshot(&MemStats::with_gc_cpu_fraction(0.9));
        widget.apply_snapshot(&MemStats::with_gc_cpu_fraction(0.1));
        assert_eq!(widget.state().percent, 10);
        assert_eq!(widget.state().label, "10.00%");
    }
}
