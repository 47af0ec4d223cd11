//! Dashboard window: terminal layout and widget delegation.

use std::io;

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::model::MemStats;

use super::widgets::GaugeWidget;

/// Something the scheduler can render snapshots into.
///
/// The scheduler calls `resize` once right after creating the window, then
/// `render` on every tick and `resize` on every terminal resize.
pub trait Window {
    /// Applies `stats` to the contained widgets and redraws without
    /// recomputing the layout.
    fn render<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        stats: &MemStats,
    ) -> io::Result<()>;

    /// Re-reads the terminal dimensions, recomputes the layout and redraws.
    fn resize<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>;
}

/// Screen geometry of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
    /// Full-screen rectangle.
    pub area: Rect,
    /// Row assigned to the gauge.
    pub gauge: Rect,
}

impl Grid {
    /// Lays out a single full-height gauge row over a `width` x `height` screen.
    pub fn new(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let [gauge] = Layout::vertical([Constraint::Fill(1)]).areas(area);
        Self {
            width,
            height,
            area,
            gauge,
        }
    }
}

/// One-row dashboard holding the GC CPU fraction gauge.
#[derive(Debug, Default)]
pub struct Dashboard {
    grid: Grid,
    gauge: GaugeWidget,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn gauge(&self) -> &GaugeWidget {
        &self.gauge
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let grid = self.grid;
        terminal.draw(|frame| self.gauge.render(frame, grid.gauge))?;
        Ok(())
    }
}

impl Window for Dashboard {
    fn render<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        stats: &MemStats,
    ) -> io::Result<()> {
        self.gauge.apply_snapshot(stats);
        self.draw(terminal)
    }

    fn resize<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let size = terminal.size()?;
        self.grid = Grid::new(size.width, size.height);
        self.draw(terminal)
    }
}
