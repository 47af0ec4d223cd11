//! Main TUI application: the sampling-and-render loop.

use crossterm::event::KeyEventKind;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::RunError;
use crate::source::{LoadContext, StatsSource};

use super::event::{Event, EventHandler};
use super::terminal::TerminalSession;
use super::window::Window;

/// Runs the dashboard until a key is pressed, a load fails or terminal
/// input breaks.
///
/// Takes over the terminal for the duration of the call and restores it on
/// every return path. Returns `Ok(())` when the user quits.
pub fn run<W, F, S>(factory: F, source: S, config: Config) -> Result<(), RunError>
where
    W: Window,
    F: FnOnce() -> W,
    S: StatsSource,
{
    let mut session = TerminalSession::enter().map_err(RunError::Init)?;
    let events = EventHandler::new(config.tick_rate);
    let mut app = App::new(factory(), source, config);

    info!(tick_rate = ?config.tick_rate, "dashboard started");
    app.run(session.terminal_mut(), &events)
}

/// State of one dashboard run: the window being drawn and the source feeding it.
pub struct App<W, S> {
    window: W,
    source: S,
    config: Config,
}

impl<W: Window, S: StatsSource> App<W, S> {
    pub fn new(window: W, source: S, config: Config) -> Self {
        Self {
            window,
            source,
            config,
        }
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// Lays out the window, then services events one at a time until the
    /// user quits or an error ends the run.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &EventHandler,
    ) -> Result<(), RunError> {
        self.window.resize(terminal).map_err(RunError::Draw)?;

        loop {
            match events.next() {
                Ok(Event::Tick) => self.tick(terminal)?,
                Ok(Event::Key(key)) => {
                    if key.kind == KeyEventKind::Press {
                        info!(key = ?key.code, "quit requested");
                        return Ok(());
                    }
                }
                Ok(Event::Resize(width, height)) => {
                    debug!(width, height, "terminal resized");
                    self.window.resize(terminal).map_err(RunError::Draw)?;
                }
                Ok(Event::Error(e)) => return Err(RunError::Input(e)),
                // All producers are gone; nothing else will ever arrive.
                Err(_) => return Ok(()),
            }
        }
    }

    fn tick<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), RunError> {
        let ctx = LoadContext::with_timeout(self.config.load_timeout);
        let stats = self
            .source
            .load(&ctx)
            .inspect_err(|e| warn!(error = %e, "stats load failed"))?;
        debug!(gc_cpu_fraction = stats.gc_cpu_fraction, "snapshot loaded");

        self.window
            .render(terminal, &stats)
            .map_err(RunError::Draw)
    }
}
