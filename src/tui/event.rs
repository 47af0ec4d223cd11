//! Event handling for TUI.
//!
//! A ticker thread and a terminal input thread feed one channel; the
//! scheduler drains it one event at a time. At most one tick is outstanding
//! at any moment: ticks falling due while one is queued or still being
//! serviced are dropped.

use std::cell::Cell;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use tracing::warn;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Timer tick for data refresh.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
    /// Reading terminal input failed; no further input will arrive.
    Error(io::Error),
}

/// Merges timer ticks and terminal input into a single ordered stream.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure.
    _tx: Sender<Event>,
    /// Set from the moment a `Tick` is sent until the consumer has finished
    /// servicing it.
    tick_pending: Arc<AtomicBool>,
    /// The last event handed out was a `Tick`.
    serving_tick: Cell<bool>,
}

impl EventHandler {
    /// Creates a new event handler ticking every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let handler = Self::ticking(tick_rate);

        let input_tx = handler._tx.clone();
        thread::spawn(move || {
            loop {
                let event = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                    Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                    Ok(_) => continue,
                    Err(e) => {
                        warn!(error = %e, "failed to read terminal input");
                        let _ = input_tx.send(Event::Error(e));
                        break;
                    }
                };
                if input_tx.send(event).is_err() {
                    break;
                }
            }
        });

        handler
    }

    /// Creates a handler with only the ticker thread running.
    fn ticking(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_pending = Arc::new(AtomicBool::new(false));

        let tick_tx = tx.clone();
        let pending = Arc::clone(&tick_pending);
        thread::spawn(move || {
            loop {
                thread::sleep(tick_rate);
                if pending.swap(true, Ordering::AcqRel) {
                    continue;
                }
                if tick_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self {
            rx,
            _tx: tx,
            tick_pending,
            serving_tick: Cell::new(false),
        }
    }

    /// Creates a handler with no producer threads; events are pushed
    /// through the returned sender.
    #[cfg(test)]
    pub(crate) fn manual() -> (Self, Sender<Event>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                rx,
                _tx: tx.clone(),
                tick_pending: Arc::new(AtomicBool::new(false)),
                serving_tick: Cell::new(false),
            },
            tx,
        )
    }

    /// Receives the next event, blocking until one is available.
    ///
    /// Calling this again marks the previous tick as serviced, which lets the
    /// ticker queue the next one.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        if self.serving_tick.replace(false) {
            self.tick_pending.store(false, Ordering::Release);
        }
        let event = self.rx.recv()?;
        if matches!(event, Event::Tick) {
            self.serving_tick.set(true);
        }
        Ok(event)
    }
}
