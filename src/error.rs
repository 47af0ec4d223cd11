//! Errors surfaced by a dashboard run.

use std::io;

use thiserror::Error;

use crate::source::LoadError;

/// Why a run ended with a failure.
#[derive(Debug, Error)]
pub enum RunError {
    /// The terminal could not be switched into dashboard mode.
    #[error("failed to initialize terminal: {0}")]
    Init(#[source] io::Error),
    /// Terminal input could no longer be read.
    #[error("failed to read terminal input: {0}")]
    Input(#[source] io::Error),
    /// Drawing to the terminal failed mid-run.
    #[error("failed to draw dashboard: {0}")]
    Draw(#[source] io::Error),
    /// The stats source failed; runs never retry a failed load.
    #[error("failed to load memory stats: {0}")]
    Load(#[from] LoadError),
}
