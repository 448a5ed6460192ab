//! Error types.
//!
//! Only [`DisplayError::Init`] is ever fatal. Everything else is absorbed inside a
//! tick and shows up as a blank field or a skipped page.

use thiserror::Error;

/// Failure of one external data query (metrics endpoint, OS stats, interface listing).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("endpoint returned status {0}")]
    Status(u16),

    #[error("malformed metrics document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("command `{command}` failed")]
    Command { command: &'static str },

    #[error("{0} unavailable")]
    Unavailable(&'static str),
}

/// Failure of the display boundary.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Panel could not be brought up at start-up.
    #[error("display init failed: {0}")]
    Init(String),

    /// A frame could not be pushed to the panel.
    #[error("display push failed: {0}")]
    Push(String),

    /// The user closed the simulator window.
    #[error("display window closed")]
    Closed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("page rotation needs at least one page")]
    NoPages,
}
