//! Crate-level error types.
//!
//! Camera and input operations never fail; only the ambient surfaces
//! (options files, the viewer's event loop) return these.

use std::fmt;

/// Errors produced by the pinhole crate.
#[derive(Debug)]
pub enum PinholeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for PinholeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for PinholeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PinholeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
