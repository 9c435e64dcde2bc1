//! Error types and result handling for pg-json-wire.
//!
//! This module defines the main error type [`Error`] and a convenience
//! [`Result`] type alias used throughout the crate.
//!
//! # Example
//!
//! ```rust
//! use pg_json_wire::{Error, Result};
//!
//! fn resolve_publication() -> Result<()> {
//!     // Simulating a missing publication option
//!     Err(Error::Config("publication parameter missing".to_string()))
//! }
//!
//! match resolve_publication() {
//!     Ok(()) => println!("Resolved"),
//!     Err(Error::Config(msg)) => eprintln!("Configuration error: {}", msg),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for pg-json-wire operations.
///
/// Configuration and catalog errors are fatal to the encoding session;
/// the session must not emit further events after one is returned.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error, typically a missing `publication` option.
    #[error("configuration error: {0}")]
    Config(String),

    /// Catalog lookup failure, e.g. the publication vanished mid-session.
    #[error("catalog lookup failed: {0}")]
    Catalog(String),

    /// Transport rejected a finished event.
    #[error("transport error: {0}")]
    Transport(String),

    /// A change event that does not match its relation metadata.
    #[error("invalid change event: {message}")]
    InvalidEvent {
        /// Description of what was invalid
        message: String,
    },

    /// I/O error from a writer-backed transport.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient Result type alias for pg-json-wire operations.
pub type Result<T> = std::result::Result<T, Error>;
