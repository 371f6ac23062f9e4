//! Transport abstraction layer for Starbot.
//!
//! Provides the [`Connection`] trait, which moves whole lines of text to
//! and from the game server, and [`LineConnection`], its implementation
//! over any Tokio reader/writer pair (stdin/stdout in production,
//! in-memory buffers in tests).
//!
//! A connection knows nothing about JSON. It only guarantees that one
//! `recv` yields one line and one `send` writes one line and flushes it.

#![allow(async_fn_in_trait)]

mod error;
mod line;

pub use error::TransportError;
pub use line::{DEFAULT_MAX_LINE_BYTES, LineConnection, StdioConnection};

/// A bidirectional, line-oriented channel to the game server.
pub trait Connection: Send + Sync + 'static {
    /// The error type for connection operations.
    type Error: std::error::Error + Send + Sync;

    /// Writes `line` followed by the line terminator, then flushes.
    ///
    /// `line` must not contain a newline itself.
    async fn send(&self, line: &str) -> Result<(), Self::Error>;

    /// Receives the next line, without its terminator.
    ///
    /// Returns `Ok(None)` when the peer has closed the stream. A final
    /// line with no trailing newline is still returned as a line.
    async fn recv(&self) -> Result<Option<String>, Self::Error>;
}
