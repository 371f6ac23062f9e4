//! Typed message I/O: one decoded value per inbound line, one encoded
//! value per outbound line.

use serde::{Serialize, de::DeserializeOwned};
use starbot_protocol::{Codec, JsonCodec};
use starbot_transport::{Connection, TransportError};

use crate::BotError;

/// Pairs a line [`Connection`] with a [`Codec`].
///
/// `MessageIo` exclusively owns the connection; nothing else reads from
/// or writes to the stream while it exists.
pub struct MessageIo<C, K = JsonCodec> {
    conn: C,
    codec: K,
    log_raw_lines: bool,
}

impl<C> MessageIo<C>
where
    C: Connection<Error = TransportError>,
{
    /// Uses the JSON codec.
    pub fn new(conn: C) -> Self {
        Self::with_codec(conn, JsonCodec)
    }
}

impl<C, K> MessageIo<C, K>
where
    C: Connection<Error = TransportError>,
    K: Codec,
{
    pub fn with_codec(conn: C, codec: K) -> Self {
        Self {
            conn,
            codec,
            log_raw_lines: false,
        }
    }

    /// Logs every raw line at `trace` level when enabled.
    pub fn log_raw_lines(mut self, enabled: bool) -> Self {
        self.log_raw_lines = enabled;
        self
    }

    /// Reads and decodes the next message.
    ///
    /// Returns `Ok(None)` when the peer has closed the stream; that is the
    /// normal way a match ends, not an error.
    ///
    /// # Errors
    /// Transport failures, and any [`ProtocolError`](starbot_protocol::ProtocolError):
    /// an empty line, malformed JSON, or a schema mismatch.
    pub async fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, BotError> {
        let Some(line) = self.conn.recv().await? else {
            return Ok(None);
        };
        if self.log_raw_lines {
            tracing::trace!(%line, "<- server");
        }
        let value = self.codec.decode(&line)?;
        Ok(Some(value))
    }

    /// Encodes `value` and writes it as one flushed line.
    pub async fn write<T: Serialize>(&self, value: &T) -> Result<(), BotError> {
        let line = self.codec.encode(value)?;
        if self.log_raw_lines {
            tracing::trace!(%line, "-> server");
        }
        self.conn.send(&line).await?;
        Ok(())
    }

    /// Gives the connection back (e.g. to inspect what was written).
    pub fn into_connection(self) -> C {
        self.conn
    }
}
