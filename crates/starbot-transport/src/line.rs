//! Newline-delimited text transport over Tokio I/O handles.

use tokio::io::{
    self, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin,
    Stdout,
};
use tokio::sync::Mutex;

use crate::{Connection, TransportError};

/// Default cap on a single inbound line: 16 MiB.
pub const DEFAULT_MAX_LINE_BYTES: usize = 16 * 1024 * 1024;

/// The production connection: the process's own stdin and stdout.
pub type StdioConnection = LineConnection<Stdin, Stdout>;

/// A [`Connection`] that frames messages as `\n`-terminated lines.
///
/// The reader and writer sit behind separate locks so that `send` and
/// `recv` take `&self`, like every other [`Connection`]. The turn loop
/// never calls them concurrently; the locks are uncontended.
pub struct LineConnection<R, W> {
    reader: Mutex<BufReader<R>>,
    writer: Mutex<W>,
    max_line_bytes: usize,
}

impl<R, W> LineConnection<R, W>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    /// Wraps a reader/writer pair. The reader is buffered internally.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(BufReader::new(reader)),
            writer: Mutex::new(writer),
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }

    /// Sets the largest inbound line (terminator included) `recv` accepts.
    pub fn with_max_line_bytes(mut self, limit: usize) -> Self {
        self.max_line_bytes = limit;
        self
    }

    pub fn max_line_bytes(&self) -> usize {
        self.max_line_bytes
    }

    /// Returns the underlying handles. Input buffered but not yet
    /// returned by `recv` is discarded.
    pub fn into_inner(self) -> (R, W) {
        (
            self.reader.into_inner().into_inner(),
            self.writer.into_inner(),
        )
    }
}

impl<R, W> Connection for LineConnection<R, W>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    type Error = TransportError;

    async fn send(&self, line: &str) -> Result<(), Self::Error> {
        let mut framed = String::with_capacity(line.len() + 1);
        framed.push_str(line);
        framed.push('\n');

        let mut writer = self.writer.lock().await;
        writer
            .write_all(framed.as_bytes())
            .await
            .map_err(TransportError::SendFailed)?;
        // Flush per message: the peer must see this line before we block
        // reading the next one.
        writer.flush().await.map_err(TransportError::SendFailed)?;
        tracing::trace!(bytes = framed.len(), "sent line");
        Ok(())
    }

    async fn recv(&self) -> Result<Option<String>, Self::Error> {
        let mut reader = self.reader.lock().await;
        let mut buf = Vec::new();

        // One byte past the limit is enough to tell "too long" apart
        // from "exactly at the limit". Saturates so `usize::MAX` means
        // unlimited rather than wrapping to a zero-byte read.
        let read = (&mut *reader)
            .take((self.max_line_bytes as u64).saturating_add(1))
            .read_until(b'\n', &mut buf)
            .await
            .map_err(TransportError::ReceiveFailed)?;

        if read == 0 {
            tracing::debug!("input stream closed");
            return Ok(None);
        }
        if buf.len() > self.max_line_bytes {
            return Err(TransportError::LineTooLong {
                limit: self.max_line_bytes,
            });
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = String::from_utf8(buf).map_err(|e| {
            TransportError::ReceiveFailed(io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        tracing::trace!(bytes = read, "received line");
        Ok(Some(line))
    }
}
