/// Errors that can occur in the transport layer.
///
/// End of input is not here: [`Connection::recv`](crate::Connection::recv)
/// reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Sending data failed (write or flush).
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving data failed, including a line that isn't valid UTF-8.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// An inbound line exceeded the configured limit.
    #[error("inbound line exceeds {limit} bytes")]
    LineTooLong { limit: usize },
}
