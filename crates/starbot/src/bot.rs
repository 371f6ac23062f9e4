//! `Bot` builder and entry point.
//!
//! This is how a bot process starts. It ties together all the layers:
//! transport → protocol → strategy.

use starbot_protocol::JsonCodec;
use starbot_strategy::Strategy;
use starbot_transport::{Connection, LineConnection, StdioConnection, TransportError};
use tokio::io::{self, AsyncRead, AsyncWrite};

use crate::{BotConfig, BotError, LoopSummary, MessageIo, TurnLoop};

/// Builder for configuring and starting a [`Bot`].
///
/// # Example
///
/// ```rust,no_run
/// use starbot::prelude::*;
///
/// # async fn start() -> Result<(), BotError> {
/// let strategy = from_fn(|_state: &BattleState| BattleOutput::new("waiting"));
/// let mut bot = BotBuilder::new().build(strategy);
/// bot.run().await?;
/// # Ok(())
/// # }
/// ```
pub struct BotBuilder {
    config: BotConfig,
}

impl BotBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: BotConfig::default(),
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: BotConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the largest inbound line accepted by the connection built in
    /// [`build`](Self::build) or [`build_on_streams`](Self::build_on_streams).
    pub fn max_line_bytes(mut self, limit: usize) -> Self {
        self.config.max_line_bytes = limit;
        self
    }

    pub fn log_raw_lines(mut self, enabled: bool) -> Self {
        self.config.log_raw_lines = enabled;
        self
    }

    /// Builds a bot that talks over the process's stdin/stdout.
    pub fn build<S: Strategy>(self, strategy: S) -> Bot<StdioConnection, S> {
        self.build_on_streams(io::stdin(), io::stdout(), strategy)
    }

    /// Builds a bot that reads lines from `reader` and writes them to
    /// `writer`, with the configured line-length cap applied.
    pub fn build_on_streams<R, W, S>(
        self,
        reader: R,
        writer: W,
        strategy: S,
    ) -> Bot<LineConnection<R, W>, S>
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
        S: Strategy,
    {
        let conn =
            LineConnection::new(reader, writer).with_max_line_bytes(self.config.max_line_bytes);
        self.build_on(conn, strategy)
    }

    /// Builds a bot over an already-established connection.
    ///
    /// The connection keeps whatever line-length cap it was created with;
    /// [`max_line_bytes`](Self::max_line_bytes) only reaches connections
    /// this builder creates itself.
    pub fn build_on<C, S>(self, conn: C, strategy: S) -> Bot<C, S>
    where
        C: Connection<Error = TransportError>,
        S: Strategy,
    {
        let io = MessageIo::new(conn).log_raw_lines(self.config.log_raw_lines);
        Bot {
            turn_loop: TurnLoop::new(io, strategy),
        }
    }
}

impl Default for BotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bot ready to play one match.
///
/// Call [`run()`](Self::run) to start the protocol exchange.
pub struct Bot<C, S> {
    turn_loop: TurnLoop<C, JsonCodec, S>,
}

impl<C, S> Bot<C, S>
where
    C: Connection<Error = TransportError>,
    S: Strategy,
{
    /// Plays the match until the server closes the stream.
    ///
    /// Returns an error on the first protocol or transport failure; the
    /// caller should report it and exit.
    pub async fn run(&mut self) -> Result<LoopSummary, BotError> {
        tracing::info!("bot running");
        self.turn_loop.run().await
    }

    /// Gives back the connection and the strategy.
    pub fn into_parts(self) -> (C, S) {
        let (io, strategy) = self.turn_loop.into_parts();
        (io.into_connection(), strategy)
    }
}
