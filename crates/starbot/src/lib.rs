//! # Starbot
//!
//! Client core for turn-based space battles played over a line-delimited
//! JSON pipe.
//!
//! A bot implements a single [`Strategy`](prelude::Strategy) trait; Starbot
//! handles reading the server's messages from stdin, decoding them into
//! typed ships and equipment, and writing the strategy's commands back to
//! stdout, one flushed line per turn.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starbot::prelude::*;
//!
//! struct Idle;
//!
//! impl Strategy for Idle {
//!     fn battle(&mut self, state: &BattleState) -> BattleOutput {
//!         BattleOutput::new(format!("{} ships idle", state.my.len()))
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), BotError> {
//!     let config = BotConfig::default();
//!     starbot::logging::init(&config);
//!     BotBuilder::new().config(config).build(Idle).run().await?;
//!     Ok(())
//! }
//! ```

mod bot;
mod config;
mod error;
mod io;
pub mod logging;
mod turn_loop;

pub use bot::{Bot, BotBuilder};
pub use config::BotConfig;
pub use error::BotError;
pub use io::MessageIo;
pub use turn_loop::{LoopSummary, TurnLoop};

/// Everything a bot binary usually needs, in one import.
pub mod prelude {
    pub use crate::{Bot, BotBuilder, BotConfig, BotError, LoopSummary, MessageIo, TurnLoop};
    pub use starbot_protocol::{
        BattleOutput, BattleState, Codec, CommandKind, DraftChoice, DraftOptions, EffectType,
        EquipmentBlock, EquipmentType, ErrorKind, FireInfo, GunBlock, JsonCodec, ProtocolError,
        Ship, UserCommand, Vector,
    };
    pub use starbot_strategy::{FnStrategy, Strategy, TurnPhase, from_fn};
    pub use starbot_transport::{Connection, LineConnection, StdioConnection, TransportError};
}
