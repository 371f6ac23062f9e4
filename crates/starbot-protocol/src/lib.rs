//! Wire protocol for Starbot.
//!
//! This crate defines the "language" the bot and the game server speak:
//!
//! - **Types** ([`BattleState`], [`Ship`], [`BattleOutput`], etc.):
//!   the messages that travel on the wire, one JSON object per line.
//! - **Vector** ([`Vector`]): the `"x/y/z"` token used for every
//!   position, velocity and target.
//! - **Equipment** ([`EquipmentBlock`]): ship modules, discriminated by
//!   their `Type` field.
//! - **Commands** ([`UserCommand`]): what the bot asks its ships to do.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how messages become
//!   lines of text and back.
//! - **Errors** ([`ProtocolError`], [`ErrorKind`]).
//!
//! # Architecture
//!
//! The protocol layer sits between the transport (lines of text) and
//! the turn loop (strategy calls). It doesn't know about stdin or
//! stdout; it only knows how to serialize and deserialize messages.
//!
//! ```text
//! Transport (lines) → Protocol (BattleState / BattleOutput) → Strategy
//! ```

mod codec;
mod command;
mod equipment;
mod error;
mod types;
mod vector;

pub use codec::{Codec, JsonCodec};
pub use command::{
    AccelerateParameters, AttackParameters, CommandKind, MoveParameters, UserCommand,
};
pub use equipment::{
    EffectType, EnergyBlock, EngineBlock, EquipmentBlock, EquipmentType, GunBlock, HealthBlock,
    TYPE_FIELD,
};
pub use error::{ErrorKind, ProtocolError};
pub use types::{BattleOutput, BattleState, DraftChoice, DraftOptions, FireInfo, Ship};
pub use vector::Vector;
