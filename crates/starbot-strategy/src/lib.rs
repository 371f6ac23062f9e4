//! Decision-making seam for Starbot.
//!
//! The protocol core never inspects how a bot decides what to do. It
//! hands a decoded message to a [`Strategy`] and writes back whatever the
//! strategy returns.
//!
//! # Key types
//!
//! - [`Strategy`]: the trait bot authors implement
//! - [`FnStrategy`] / [`from_fn`]: a strategy from a plain closure
//! - [`TurnPhase`]: the protocol lifecycle state machine

mod phase;
mod strategy;

pub use phase::TurnPhase;
pub use strategy::{FnStrategy, Strategy, from_fn};
