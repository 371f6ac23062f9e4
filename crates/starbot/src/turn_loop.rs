//! The read → decide → write cycle.
//!
//! The flow is:
//!   1. Read `DraftOptions` → ask the strategy → write `DraftChoice`
//!   2. Loop: read `BattleState` → ask the strategy → write `BattleOutput`
//!
//! Every read blocks until a full line arrives and every write is flushed
//! before the next read, so turn N's output is on the wire before turn
//! N+1's state is requested. End of input at any read ends the loop
//! cleanly. Any other failure ends it with an error: a corrupted line
//! can't be skipped because there is no way to resynchronize the stream.

use starbot_protocol::{BattleState, Codec, DraftOptions};
use starbot_strategy::{Strategy, TurnPhase};
use starbot_transport::{Connection, TransportError};

use crate::{BotError, MessageIo};

/// How a loop that ran to end of input went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    /// Battle turns fully answered.
    pub turns: u64,
    /// The phase the loop was in when input ran out.
    pub ended_in: TurnPhase,
}

/// Drives one match over a [`MessageIo`].
pub struct TurnLoop<C, K, S> {
    io: MessageIo<C, K>,
    strategy: S,
    phase: TurnPhase,
    turns: u64,
}

impl<C, K, S> TurnLoop<C, K, S>
where
    C: Connection<Error = TransportError>,
    K: Codec,
    S: Strategy,
{
    pub fn new(io: MessageIo<C, K>, strategy: S) -> Self {
        Self {
            io,
            strategy,
            phase: TurnPhase::default(),
            turns: 0,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Runs until the server closes the stream.
    ///
    /// # Errors
    /// The first transport or protocol failure. It is logged here with the
    /// phase and turn it happened in; the loop does not continue past it.
    pub async fn run(&mut self) -> Result<LoopSummary, BotError> {
        let result = self.drive().await;
        match &result {
            Ok(summary) if summary.ended_in.is_draft() => {
                tracing::warn!(
                    phase = %summary.ended_in,
                    "server closed the stream before the battle began"
                );
            }
            Ok(summary) => {
                tracing::info!(
                    turns = summary.turns,
                    phase = %summary.ended_in,
                    "server closed the stream"
                );
            }
            Err(e) => {
                let stage = if self.phase.is_reading() { "read" } else { "write" };
                tracing::error!(
                    phase = %self.phase,
                    stage,
                    turn = self.turns + 1,
                    kind = %e.kind(),
                    error = %e,
                    "turn loop aborted"
                );
            }
        }
        result
    }

    async fn drive(&mut self) -> Result<LoopSummary, BotError> {
        if self.draft().await? {
            while self.battle_turn().await? {}
        }
        Ok(LoopSummary {
            turns: self.turns,
            ended_in: self.phase,
        })
    }

    /// One draft exchange. Returns `false` if input ended first.
    async fn draft(&mut self) -> Result<bool, BotError> {
        let Some(options) = self.io.read::<DraftOptions>().await? else {
            return Ok(false);
        };
        self.advance(TurnPhase::AwaitDraftChoice);

        let choice = self.strategy.draft(&options);
        self.io.write(&choice).await?;
        self.advance(TurnPhase::AwaitBattleState);

        tracing::debug!("draft choice sent");
        Ok(true)
    }

    /// One battle turn. Returns `false` if input ended first.
    async fn battle_turn(&mut self) -> Result<bool, BotError> {
        let Some(state) = self.io.read::<BattleState>().await? else {
            return Ok(false);
        };
        self.advance(TurnPhase::AwaitBattleOutput);

        let turn = self.turns + 1;
        let output = self.strategy.battle(&state);
        tracing::debug!(
            turn,
            my = state.my.len(),
            opponent = state.opponent.len(),
            fire = state.fire_infos.len(),
            commands = output.user_commands.len(),
            "turn decided"
        );

        self.io.write(&output).await?;
        self.turns = turn;
        self.advance(TurnPhase::AwaitBattleState);
        Ok(true)
    }

    fn advance(&mut self, to: TurnPhase) {
        debug_assert!(
            self.phase.can_transition_to(to),
            "illegal phase change {} -> {to}",
            self.phase
        );
        self.phase = to;
    }

    /// Gives back the message I/O and the strategy.
    pub fn into_parts(self) -> (MessageIo<C, K>, S) {
        (self.io, self.strategy)
    }
}
