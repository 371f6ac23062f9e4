//! Turn phase state machine.

use std::fmt;

/// Where the bot is in the protocol lifecycle.
///
/// Transitions are strictly ordered, with no skipped phases:
///
/// ```text
/// AwaitDraftOptions → AwaitDraftChoice → AwaitBattleState ⇄ AwaitBattleOutput
/// ```
///
/// - **AwaitDraftOptions**: waiting for the one-time draft offer.
/// - **AwaitDraftChoice**: offer decoded, strategy computing the choice.
/// - **AwaitBattleState**: waiting for the next turn's state.
/// - **AwaitBattleOutput**: state decoded, strategy computing commands.
///
/// There is no terminal phase. The loop ends only when input runs out,
/// which can happen in any phase that waits on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnPhase {
    #[default]
    AwaitDraftOptions,
    AwaitDraftChoice,
    AwaitBattleState,
    AwaitBattleOutput,
}

impl TurnPhase {
    /// The phase that follows this one.
    pub fn next(self) -> Self {
        match self {
            Self::AwaitDraftOptions => Self::AwaitDraftChoice,
            Self::AwaitDraftChoice => Self::AwaitBattleState,
            Self::AwaitBattleState => Self::AwaitBattleOutput,
            Self::AwaitBattleOutput => Self::AwaitBattleState,
        }
    }

    /// Returns `true` if moving to `target` is a valid transition.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == target
    }

    /// Returns `true` while the bot is blocked on the server.
    pub fn is_reading(self) -> bool {
        matches!(self, Self::AwaitDraftOptions | Self::AwaitBattleState)
    }

    /// Returns `true` before the first battle state has been requested.
    pub fn is_draft(self) -> bool {
        matches!(self, Self::AwaitDraftOptions | Self::AwaitDraftChoice)
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitDraftOptions => write!(f, "AwaitDraftOptions"),
            Self::AwaitDraftChoice => write!(f, "AwaitDraftChoice"),
            Self::AwaitBattleState => write!(f, "AwaitBattleState"),
            Self::AwaitBattleOutput => write!(f, "AwaitBattleOutput"),
        }
    }
}
