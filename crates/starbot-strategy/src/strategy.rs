//! The `Strategy` trait: the main extension point for bot authors.
//!
//! This is the single trait a bot implements. The turn loop calls these
//! methods at the right time; the bot just decides.

use starbot_protocol::{BattleOutput, BattleState, DraftChoice, DraftOptions};

/// Decides the bot's answer to each inbound message.
///
/// The turn loop calls `draft` exactly once, then `battle` once per turn,
/// strictly in order and never concurrently. Methods take `&mut self` so a
/// strategy can carry memory from one turn to the next; the states
/// themselves are fresh every turn and are not kept by the loop.
pub trait Strategy: Send + 'static {
    /// Answers the draft offer.
    ///
    /// The draft carries no data yet. Default: an empty choice.
    fn draft(&mut self, _options: &DraftOptions) -> DraftChoice {
        DraftChoice::default()
    }

    /// Produces this turn's commands from this turn's state.
    fn battle(&mut self, state: &BattleState) -> BattleOutput;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn draft(&mut self, options: &DraftOptions) -> DraftChoice {
        (**self).draft(options)
    }

    fn battle(&mut self, state: &BattleState) -> BattleOutput {
        (**self).battle(state)
    }
}

/// A [`Strategy`] backed by a closure. Created by [`from_fn`].
///
/// Uses the default (empty) draft choice.
pub struct FnStrategy<F>(F);

/// Wraps a battle closure as a [`Strategy`].
///
/// ```rust
/// use starbot_protocol::BattleOutput;
/// use starbot_strategy::{from_fn, Strategy};
///
/// let mut idle = from_fn(|_state| BattleOutput::new("idle"));
/// let output = idle.battle(&Default::default());
/// assert!(output.user_commands.is_empty());
/// ```
pub fn from_fn<F>(battle: F) -> FnStrategy<F>
where
    F: FnMut(&BattleState) -> BattleOutput + Send + 'static,
{
    FnStrategy(battle)
}

impl<F> Strategy for FnStrategy<F>
where
    F: FnMut(&BattleState) -> BattleOutput + Send + 'static,
{
    fn battle(&mut self, state: &BattleState) -> BattleOutput {
        (self.0)(state)
    }
}
