//! Player commands sent back to the server each turn.
//!
//! The wire shape pairs a string tag with a payload whose fields depend on
//! the tag:
//!
//! ```text
//! {"Command":"MOVE",      "Parameters":{"Id":7,"Target":"15/15/15"}}
//! {"Command":"ATTACK",    "Parameters":{"Id":7,"Name":"g1","Target":"15/15/15"}}
//! {"Command":"ACCELERATE","Parameters":{"Id":7,"Vector":"1/0/0"}}
//! ```
//!
//! `#[serde(tag = "Command", content = "Parameters")]` produces exactly
//! this "adjacently tagged" form. Because [`UserCommand`] is an enum whose
//! variants each carry only their own parameters, a tag that disagrees
//! with its payload cannot be constructed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Vector;

/// Parameters of a MOVE: fly ship `id` toward `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoveParameters {
    pub id: i32,
    pub target: Vector,
}

/// Parameters of an ATTACK: ship `id` fires gun `name` at `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttackParameters {
    pub id: i32,
    pub name: String,
    pub target: Vector,
}

/// Parameters of an ACCELERATE: add `vector` to ship `id`'s velocity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccelerateParameters {
    pub id: i32,
    pub vector: Vector,
}

/// One command in a [`BattleOutput`](crate::BattleOutput).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Command", content = "Parameters")]
pub enum UserCommand {
    #[serde(rename = "MOVE")]
    Move(MoveParameters),
    #[serde(rename = "ATTACK")]
    Attack(AttackParameters),
    #[serde(rename = "ACCELERATE")]
    Accelerate(AccelerateParameters),
}

impl UserCommand {
    pub fn move_to(ship_id: i32, target: Vector) -> Self {
        Self::Move(MoveParameters {
            id: ship_id,
            target,
        })
    }

    /// An attack always names the gun that fires.
    pub fn attack(ship_id: i32, gun_name: impl Into<String>, target: Vector) -> Self {
        Self::Attack(AttackParameters {
            id: ship_id,
            name: gun_name.into(),
            target,
        })
    }

    pub fn accelerate(ship_id: i32, vector: Vector) -> Self {
        Self::Accelerate(AccelerateParameters {
            id: ship_id,
            vector,
        })
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Move(_) => CommandKind::Move,
            Self::Attack(_) => CommandKind::Attack,
            Self::Accelerate(_) => CommandKind::Accelerate,
        }
    }

    /// The ship this command is issued for.
    pub fn ship_id(&self) -> i32 {
        match self {
            Self::Move(p) => p.id,
            Self::Attack(p) => p.id,
            Self::Accelerate(p) => p.id,
        }
    }
}

/// The `Command` tag on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Move,
    Attack,
    Accelerate,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Move => "MOVE",
            Self::Attack => "ATTACK",
            Self::Accelerate => "ACCELERATE",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
