//! The messages exchanged each phase of a match.
//!
//! ```text
//! server → client   DraftOptions      (once)
//! client → server   DraftChoice       (once)
//! server → client   BattleState       ┐
//! client → server   BattleOutput      ┘ repeated every turn
//! ```
//!
//! Field names on the wire are PascalCase (`FireInfos`, `UserCommands`),
//! so every struct carries `#[serde(rename_all = "PascalCase")]`.

use serde::{Deserialize, Serialize};

use crate::{EffectType, EngineBlock, EquipmentBlock, GunBlock, UserCommand, Vector};

// ---------------------------------------------------------------------------
// Draft phase
// ---------------------------------------------------------------------------

/// What the server offers during the draft. Carries no fields yet.
///
/// Declared with braces (not as a unit struct) so it round-trips as `{}`
/// rather than `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOptions {}

/// The client's answer to [`DraftOptions`]. Also empty for now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftChoice {}

// ---------------------------------------------------------------------------
// Battle state
// ---------------------------------------------------------------------------

/// A ship as seen in one turn's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ship {
    /// Unique within one state snapshot.
    pub id: i32,
    pub position: Vector,
    pub velocity: Vector,
    pub energy: i32,
    /// `None` when the server sends `null` (or omits the field).
    pub health: Option<i32>,
    pub equipment: Vec<EquipmentBlock>,
}

impl Ship {
    pub fn guns(&self) -> impl Iterator<Item = &GunBlock> {
        self.equipment.iter().filter_map(EquipmentBlock::as_gun)
    }

    pub fn first_gun(&self) -> Option<&GunBlock> {
        self.guns().next()
    }

    pub fn engine(&self) -> Option<&EngineBlock> {
        self.equipment.iter().find_map(EquipmentBlock::as_engine)
    }

    /// Unknown health counts as alive.
    pub fn is_alive(&self) -> bool {
        self.health.is_none_or(|hp| hp > 0)
    }
}

/// One projectile/effect event since the previous state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FireInfo {
    pub effect_type: EffectType,
    pub source: Vector,
    pub target: Vector,
}

/// Everything the client learns at the start of a turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BattleState {
    pub fire_infos: Vec<FireInfo>,
    /// The client's own fleet.
    pub my: Vec<Ship>,
    /// Visible enemy ships.
    pub opponent: Vec<Ship>,
}

impl BattleState {
    /// Looks a ship up by id in either fleet.
    pub fn ship(&self, id: i32) -> Option<&Ship> {
        self.my.iter().chain(&self.opponent).find(|ship| ship.id == id)
    }
}

// ---------------------------------------------------------------------------
// Battle output
// ---------------------------------------------------------------------------

/// The client's reply to a [`BattleState`].
///
/// `message` is free text the server may show in replays; it has no
/// protocol meaning. Commands are applied in the order they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BattleOutput {
    pub message: String,
    pub user_commands: Vec<UserCommand>,
}

impl BattleOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user_commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: UserCommand) {
        self.user_commands.push(command);
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_command(mut self, command: UserCommand) -> Self {
        self.push(command);
        self
    }
}

#[cfg(test)]
mod tests {
    //! JSON shape tests. A wrong rename here means the server silently
    //! sees missing fields, so each message type is checked field by field.

    use super::*;
    use crate::CommandKind;
    use serde_json::json;

    const SHIP: &str = r#"{"Id":1,"Position":"0/0/0","Velocity":"1/0/0","Energy":5,"Health":100,
        "Equipment":[{"Type":"Gun","Name":"g1","Damage":5,"EnergyPrice":1,"Radius":1,"EffectType":"Blaster"},
                     {"Type":"Engine","Name":"e1","MaxAccelerate":2}]}"#;

    // =====================================================================
    // Draft
    // =====================================================================

    #[test]
    fn test_draft_messages_are_empty_objects() {
        assert_eq!(serde_json::to_string(&DraftChoice {}).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&DraftOptions {}).unwrap(), "{}");
        let options: DraftOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, DraftOptions::default());
    }

    #[test]
    fn test_draft_options_ignores_unknown_fields() {
        let options: DraftOptions = serde_json::from_str(r#"{"Budget":10}"#).unwrap();
        assert_eq!(options, DraftOptions {});
    }

    // =====================================================================
    // Ship
    // =====================================================================

    #[test]
    fn test_ship_decodes_all_fields() {
        let ship: Ship = serde_json::from_str(SHIP).unwrap();
        assert_eq!(ship.id, 1);
        assert_eq!(ship.position, Vector::new(0, 0, 0));
        assert_eq!(ship.velocity, Vector::new(1, 0, 0));
        assert_eq!(ship.energy, 5);
        assert_eq!(ship.health, Some(100));
        assert_eq!(ship.equipment.len(), 2);
        assert_eq!(ship.first_gun().map(|g| g.name.as_str()), Some("g1"));
        assert_eq!(ship.engine().map(|e| e.max_accelerate), Some(2));
    }

    #[test]
    fn test_ship_null_health_is_none() {
        let ship: Ship = serde_json::from_str(
            r#"{"Id":2,"Position":"0/0/0","Velocity":"0/0/0","Energy":0,"Health":null,"Equipment":[]}"#,
        )
        .unwrap();
        assert_eq!(ship.health, None);
        assert!(ship.is_alive());
    }

    #[test]
    fn test_ship_missing_health_is_none() {
        let ship: Ship = serde_json::from_str(
            r#"{"Id":2,"Position":"0/0/0","Velocity":"0/0/0","Energy":0,"Equipment":[]}"#,
        )
        .unwrap();
        assert_eq!(ship.health, None);
    }

    #[test]
    fn test_ship_missing_position_fails() {
        let result = serde_json::from_str::<Ship>(
            r#"{"Id":2,"Velocity":"0/0/0","Energy":0,"Health":1,"Equipment":[]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_dead_ship_is_not_alive() {
        let mut ship: Ship = serde_json::from_str(SHIP).unwrap();
        ship.health = Some(0);
        assert!(!ship.is_alive());
    }

    #[test]
    fn test_ship_without_guns() {
        let ship: Ship = serde_json::from_str(
            r#"{"Id":3,"Position":"0/0/0","Velocity":"0/0/0","Energy":0,"Health":1,
                "Equipment":[{"Type":"Health","Name":"h","StartHealth":1,"MaxHealth":1}]}"#,
        )
        .unwrap();
        assert!(ship.first_gun().is_none());
        assert_eq!(ship.guns().count(), 0);
    }

    // =====================================================================
    // BattleState
    // =====================================================================

    #[test]
    fn test_battle_state_decodes() {
        let json = format!(
            r#"{{"FireInfos":[{{"EffectType":"Blaster","Source":"1/1/1","Target":"2/2/2"}}],
                "My":[{SHIP}],"Opponent":[]}}"#
        );
        let state: BattleState = serde_json::from_str(&json).unwrap();
        assert_eq!(state.fire_infos.len(), 1);
        assert_eq!(state.fire_infos[0].effect_type, EffectType::Blaster);
        assert_eq!(state.fire_infos[0].target, Vector::new(2, 2, 2));
        assert_eq!(state.my.len(), 1);
        assert!(state.opponent.is_empty());
        assert_eq!(state.ship(1).map(|s| s.energy), Some(5));
        assert!(state.ship(99).is_none());
    }

    #[test]
    fn test_battle_state_missing_fleet_fails() {
        let result = serde_json::from_str::<BattleState>(r#"{"FireInfos":[],"My":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_battle_state_round_trips() {
        let json = format!(r#"{{"FireInfos":[],"My":[{SHIP}],"Opponent":[{SHIP}]}}"#);
        let state: BattleState = serde_json::from_str(&json).unwrap();
        let back: BattleState =
            serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();
        assert_eq!(state, back);
    }

    // =====================================================================
    // BattleOutput
    // =====================================================================

    #[test]
    fn test_battle_output_json_format() {
        let output = BattleOutput::new("hello")
            .with_command(UserCommand::move_to(1, Vector::new(15, 15, 15)))
            .with_command(UserCommand::attack(1, "g1", Vector::new(15, 15, 15)));
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            json!({
                "Message": "hello",
                "UserCommands": [
                    {"Command": "MOVE", "Parameters": {"Id": 1, "Target": "15/15/15"}},
                    {"Command": "ATTACK", "Parameters": {"Id": 1, "Name": "g1", "Target": "15/15/15"}}
                ]
            })
        );
    }

    #[test]
    fn test_battle_output_preserves_command_order() {
        let mut output = BattleOutput::default();
        output.push(UserCommand::accelerate(1, Vector::new(1, 0, 0)));
        output.push(UserCommand::move_to(2, Vector::default()));
        output.push(UserCommand::attack(3, "g", Vector::default()));
        let kinds: Vec<CommandKind> = output.user_commands.iter().map(UserCommand::kind).collect();
        assert_eq!(
            kinds,
            [CommandKind::Accelerate, CommandKind::Move, CommandKind::Attack]
        );
    }
}
