//! Equipment blocks: the closed set of modules a ship can carry.
//!
//! On the wire every block is a flat JSON object whose `Type` field says
//! which of the four shapes the rest of the object follows:
//!
//! ```text
//! {"Type":"Gun","Name":"laser1","Damage":10,"EnergyPrice":2,"Radius":3,"EffectType":"Blaster"}
//! ```
//!
//! Decoding looks the discriminator up in a fixed table of per-variant
//! decoders. An unknown discriminator is a hard error.

use std::fmt;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::ProtocolError;

/// Name of the discriminator field.
pub const TYPE_FIELD: &str = "Type";

// ---------------------------------------------------------------------------
// EffectType
// ---------------------------------------------------------------------------

/// The visual/physical effect of a gun or a fire event.
///
/// The server only sends `"Blaster"` today. Any other tag is kept verbatim
/// in [`EffectType::Other`] and written back unchanged, so a server that
/// adds effects doesn't break older clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffectType {
    #[default]
    Blaster,
    Other(String),
}

impl EffectType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Blaster => "Blaster",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for EffectType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Blaster" => Self::Blaster,
            _ => Self::Other(tag),
        }
    }
}

impl From<EffectType> for String {
    fn from(effect: EffectType) -> Self {
        match effect {
            EffectType::Blaster => "Blaster".to_string(),
            EffectType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Variant payloads
// ---------------------------------------------------------------------------

/// Energy storage: how much the ship starts with, holds, and regains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnergyBlock {
    pub name: String,
    pub start_energy: i32,
    pub max_energy: i32,
    pub increment_per_turn: i32,
}

/// A weapon. `name` is what an ATTACK command refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GunBlock {
    pub name: String,
    pub damage: i32,
    pub energy_price: i32,
    pub radius: i32,
    pub effect_type: EffectType,
}

/// Propulsion: the largest acceleration the ship may request per turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineBlock {
    pub name: String,
    pub max_accelerate: i32,
}

/// Hull: starting and maximum health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthBlock {
    pub name: String,
    pub start_health: i32,
    pub max_health: i32,
}

// ---------------------------------------------------------------------------
// EquipmentType
// ---------------------------------------------------------------------------

/// The discriminator values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentType {
    Energy,
    Gun,
    Engine,
    Health,
}

impl EquipmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Gun => "Gun",
            Self::Engine => "Engine",
            Self::Health => "Health",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EquipmentBlock
// ---------------------------------------------------------------------------

/// One piece of equipment, owned by exactly one ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentBlock {
    Energy(EnergyBlock),
    Gun(GunBlock),
    Engine(EngineBlock),
    Health(HealthBlock),
}

type DecodeFn = fn(Value) -> Result<EquipmentBlock, serde_json::Error>;

/// One decoder per discriminator. The match in
/// [`EquipmentBlock::equipment_type`] keeps this list honest: adding a
/// variant without a row here shows up as an unrecognized type in tests.
const DECODERS: [(EquipmentType, DecodeFn); 4] = [
    (EquipmentType::Energy, decode_variant::<EnergyBlock>),
    (EquipmentType::Gun, decode_variant::<GunBlock>),
    (EquipmentType::Engine, decode_variant::<EngineBlock>),
    (EquipmentType::Health, decode_variant::<HealthBlock>),
];

fn decode_variant<T>(record: Value) -> Result<EquipmentBlock, serde_json::Error>
where
    T: DeserializeOwned + Into<EquipmentBlock>,
{
    serde_json::from_value::<T>(record).map(Into::into)
}

impl EquipmentBlock {
    /// Decodes one equipment record.
    ///
    /// The `Type` field is read first without consuming the record; the
    /// whole record is then decoded into the chosen variant (the variant
    /// structs ignore the `Type` key).
    ///
    /// # Errors
    /// - [`ProtocolError::MissingDiscriminator`] if `Type` is absent or not a string.
    /// - [`ProtocolError::UnrecognizedVariant`] if `Type` names no known variant.
    /// - [`ProtocolError::Decode`] if the variant's fields don't match.
    pub fn from_record(record: Map<String, Value>) -> Result<Self, ProtocolError> {
        let Some(tag) = record.get(TYPE_FIELD).and_then(Value::as_str).map(str::to_owned) else {
            return Err(ProtocolError::MissingDiscriminator {
                record: Value::Object(record).to_string(),
            });
        };

        let Some((_, decode)) = DECODERS.iter().find(|(ty, _)| ty.as_str() == tag) else {
            return Err(ProtocolError::UnrecognizedVariant {
                tag,
                record: Value::Object(record).to_string(),
            });
        };

        decode(Value::Object(record)).map_err(ProtocolError::Decode)
    }

    /// The shared `Name` attribute.
    pub fn name(&self) -> &str {
        match self {
            Self::Energy(block) => &block.name,
            Self::Gun(block) => &block.name,
            Self::Engine(block) => &block.name,
            Self::Health(block) => &block.name,
        }
    }

    pub fn equipment_type(&self) -> EquipmentType {
        match self {
            Self::Energy(_) => EquipmentType::Energy,
            Self::Gun(_) => EquipmentType::Gun,
            Self::Engine(_) => EquipmentType::Engine,
            Self::Health(_) => EquipmentType::Health,
        }
    }

    pub fn as_gun(&self) -> Option<&GunBlock> {
        match self {
            Self::Gun(gun) => Some(gun),
            _ => None,
        }
    }

    pub fn as_engine(&self) -> Option<&EngineBlock> {
        match self {
            Self::Engine(engine) => Some(engine),
            _ => None,
        }
    }
}

impl From<EnergyBlock> for EquipmentBlock {
    fn from(block: EnergyBlock) -> Self {
        Self::Energy(block)
    }
}

impl From<GunBlock> for EquipmentBlock {
    fn from(block: GunBlock) -> Self {
        Self::Gun(block)
    }
}

impl From<EngineBlock> for EquipmentBlock {
    fn from(block: EngineBlock) -> Self {
        Self::Engine(block)
    }
}

impl From<HealthBlock> for EquipmentBlock {
    fn from(block: HealthBlock) -> Self {
        Self::Health(block)
    }
}

impl<'de> Deserialize<'de> for EquipmentBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_record(record).map_err(de::Error::custom)
    }
}

/// Borrowing mirror of [`EquipmentBlock`] used only for encoding:
/// serde's internal tagging writes `Type` next to the variant's fields.
#[derive(Serialize)]
#[serde(tag = "Type")]
enum TaggedBlock<'a> {
    Energy(&'a EnergyBlock),
    Gun(&'a GunBlock),
    Engine(&'a EngineBlock),
    Health(&'a HealthBlock),
}

impl Serialize for EquipmentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tagged = match self {
            Self::Energy(block) => TaggedBlock::Energy(block),
            Self::Gun(block) => TaggedBlock::Gun(block),
            Self::Engine(block) => TaggedBlock::Engine(block),
            Self::Health(block) => TaggedBlock::Health(block),
        };
        tagged.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const GUN: &str = r#"{"Type":"Gun","Name":"laser1","Damage":10,"EnergyPrice":2,"Radius":3,"EffectType":"Blaster"}"#;

    fn decode(json: &str) -> Result<EquipmentBlock, ProtocolError> {
        serde_json::from_str(json).map_err(ProtocolError::Decode)
    }

    #[test]
    fn test_decode_gun() {
        let block = decode(GUN).unwrap();
        assert_eq!(block.equipment_type(), EquipmentType::Gun);
        assert_eq!(block.name(), "laser1");
        let gun = block.as_gun().expect("gun variant");
        assert_eq!(gun.damage, 10);
        assert_eq!(gun.energy_price, 2);
        assert_eq!(gun.radius, 3);
        assert_eq!(gun.effect_type, EffectType::Blaster);
    }

    #[test]
    fn test_decode_energy() {
        let block = decode(
            r#"{"Type":"Energy","Name":"cell","StartEnergy":5,"MaxEnergy":20,"IncrementPerTurn":2}"#,
        )
        .unwrap();
        assert_eq!(
            block,
            EquipmentBlock::Energy(EnergyBlock {
                name: "cell".into(),
                start_energy: 5,
                max_energy: 20,
                increment_per_turn: 2,
            })
        );
    }

    #[test]
    fn test_decode_engine() {
        let block = decode(r#"{"Type":"Engine","Name":"drive","MaxAccelerate":3}"#).unwrap();
        assert_eq!(block.as_engine().map(|e| e.max_accelerate), Some(3));
    }

    #[test]
    fn test_decode_health() {
        let block =
            decode(r#"{"Type":"Health","Name":"hull","StartHealth":80,"MaxHealth":100}"#).unwrap();
        assert_eq!(
            block,
            EquipmentBlock::Health(HealthBlock {
                name: "hull".into(),
                start_health: 80,
                max_health: 100,
            })
        );
    }

    #[test]
    fn test_discriminator_position_does_not_matter() {
        let block = decode(r#"{"Name":"drive","MaxAccelerate":1,"Type":"Engine"}"#).unwrap();
        assert_eq!(block.equipment_type(), EquipmentType::Engine);
    }

    #[test]
    fn test_unknown_type_is_unrecognized_variant() {
        let record: Map<String, Value> =
            serde_json::from_str(r#"{"Type":"Frobnicator","Name":"x"}"#).unwrap();
        match EquipmentBlock::from_record(record) {
            Err(ProtocolError::UnrecognizedVariant { tag, record }) => {
                assert_eq!(tag, "Frobnicator");
                assert!(record.contains("Frobnicator"));
            }
            other => panic!("expected UnrecognizedVariant, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_through_serde_keeps_kind() {
        let err = decode(r#"{"Type":"Frobnicator","Name":"x"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnrecognizedVariant);
    }

    #[test]
    fn test_missing_type_is_protocol_error() {
        let err = decode(r#"{"Name":"x","MaxAccelerate":1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);

        let err = decode(r#"{"Type":7,"Name":"x"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn test_missing_variant_field_is_protocol_error() {
        // A Gun record without Damage doesn't match the Gun field set.
        let err = decode(r#"{"Type":"Gun","Name":"g","EnergyPrice":1,"Radius":1,"EffectType":"Blaster"}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
        assert!(err.to_string().contains("Damage"));
    }

    #[test]
    fn test_encode_is_lossless_for_all_variants() {
        let blocks = vec![
            decode(GUN).unwrap(),
            decode(r#"{"Type":"Energy","Name":"e","StartEnergy":1,"MaxEnergy":2,"IncrementPerTurn":3}"#)
                .unwrap(),
            decode(r#"{"Type":"Engine","Name":"d","MaxAccelerate":4}"#).unwrap(),
            decode(r#"{"Type":"Health","Name":"h","StartHealth":5,"MaxHealth":6}"#).unwrap(),
        ];
        for block in blocks {
            let json = serde_json::to_value(&block).unwrap();
            assert_eq!(json[TYPE_FIELD], block.equipment_type().as_str());
            let back: EquipmentBlock = serde_json::from_value(json).unwrap();
            assert_eq!(back, block);
        }
    }

    #[test]
    fn test_encode_gun_json_shape() {
        let json = serde_json::to_value(decode(GUN).unwrap()).unwrap();
        let expected: Value = serde_json::from_str(GUN).unwrap();
        assert_eq!(json, expected);
    }

    #[test]
    fn test_unknown_effect_type_round_trips() {
        let block = decode(
            r#"{"Type":"Gun","Name":"g","Damage":1,"EnergyPrice":1,"Radius":1,"EffectType":"Plasma"}"#,
        )
        .unwrap();
        let gun = block.as_gun().unwrap();
        assert_eq!(gun.effect_type, EffectType::Other("Plasma".into()));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["EffectType"], "Plasma");
    }

    #[test]
    fn test_every_equipment_type_has_a_decoder() {
        for ty in [
            EquipmentType::Energy,
            EquipmentType::Gun,
            EquipmentType::Engine,
            EquipmentType::Health,
        ] {
            assert!(DECODERS.iter().any(|(t, _)| *t == ty), "{ty} has no decoder");
        }
    }
}
