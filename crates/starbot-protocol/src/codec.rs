//! Codec trait and the JSON line codec.
//!
//! A "codec" (coder/decoder) converts between Rust types and the text of
//! one protocol line. The turn loop doesn't care HOW a message becomes a
//! line; it only needs something that implements [`Codec`].
//!
//! Framing (splitting the stream into lines, appending `\n`) belongs to
//! the transport. A codec sees exactly one line, without its terminator.

use serde::{de::DeserializeOwned, Serialize};

use crate::ProtocolError;

/// Encodes Rust values to a single line of text and decodes them back.
///
/// ## Trait bounds explained
///
/// - `Send + Sync` → a codec can live inside a bot that is moved onto
///   a Tokio runtime thread.
/// - `'static` → the codec owns everything it needs.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into one line of text (no terminator).
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails. None of the
    /// protocol types can fail to encode.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError>;

    /// Deserializes one line of text into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::EmptyLine` for an empty line, and
    /// `ProtocolError::Decode` if the text is malformed or doesn't match
    /// the expected type.
    fn decode<T: DeserializeOwned>(&self, line: &str) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses compact JSON (via `serde_json`).
///
/// Compact output matters: pretty-printed JSON would span several lines
/// and break the one-message-per-line framing.
///
/// ## Example
///
/// ```rust
/// use starbot_protocol::{BattleOutput, Codec, JsonCodec, UserCommand, Vector};
///
/// let codec = JsonCodec;
///
/// let output = BattleOutput::new("hi")
///     .with_command(UserCommand::move_to(7, Vector::new(15, 15, 15)));
///
/// let line = codec.encode(&output).unwrap();
/// assert!(!line.contains('\n'));
///
/// let decoded: BattleOutput = codec.decode(&line).unwrap();
/// assert_eq!(output, decoded);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError> {
        serde_json::to_string(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, line: &str) -> Result<T, ProtocolError> {
        // A present-but-empty line is not end of input; it's a broken peer.
        if line.is_empty() {
            return Err(ProtocolError::EmptyLine);
        }
        serde_json::from_str(line).map_err(ProtocolError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BattleState, DraftChoice, DraftOptions, ErrorKind};

    #[test]
    fn test_encode_draft_choice_is_empty_object() {
        assert_eq!(JsonCodec.encode(&DraftChoice {}).unwrap(), "{}");
    }

    #[test]
    fn test_decode_draft_options() {
        let options: DraftOptions = JsonCodec.decode("{}").unwrap();
        assert_eq!(options, DraftOptions {});
    }

    #[test]
    fn test_decode_empty_line_is_empty_line_error() {
        let err = JsonCodec.decode::<DraftOptions>("").unwrap_err();
        assert!(matches!(err, ProtocolError::EmptyLine));
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn test_decode_garbage_returns_protocol_error() {
        let err = JsonCodec.decode::<BattleState>("not json at all").unwrap_err();
        assert!(matches!(err, ProtocolError::Decode(_)));
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn test_decode_wrong_shape_returns_protocol_error() {
        let err = JsonCodec.decode::<BattleState>(r#"{"name":"hello"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn test_decode_bad_vector_deep_in_state_is_format_error() {
        let line = r#"{"FireInfos":[],"My":[{"Id":1,"Position":"0/0","Velocity":"0/0/0","Energy":0,"Health":null,"Equipment":[]}],"Opponent":[]}"#;
        let err = JsonCodec.decode::<BattleState>(line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_decode_unknown_equipment_deep_in_state_is_unrecognized() {
        let line = r#"{"FireInfos":[],"My":[],"Opponent":[{"Id":1,"Position":"0/0/0","Velocity":"0/0/0","Energy":0,"Health":3,"Equipment":[{"Type":"Frobnicator","Name":"x"}]}]}"#;
        let err = JsonCodec.decode::<BattleState>(line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnrecognizedVariant);
        assert!(err.to_string().contains("Frobnicator"));
    }
}
