//! Error types for the protocol layer.
//!
//! Each crate in Starbot defines its own error enum. A `ProtocolError`
//! always means the bytes were fine but their *content* was not: a vector
//! token that doesn't parse, an equipment record with an unknown type,
//! a line that isn't the JSON we expected.

use std::fmt;

/// Every `Format` error renders with this prefix. serde flattens errors
/// raised inside a nested `Deserialize` into a message string, so the
/// prefix is what lets [`ProtocolError::kind`] recover the category.
pub(crate) const FORMAT_PREFIX: &str = "invalid vector";

/// Prefix shared by `UnrecognizedVariant` errors (see [`FORMAT_PREFIX`]).
pub(crate) const VARIANT_PREFIX: &str = "unrecognized";

/// serde's own wording for an unknown enum tag (used by command decoding).
const SERDE_UNKNOWN_VARIANT: &str = "unknown variant";

/// Errors that can occur while encoding or decoding protocol messages.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A vector token is not three `/`-separated base-10 integers.
    #[error("invalid vector {token:?}: {reason}")]
    Format {
        /// The offending token, verbatim.
        token: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An equipment record carries a `Type` no decoder is registered for.
    ///
    /// This is a hard failure: dropping the block would hand the strategy
    /// a ship that looks weaker than it really is.
    #[error("unrecognized equipment type {tag:?} in {record}")]
    UnrecognizedVariant {
        /// The discriminator value that was found.
        tag: String,
        /// The whole record, re-serialized for the error report.
        record: String,
    },

    /// An equipment record has no `Type` field, or it isn't a string.
    #[error("equipment record has no string `Type` field: {record}")]
    MissingDiscriminator { record: String },

    /// A line was present but empty. End of input is *not* this error;
    /// it is reported by the transport as `Ok(None)`.
    #[error("empty line where a message was expected")]
    EmptyLine,

    /// Deserialization failed: malformed JSON, missing required fields,
    /// wrong data types, or one of the errors above raised from inside
    /// a nested field (see [`ProtocolError::kind`]).
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// Serialization failed. Not expected for any type in this crate.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),
}

impl ProtocolError {
    /// Classifies the error into one of the three protocol failure kinds.
    ///
    /// Errors raised by a nested `Deserialize` impl (a bad `Position` on
    /// the third ship, say) reach us as a `serde_json::Error` whose
    /// message starts with our own prefix, so the category survives.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format { .. } => ErrorKind::Format,
            Self::UnrecognizedVariant { .. } => ErrorKind::UnrecognizedVariant,
            Self::MissingDiscriminator { .. } | Self::EmptyLine | Self::Encode(_) => {
                ErrorKind::Protocol
            }
            Self::Decode(err) => classify_decode(err),
        }
    }
}

fn classify_decode(err: &serde_json::Error) -> ErrorKind {
    if !err.is_data() {
        return ErrorKind::Protocol;
    }
    let message = err.to_string();
    if message.starts_with(FORMAT_PREFIX) {
        ErrorKind::Format
    } else if message.starts_with(VARIANT_PREFIX) || message.starts_with(SERDE_UNKNOWN_VARIANT) {
        ErrorKind::UnrecognizedVariant
    } else {
        ErrorKind::Protocol
    }
}

/// The three categories of protocol failure.
///
/// All three are unrecoverable for the turn loop; the category only
/// changes how the failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed vector token or integer.
    Format,
    /// Unknown equipment discriminator or command tag.
    UnrecognizedVariant,
    /// Missing/empty line, invalid JSON, or schema mismatch.
    Protocol,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "format"),
            Self::UnrecognizedVariant => write!(f, "unrecognized-variant"),
            Self::Protocol => write!(f, "protocol"),
        }
    }
}
