//! The `"x/y/z"` vector token.
//!
//! The server packs every position, velocity and target into one string
//! token instead of a JSON object. [`Vector`] implements `Display` and
//! `FromStr` for that form, and its serde impls go through them, so any
//! struct field of type `Vector` (or `Option<Vector>`) just works.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ProtocolError;

/// Component separator in the wire form.
const SEPARATOR: char = '/';

/// An immutable triple of signed integers.
///
/// No unit system is implied; the server uses the same type for grid
/// positions, velocities and acceleration requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Encodes to the wire token. Never fails.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decodes a wire token.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Format`] unless the token is exactly three
    /// base-10 integers separated by `/`. Whitespace is not trimmed.
    pub fn decode(token: &str) -> Result<Self, ProtocolError> {
        token.parse()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}{SEPARATOR}{}", self.x, self.y, self.z)
    }
}

impl FromStr for Vector {
    type Err = ProtocolError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        // At most 3 parts: "1/2/3/4" leaves "3/4" as the last part, which
        // then fails to parse as an integer.
        let parts: Vec<&str> = token.splitn(3, SEPARATOR).collect();
        let [x, y, z] = parts.as_slice() else {
            return Err(format_error(
                token,
                format!("expected 3 components, got {}", parts.len()),
            ));
        };
        Ok(Self::new(
            parse_component(token, x)?,
            parse_component(token, y)?,
            parse_component(token, z)?,
        ))
    }
}

fn parse_component(token: &str, component: &str) -> Result<i32, ProtocolError> {
    component
        .parse()
        .map_err(|e| format_error(token, format!("component {component:?}: {e}")))
}

fn format_error(token: &str, reason: String) -> ProtocolError {
    ProtocolError::Format {
        token: token.to_string(),
        reason,
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

impl Serialize for Vector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(VectorVisitor)
    }
}

struct VectorVisitor;

impl Visitor<'_> for VectorVisitor {
    type Value = Vector;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a vector token \"x/y/z\"")
    }

    fn visit_str<E: de::Error>(self, token: &str) -> Result<Vector, E> {
        token.parse().map_err(E::custom)
    }
}
