//! The [`B58Uuid`] value type.
//!
//! This module joins the Base58 codec to the `uuid` crate: text parsing, canonical formatting
//! and random generation are all delegated to `uuid`.

use crate::{DecodeError, UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// A UUID whose textual form is its 22-character Base58 encoding.
///
/// Any 128-bit value is a valid `B58Uuid`, so once constructed it always has an encoding.
///
/// # Construction
/// - [`B58Uuid::new`] generates a random version 4 UUID.
/// - [`B58Uuid::parse`] validates an encoded string (`BWBeN28Vb7cMEx7Ym8AUzs`).
/// - [`B58Uuid::parse_uuid`] parses standard UUID text (`550e8400-e29b-41d4-a716-446655440000`).
/// - [`B58Uuid::from_uuid`] / `From<Uuid>` wrap an existing value.
///
/// # Display format
/// `Display` writes the encoded form; [`B58Uuid::to_uuid_string`] gives the standard
/// hyphenated form.
///
/// # Ordering
/// `Ord` compares the numeric value, which is the same order as comparing encoded strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct B58Uuid(Uuid);

impl Default for B58Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl B58Uuid {
    /// Generates a new random (version 4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a 22-character Base58 string.
    ///
    /// This only accepts the encoded form. Standard UUID text is rejected; use
    /// [`parse_uuid`](Self::parse_uuid) for that.
    ///
    /// # Arguments
    ///
    /// * `input` - Encoded identifier, for example `BWBeN28Vb7cMEx7Ym8AUzs`.
    ///
    /// # Returns
    ///
    /// Returns the decoded [`B58Uuid`] on success.
    ///
    /// # Errors
    ///
    /// Structural decode failures (empty input, wrong length, a character outside the alphabet,
    /// a value above `2^128 - 1`) are returned as [`UuidError::Decode`] with the codec's error
    /// unchanged; anything else becomes [`UuidError::InvalidEncodedFormat`] carrying `input`.
    pub fn parse(input: &str) -> UuidResult<Self> {
        b58uuid_base58::decode(input)
            .map(|bytes| Self(Uuid::from_bytes(bytes)))
            .map_err(|err| classify_decode_error(err, input))
    }

    /// Parses standard UUID text.
    ///
    /// Parsing is delegated to `uuid::Uuid::parse_str`, so hyphenated, simple (32 hex digits),
    /// braced and URN forms are all accepted, in either case.
    ///
    /// # Arguments
    ///
    /// * `input` - UUID text, for example `550e8400-e29b-41d4-a716-446655440000`.
    ///
    /// # Returns
    ///
    /// Returns the wrapped [`B58Uuid`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidUuidFormat`] carrying `input` if it does not parse.
    pub fn parse_uuid(input: &str) -> UuidResult<Self> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|source| UuidError::InvalidUuidFormat {
                input: input.to_owned(),
                source,
            })
    }

    /// Returns the underlying `uuid::Uuid`.
    pub const fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the 16 big-endian bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Returns the standard form: 36 lowercase characters with hyphens.
    pub fn to_uuid_string(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

/// Decides whether a codec error is surfaced as-is or replaced by a generic format error.
fn classify_decode_error(err: DecodeError, input: &str) -> UuidError {
    match err {
        DecodeError::Empty
        | DecodeError::InvalidLength { .. }
        | DecodeError::InvalidCharacter { .. }
        | DecodeError::Overflow => UuidError::Decode(err),
        _ => UuidError::InvalidEncodedFormat {
            input: input.to_owned(),
        },
    }
}

impl From<Uuid> for B58Uuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<B58Uuid> for Uuid {
    fn from(id: B58Uuid) -> Self {
        id.0
    }
}

impl fmt::Display for B58Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut encoded = [0u8; b58uuid_base58::ENCODED_LEN];
        b58uuid_base58::encode_into(self.0.as_bytes(), &mut encoded);
        for &symbol in &encoded {
            fmt::Write::write_char(f, symbol as char)?;
        }
        Ok(())
    }
}

impl FromStr for B58Uuid {
    type Err = UuidError;

    /// Parses the encoded form; equivalent to [`B58Uuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        B58Uuid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for B58Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for B58Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        B58Uuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
