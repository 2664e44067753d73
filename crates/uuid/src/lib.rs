//! Base58-encoded UUIDs.
//!
//! A UUID is 128 bits; written in hex with hyphens it takes 36 characters. This crate writes the
//! same value as **22 Base58 characters** instead, using an alphabet with no visually ambiguous
//! symbols (`0`, `O`, `I`, `l`) and nothing that needs escaping in URLs.
//!
//! ## Encoded form
//! - Length: always 22, including for the nil UUID (`1111111111111111111111`)
//! - Characters: `123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz`
//! - Example: `550e8400-e29b-41d4-a716-446655440000` ↔ `BWBeN28Vb7cMEx7Ym8AUzs`
//!
//! Because the width is fixed and the alphabet is in ascending ASCII order, sorting encoded
//! strings sorts the UUIDs they represent.
//!
//! ## API
//! - [`encode`], [`decode`] and [`generate`] work on strings.
//! - [`B58Uuid`] is a value type that guarantees a valid identifier once constructed.
//!
//! ```
//! let encoded = b58uuid::encode("550e8400-e29b-41d4-a716-446655440000")?;
//! assert_eq!(encoded, "BWBeN28Vb7cMEx7Ym8AUzs");
//! assert_eq!(b58uuid::decode(&encoded)?, "550e8400-e29b-41d4-a716-446655440000");
//! # Ok::<(), b58uuid::UuidError>(())
//! ```

mod service;

pub use b58uuid_base58::{DecodeError, EncodeError, ALPHABET, DECODED_LEN, ENCODED_LEN};
pub use service::{B58Uuid, Uuid};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for UUID encoding operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// The UUID text could not be parsed.
    #[error("Invalid UUID format: {input}")]
    InvalidUuidFormat {
        input: String,
        #[source]
        source: uuid::Error,
    },

    /// A structural decode failure (empty, wrong length, bad character, overflow), passed
    /// through unchanged.
    #[error(transparent)]
    Decode(DecodeError),

    /// Any other decode failure.
    #[error("Invalid b58uuid format: {input}")]
    InvalidEncodedFormat { input: String },
}

/// Result type for UUID encoding operations.
pub type UuidResult<T> = Result<T, UuidError>;

/// Encodes UUID text to its 22-character Base58 form.
///
/// Accepts any form `uuid` can parse: hyphenated, simple (no hyphens), braced or URN, in
/// either case.
///
/// # Errors
///
/// Returns [`UuidError::InvalidUuidFormat`] carrying `uuid_text` if it does not parse.
pub fn encode(uuid_text: &str) -> UuidResult<String> {
    let id = B58Uuid::parse_uuid(uuid_text)?;
    let encoded = id.to_string();
    tracing::trace!(uuid = uuid_text, encoded = %encoded, "encoded uuid");
    Ok(encoded)
}

/// Decodes a 22-character Base58 string to canonical UUID text (lowercase, hyphenated).
///
/// # Errors
///
/// Returns [`UuidError::Decode`] for empty input, wrong length, characters outside the
/// alphabet or values above `2^128 - 1`, and [`UuidError::InvalidEncodedFormat`] otherwise.
pub fn decode(b58: &str) -> UuidResult<String> {
    let uuid_text = B58Uuid::parse(b58)?.to_uuid_string();
    tracing::trace!(encoded = b58, uuid = %uuid_text, "decoded uuid");
    Ok(uuid_text)
}

/// Generates a random (version 4) UUID and returns its encoded form.
pub fn generate() -> String {
    let encoded = B58Uuid::new().to_string();
    tracing::trace!(encoded = %encoded, "generated uuid");
    encoded
}
