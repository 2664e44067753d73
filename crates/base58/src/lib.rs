//! Fixed-width Base58 codec for 128-bit identifiers.
//!
//! Every 16-byte value maps to exactly one 22-character string over the alphabet
//! `123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz`, and back.
//!
//! ## Encoding
//! The 16 bytes are read as a big-endian `u128` and written as a base-58 numeral, most
//! significant digit first, left-padded with the zero symbol (`1`) to 22 characters.
//!
//! ## Decoding
//! The decoder only accepts strings that the encoder could have produced:
//! - exactly 22 characters,
//! - every character in the alphabet,
//! - a numeric value no larger than `2^128 - 1`.
//!
//! Overflow is detected with checked `u128` arithmetic after every digit, so an out-of-range
//! numeral can never wrap silently.
//!
//! ## Example
//!
//! ```
//! use b58uuid_base58::{decode, encode_bytes};
//!
//! let bytes = [0xffu8; 16];
//! let encoded = encode_bytes(&bytes);
//! assert_eq!(encoded, "YcVfxkQb6JRzqk5kF2tNLv");
//! assert_eq!(decode(&encoded), Ok(bytes));
//! ```

mod alphabet;
mod decode;
mod encode;

pub use alphabet::{Alphabet, ALPHABET, BASE, BASE58};
pub use decode::{decode, decode_into, decode_u128, is_valid};
pub use encode::{encode, encode_bytes, encode_into, encode_u128};

/// Length in characters of every encoded value.
pub const ENCODED_LEN: usize = 22;

/// Length in bytes of every decoded value.
pub const DECODED_LEN: usize = 16;

/// Error type for encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// The input was not exactly 16 bytes.
    #[error("Input must be exactly 16 bytes, got {actual}")]
    InvalidInputLength { actual: usize },
}

/// Error type for decoding.
///
/// Marked `#[non_exhaustive]`: callers that classify decode failures must keep a fallback arm.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input string was empty.
    #[error("Empty Base58 string")]
    Empty,

    /// The input was not 22 characters long.
    #[error("Invalid Base58 length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character outside the alphabet, at a zero-based character position.
    #[error("Invalid Base58 character at position {position}: {character}")]
    InvalidCharacter { character: char, position: usize },

    /// The numeral is larger than `2^128 - 1`.
    #[error("Overflow: decoded value exceeds maximum UUID value (2^128 - 1)")]
    Overflow,
}

/// Result type for encoding.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;
