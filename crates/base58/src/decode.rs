use crate::alphabet::{BASE, BASE58};
use crate::{DecodeError, DecodeResult, DECODED_LEN, ENCODED_LEN};

/// Decodes a 22-character string to its 128-bit value.
///
/// Checks run in this order and the first failure is returned:
/// 1. the input is non-empty,
/// 2. the input is exactly 22 characters long,
/// 3. then, left to right, each character is in the alphabet and folding it into the
///    accumulator does not exceed `u128::MAX`.
///
/// # Errors
///
/// - [`DecodeError::Empty`] for `""`.
/// - [`DecodeError::InvalidLength`] when the character count is not 22.
/// - [`DecodeError::InvalidCharacter`] with the first offending character and its position.
/// - [`DecodeError::Overflow`] when the numeral is larger than `2^128 - 1`.
pub fn decode_u128(input: &str) -> DecodeResult<u128> {
    if input.is_empty() {
        return Err(DecodeError::Empty);
    }

    let actual = input.chars().count();
    if actual != ENCODED_LEN {
        return Err(DecodeError::InvalidLength {
            expected: ENCODED_LEN,
            actual,
        });
    }

    input
        .chars()
        .enumerate()
        .try_fold(0u128, |accumulator, (position, character)| {
            let digit = BASE58
                .index_of(character)
                .ok_or(DecodeError::InvalidCharacter {
                    character,
                    position,
                })?;

            accumulator
                .checked_mul(BASE as u128)
                .and_then(|shifted| shifted.checked_add(u128::from(digit)))
                .ok_or(DecodeError::Overflow)
        })
}

/// Decodes a 22-character string to 16 big-endian bytes.
///
/// Accepts exactly the strings [`encode_bytes`](crate::encode_bytes) can produce; see
/// [`decode_u128`] for the order in which the input is validated.
///
/// # Arguments
///
/// * `input` - Encoded value, for example `YcVfxkQb6JRzqk5kF2tNLv`.
///
/// # Returns
///
/// Returns the value as 16 bytes, most significant byte first. Leading zero bytes are kept,
/// so the nil value decodes to `[0; 16]`.
///
/// # Errors
///
/// Returns [`DecodeError::Empty`], [`DecodeError::InvalidLength`],
/// [`DecodeError::InvalidCharacter`] or [`DecodeError::Overflow`] as described on
/// [`decode_u128`].
pub fn decode(input: &str) -> DecodeResult<[u8; DECODED_LEN]> {
    decode_u128(input).map(u128::to_be_bytes)
}

/// Decodes into a caller-supplied buffer. `output` is left untouched on error.
pub fn decode_into(input: &str, output: &mut [u8; DECODED_LEN]) -> DecodeResult<()> {
    *output = decode(input)?;
    Ok(())
}

/// Returns true if `input` is a valid encoding of a 128-bit value.
pub fn is_valid(input: &str) -> bool {
    decode_u128(input).is_ok()
}
