use crate::alphabet::{BASE, BASE58};
use crate::{EncodeError, EncodeResult, DECODED_LEN, ENCODED_LEN};

/// Writes the 22 symbols for `input` into `output`.
///
/// Digits are produced least-significant first and written from the right, so the slots left
/// untouched hold the zero symbol and form the left padding.
pub fn encode_into(input: &[u8; DECODED_LEN], output: &mut [u8; ENCODED_LEN]) {
    let mut value = u128::from_be_bytes(*input);
    output.fill(BASE58.zero());

    // 58^22 > 2^128, so the index never runs past the start of the buffer.
    let mut index = ENCODED_LEN;
    while value > 0 {
        index -= 1;
        output[index] = BASE58.symbol_at((value % BASE as u128) as usize);
        value /= BASE as u128;
    }
}

/// Encodes exactly 16 big-endian bytes as a 22-character string.
pub fn encode_bytes(input: &[u8; DECODED_LEN]) -> String {
    let mut output = [0u8; ENCODED_LEN];
    encode_into(input, &mut output);
    output.iter().map(|&symbol| symbol as char).collect()
}

/// Encodes a 128-bit value as a 22-character string.
pub fn encode_u128(value: u128) -> String {
    encode_bytes(&value.to_be_bytes())
}

/// Encodes a byte slice, which must be exactly 16 bytes long.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidInputLength`] for any other length.
pub fn encode(input: &[u8]) -> EncodeResult<String> {
    let bytes: &[u8; DECODED_LEN] = input
        .try_into()
        .map_err(|_| EncodeError::InvalidInputLength {
            actual: input.len(),
        })?;
    Ok(encode_bytes(bytes))
}
