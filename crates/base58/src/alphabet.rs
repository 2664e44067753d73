//! The Base58 symbol table.
//!
//! Symbol order defines digit values, so it is part of the wire format: changing it would
//! silently change every identifier ever encoded.

/// Radix of the numeral system.
pub const BASE: usize = 58;

/// The 58 symbols in digit order (`ALPHABET[d]` is the symbol for digit `d`).
///
/// Excludes the visually ambiguous `0`, `O`, `I` and `l` (and `+`, `/`).
pub const ALPHABET: &[u8; BASE] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The alphabet used by the encoder and decoder, built at compile time.
pub const BASE58: Alphabet = match Alphabet::new(ALPHABET) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// Errors raised while building an [`Alphabet`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub(crate) enum AlphabetError {
    #[error("Duplicate character '{character}' at indexes {first} and {second}")]
    DuplicateCharacter {
        character: char,
        first: usize,
        second: usize,
    },
    #[error("Non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
}

/// Forward and reverse mapping between digit values and symbols.
///
/// The reverse lookup is a direct-indexed table over the ASCII range, with `None` marking
/// bytes that are not part of the alphabet.
#[derive(Clone, Debug)]
pub struct Alphabet {
    symbols: [u8; BASE],
    lookup: [Option<u8>; 128],
}

impl Alphabet {
    pub(crate) const fn new(symbols: &[u8; BASE]) -> Result<Self, AlphabetError> {
        let mut lookup: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < BASE {
            let character = symbols[index];
            if character >= 128 {
                return Err(AlphabetError::NonAsciiCharacter { character, index });
            }
            if let Some(first) = lookup[character as usize] {
                return Err(AlphabetError::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            lookup[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self {
            symbols: *symbols,
            lookup,
        })
    }

    /// Returns the symbol for digit value `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 58`.
    pub const fn symbol_at(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    /// The symbol for digit zero, also used as left padding.
    pub const fn zero(&self) -> u8 {
        self.symbols[0]
    }

    /// Returns the digit value of `character`, or `None` if it is not in the alphabet.
    pub fn index_of(&self, character: char) -> Option<u8> {
        if character.is_ascii() {
            self.lookup[character as usize]
        } else {
            None
        }
    }

    /// Returns true if `character` is one of the 58 symbols.
    pub fn contains(&self, character: char) -> bool {
        self.index_of(character).is_some()
    }

    /// The symbols in digit order.
    pub const fn symbols(&self) -> &[u8; BASE] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_and_index_are_inverse() {
        for index in 0..BASE {
            let symbol = BASE58.symbol_at(index);
            assert_eq!(BASE58.index_of(symbol as char), Some(index as u8));
        }
    }

    #[test]
    fn test_zero_symbol_is_one() {
        assert_eq!(BASE58.zero(), b'1');
        assert_eq!(BASE58.index_of('1'), Some(0));
        assert_eq!(BASE58.index_of('z'), Some(57));
    }

    #[test]
    fn test_ambiguous_characters_are_excluded() {
        for character in ['0', 'O', 'I', 'l', '+', '/'] {
            assert!(!BASE58.contains(character), "{character} should be excluded");
        }
    }

    #[test]
    fn test_non_ascii_is_not_found() {
        assert_eq!(BASE58.index_of('é'), None);
        assert_eq!(BASE58.index_of('\u{1F600}'), None);
        assert_eq!(BASE58.index_of('\0'), None);
    }

    #[test]
    fn test_symbols_are_ascending() {
        // Sorting encoded strings must sort the underlying values.
        assert!(BASE58.symbols().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_rejects_duplicate_symbol() {
        let mut symbols = *ALPHABET;
        symbols[57] = b'1';

        match Alphabet::new(&symbols) {
            Err(AlphabetError::DuplicateCharacter {
                character,
                first,
                second,
            }) => {
                assert_eq!(character, '1');
                assert_eq!(first, 0);
                assert_eq!(second, 57);
            }
            other => panic!("Expected DuplicateCharacter error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_rejects_non_ascii_symbol() {
        let mut symbols = *ALPHABET;
        symbols[3] = 0xC3;

        let err = Alphabet::new(&symbols).map(|_| ()).unwrap_err();
        assert_eq!(
            err,
            AlphabetError::NonAsciiCharacter {
                character: 0xC3,
                index: 3
            }
        );
        assert_eq!(err.to_string(), "Non-ascii character 0xc3 at index 3");
    }
}
