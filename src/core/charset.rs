//! The 32-symbol Bech32 alphabet.
//!
//! Symbol values are indices into [`CHARSET`]. Lookups are case-insensitive;
//! encoding always yields lowercase and the encoder decides the final case.

/// Bech32 alphabet, indexed by 5-bit symbol value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separator between the human-readable part and the data part.
pub const SEPARATOR: char = '1';

/// Reverse lookup table over ASCII. `-1` marks characters outside the alphabet.
/// Upper- and lower-case forms map to the same value.
const CHARSET_REV: [i8; 128] = build_reverse_table();

const fn build_reverse_table() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        let c = CHARSET[i];
        table[c as usize] = i as i8;
        table[c.to_ascii_uppercase() as usize] = i as i8;
        i += 1;
    }
    table
}

/// Maps a character to its 5-bit symbol value, ignoring case.
///
/// Returns `None` if the character is not part of the alphabet under either
/// case. Non-ASCII characters are never members.
pub fn char_to_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match CHARSET_REV[c as usize] {
        -1 => None,
        v => Some(v as u8),
    }
}

/// Maps a symbol value in `0..32` to its lowercase character.
pub fn value_to_char(value: u8) -> Option<char> {
    CHARSET.get(value as usize).map(|&b| b as char)
}
