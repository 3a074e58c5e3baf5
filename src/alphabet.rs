//! The GSM 7-bit default alphabet and its packing transformation.
//!
//! Text IEs carry either 16-bit UCS-2 characters written directly, or
//! characters of the 7-bit default alphabet packed to a byte boundary.
//! The 7-bit packing is the subtle one: each character's 7 bits are laid
//! down in reversed order, spare zero bits pad the total to a multiple of
//! 8, and one byte-wise bit-order normalization over the whole region then
//! produces the wire layout. [`pack_septets`] and [`unpack_septets`]
//! implement that transformation as pure byte-level functions so it can be
//! tested against reference encodings without a carrying message.

use crate::codec::{CodecError, CodecResult};
use crate::frame::BitFrame;

/// The 7-bit default alphabet, indexed by code point.
///
/// Code 0x1B is the escape to the extension table; extension characters
/// are not supported and the escape maps to itself.
const GSM7_BASIC: [char; 128] = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å', //
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', '\u{1b}', 'Æ', 'æ', 'ß', 'É', //
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', //
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?', //
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', //
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§', //
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', //
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à', //
];

/// Maps a character to its 7-bit default-alphabet code point.
pub fn encode_char(c: char) -> CodecResult<u8> {
    GSM7_BASIC
        .iter()
        .position(|&g| g == c)
        .map(|p| p as u8)
        .ok_or(CodecError::UnencodableChar(c))
}

/// Maps a 7-bit code point back to its character.
pub fn decode_char(code: u8) -> char {
    GSM7_BASIC[(code & 0x7F) as usize]
}

/// Number of spare padding bits needed to byte-align `sz` packed septets.
///
/// Always in `0..=7`, and `sz * 7 + spare_bits(sz)` is always a multiple
/// of 8.
pub fn spare_bits(sz: usize) -> usize {
    (8 - (sz * 7) % 8) % 8
}

/// Packs a string of default-alphabet characters to its wire bytes.
///
/// Each 7-bit code is written bit-reversed, spare zero bits are appended,
/// and the whole region is normalized byte-wise. The result is
/// `(sz * 7 + spare_bits(sz)) / 8` bytes.
pub fn pack_septets(text: &str) -> CodecResult<Vec<u8>> {
    let sz = text.chars().count();
    let spare = spare_bits(sz);

    let mut chars = BitFrame::with_capacity(sz * 7 + spare);
    for c in text.chars() {
        chars.write_field_reversed(u64::from(encode_char(c)?), 7)?;
    }
    chars.write_field(0, spare)?;
    chars.lsb8msb();
    Ok(chars.into_bytes())
}

/// Unpacks `count` default-alphabet characters from wire bytes.
///
/// Exact inverse of [`pack_septets`]. Fails with
/// [`CodecError::OutOfRange`] if `data` holds fewer than `count` septets.
pub fn unpack_septets(data: &[u8], count: usize) -> CodecResult<String> {
    let mut chars = BitFrame::from_bytes(data);
    chars.lsb8msb();

    let mut text = String::with_capacity(count);
    for _ in 0..count {
        let code = chars.read_field_reversed(7)? as u8;
        text.push(decode_char(code));
    }
    Ok(text)
}
