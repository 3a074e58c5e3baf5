//! Network Name element.

use std::fmt;

use crate::alphabet;
use crate::codec::{CodecError, CodecResult, IeWrite};
use crate::frame::BitFrame;

/// Character encoding selected by the network name header octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// GSM 7-bit default alphabet, packed to a byte boundary
    #[default]
    Gsm7,
    /// UCS-2, one 16-bit field per character
    Ucs2,
}

const SCHEME_GSM7: u64 = 0b000;
const SCHEME_UCS2: u64 = 0b001;

/// Network Name element.
///
/// The value part is one header octet
/// `{ext=1, coding scheme (3 bits), CI (1 bit), spare count (3 bits)}`
/// followed by the encoded characters. For the default alphabet the spare
/// count records the padding appended by the 7-bit packing; for UCS-2 it
/// is written as zero.
///
/// The codec never truncates: a name longer than the space the carrying
/// message reserves is a caller error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkName {
    /// The displayed name
    pub name: String,
    /// Selected character encoding
    pub alphabet: Alphabet,
    /// Country-initials flag: whether the handset should add them
    pub ci: bool,
}

impl NetworkName {
    /// Creates a default-alphabet network name without country initials.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alphabet: Alphabet::Gsm7,
            ci: false,
        }
    }

    /// Length of the encoded value part in bytes, header octet included.
    pub fn value_len(&self) -> usize {
        let sz = self.name.chars().count();
        match self.alphabet {
            Alphabet::Gsm7 => 1 + (sz * 7 + alphabet::spare_bits(sz)) / 8,
            Alphabet::Ucs2 => 1 + 2 * sz,
        }
    }

    /// Parses the value part; `length` is the value length in bytes as
    /// given by the carrying message's length field.
    pub fn parse_v(frame: &mut BitFrame, length: usize) -> CodecResult<Self> {
        if length == 0 {
            return Err(CodecError::InvalidValue(
                "network name needs at least the header octet".into(),
            ));
        }
        let header = frame.read_field(8)?;
        let scheme = (header >> 4) & 0x7;
        let ci = header & 0x8 != 0;
        let body = length - 1;

        match scheme {
            SCHEME_GSM7 => {
                let spare = (header & 0x7) as usize;
                let chars = frame.segment(frame.position(), body * 8)?;
                frame.seek(frame.position() + body * 8);
                let count = (body * 8).saturating_sub(spare) / 7;
                let name = alphabet::unpack_septets(&chars.into_bytes(), count)?;
                Ok(Self {
                    name,
                    alphabet: Alphabet::Gsm7,
                    ci,
                })
            }
            SCHEME_UCS2 => {
                let mut name = String::with_capacity(body / 2);
                for _ in 0..body / 2 {
                    let cp = frame.read_field(16)? as u32;
                    let c = char::from_u32(cp).ok_or_else(|| {
                        CodecError::InvalidValue(format!("invalid UCS-2 code point 0x{cp:04X}"))
                    })?;
                    name.push(c);
                }
                Ok(Self {
                    name,
                    alphabet: Alphabet::Ucs2,
                    ci,
                })
            }
            other => Err(CodecError::InvalidValue(format!(
                "unsupported coding scheme 0b{other:03b}"
            ))),
        }
    }
}

impl IeWrite for NetworkName {
    fn write_v(&self, frame: &mut BitFrame) -> CodecResult<()> {
        match self.alphabet {
            Alphabet::Ucs2 => {
                let header = 0x80 | (SCHEME_UCS2 << 4) | (u64::from(self.ci) << 3);
                frame.write_field(header, 8)?;
                for c in self.name.chars() {
                    let cp = c as u32;
                    if cp > 0xFFFF {
                        return Err(CodecError::UnencodableChar(c));
                    }
                    frame.write_field(u64::from(cp), 16)?;
                }
            }
            Alphabet::Gsm7 => {
                let sz = self.name.chars().count();
                let spare = alphabet::spare_bits(sz) as u64;
                let header = 0x80 | (SCHEME_GSM7 << 4) | (u64::from(self.ci) << 3) | spare;
                frame.write_field(header, 8)?;
                for byte in alphabet::pack_septets(&self.name)? {
                    frame.write_field(u64::from(byte), 8)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
