//! Authentication challenge and response elements.

use std::fmt;

use crate::codec::{CodecResult, IeParse, IeWrite};
use crate::frame::BitFrame;

/// Authentication Parameter RAND (128-bit random challenge).
///
/// Held as two 64-bit halves; on the wire the high half precedes the low
/// half, each MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AuthRand {
    /// High 64 bits of the challenge
    pub high: u64,
    /// Low 64 bits of the challenge
    pub low: u64,
}

impl AuthRand {
    /// Creates a challenge from its two halves.
    pub fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// The 16-byte buffer handed to the external authentication routine.
    ///
    /// Layout contract: each half decomposed into little-endian bytes,
    /// low half first, then the whole buffer reversed. The consuming
    /// routine expects exactly this order; the first byte is the most
    /// significant byte of the high half.
    pub fn auth_token(&self) -> [u8; 16] {
        let mut token = [0u8; 16];
        token[..8].copy_from_slice(&self.low.to_le_bytes());
        token[8..].copy_from_slice(&self.high.to_le_bytes());
        token.reverse();
        token
    }
}

impl IeWrite for AuthRand {
    fn write_v(&self, frame: &mut BitFrame) -> CodecResult<()> {
        frame.write_field(self.high, 64)?;
        frame.write_field(self.low, 64)
    }
}

impl IeParse for AuthRand {
    fn parse_v(frame: &mut BitFrame) -> CodecResult<Self> {
        let high = frame.read_field(64)?;
        let low = frame.read_field(64)?;
        Ok(Self { high, low })
    }
}

impl fmt::Display for AuthRand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RAND = 0x{:016x}{:016x}", self.high, self.low)
    }
}

/// Authentication Parameter SRES (32-bit response value).
///
/// Opaque to the codec; only ever received at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AuthSres(pub u32);

impl AuthSres {
    /// Creates a response from its raw value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl IeParse for AuthSres {
    fn parse_v(frame: &mut BitFrame) -> CodecResult<Self> {
        Ok(Self(frame.read_field(32)? as u32))
    }
}

impl fmt::Display for AuthSres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_wire_layout() {
        let rand = AuthRand::new(0x0102030405060708, 0x090A0B0C0D0E0F10);
        let mut frame = BitFrame::new();
        rand.write_v(&mut frame).unwrap();
        assert_eq!(
            frame.to_bytes(),
            vec![
                0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, //
                0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10,
            ]
        );
    }

    #[test]
    fn test_rand_round_trip() {
        let rand = AuthRand::new(0xDEADBEEF00C0FFEE, 0x0123456789ABCDEF);
        let mut frame = BitFrame::new();
        rand.write_v(&mut frame).unwrap();
        frame.seek(0);
        assert_eq!(AuthRand::parse_v(&mut frame).unwrap(), rand);
    }

    #[test]
    fn test_auth_token_byte_order() {
        // Fixed vector: the export equals the byte reversal of
        // [low little-endian][high little-endian], so the first byte is
        // the most significant byte of the high half.
        let rand = AuthRand::new(0x0102030405060708, 0x090A0B0C0D0E0F10);
        assert_eq!(
            rand.auth_token(),
            [
                0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, //
                0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10,
            ]
        );
    }

    #[test]
    fn test_auth_token_distinguishes_halves() {
        let rand = AuthRand::new(0xFFFFFFFFFFFFFFFF, 0x0000000000000001);
        let token = rand.auth_token();
        assert_eq!(&token[..8], &[0xFF; 8]);
        assert_eq!(&token[8..], &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_sres_parse() {
        let mut frame = BitFrame::new();
        frame.write_field(0xCAFEBABE, 32).unwrap();
        frame.seek(0);
        assert_eq!(AuthSres::parse_v(&mut frame).unwrap(), AuthSres(0xCAFEBABE));
    }

    #[test]
    fn test_sres_truncated_fails() {
        let mut frame = BitFrame::from_bytes(&[0xCA, 0xFE]);
        assert!(AuthSres::parse_v(&mut frame).is_err());
    }

    #[test]
    fn test_display_renders_hex() {
        let rand = AuthRand::new(0x1, 0x2);
        assert_eq!(
            rand.to_string(),
            "RAND = 0x00000000000000010000000000000002"
        );
        assert_eq!(AuthSres(0x1F).to_string(), "0x0000001f");
    }
}
