//! CM service type and reject cause elements.

use std::fmt;

use num_enum::{FromPrimitive, IntoPrimitive};

use crate::codec::{CodecResult, IeParse, IeWrite};
use crate::frame::BitFrame;

/// CM Service Type (4-bit service selector).
///
/// Received in a CM Service Request; this subsystem never originates one,
/// so the element is parse-only. Any 4-bit code outside the defined set
/// decodes to [`CmServiceType::Unrecognized`] with the raw code preserved,
/// so unknown services still display and re-encode losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, FromPrimitive)]
#[repr(u8)]
pub enum CmServiceType {
    /// Mobile-originated call establishment
    MobileOriginatedCall = 1,
    /// Emergency call establishment
    EmergencyCall = 2,
    /// Short message service
    ShortMessage = 4,
    /// Supplementary service activation
    SupplementaryService = 8,
    /// Voice group call establishment
    VoiceGroupCall = 9,
    /// Voice broadcast call establishment
    VoiceBroadcast = 10,
    /// Location services
    LocationService = 11,
    /// Mobile-terminated call; local bookkeeping code, no air-interface
    /// code point
    MobileTerminatedCall = 100,
    /// Mobile-terminated short message; local bookkeeping code
    MobileTerminatedShortMessage = 101,
    /// Test call; local bookkeeping code
    TestCall = 102,
    /// Any code without an entry above; kept verbatim
    #[num_enum(catch_all)]
    Unrecognized(u8),
}

impl IeParse for CmServiceType {
    fn parse_v(frame: &mut BitFrame) -> CodecResult<Self> {
        let code = frame.read_field(4)? as u8;
        Ok(CmServiceType::from(code))
    }
}

impl fmt::Display for CmServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CmServiceType::MobileOriginatedCall => write!(f, "MOC"),
            CmServiceType::EmergencyCall => write!(f, "Emergency"),
            CmServiceType::ShortMessage => write!(f, "SMS"),
            CmServiceType::SupplementaryService => write!(f, "SS"),
            CmServiceType::VoiceGroupCall => write!(f, "VGCS"),
            CmServiceType::VoiceBroadcast => write!(f, "VBS"),
            CmServiceType::LocationService => write!(f, "LCS"),
            CmServiceType::MobileTerminatedCall => write!(f, "MTC"),
            CmServiceType::MobileTerminatedShortMessage => write!(f, "MTSMS"),
            CmServiceType::TestCall => write!(f, "Test"),
            CmServiceType::Unrecognized(code) => write!(f, "?{code}?"),
        }
    }
}

/// Reject Cause (8-bit cause code).
///
/// The cause values are defined by the carrying protocol; the codec treats
/// them as opaque. Write-only at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RejectCause(pub u8);

impl RejectCause {
    /// Creates a reject cause from its raw code.
    pub fn new(cause: u8) -> Self {
        Self(cause)
    }
}

impl IeWrite for RejectCause {
    fn write_v(&self, frame: &mut BitFrame) -> CodecResult<()> {
        frame.write_field(u64::from(self.0), 8)
    }
}

impl fmt::Display for RejectCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        for (code, expected) in [
            (1u64, CmServiceType::MobileOriginatedCall),
            (2, CmServiceType::EmergencyCall),
            (4, CmServiceType::ShortMessage),
            (8, CmServiceType::SupplementaryService),
            (9, CmServiceType::VoiceGroupCall),
            (10, CmServiceType::VoiceBroadcast),
            (11, CmServiceType::LocationService),
        ] {
            let mut frame = BitFrame::new();
            frame.write_field(code, 4).unwrap();
            frame.seek(0);
            assert_eq!(CmServiceType::parse_v(&mut frame).unwrap(), expected);
        }
    }

    #[test]
    fn test_parse_unrecognized_code_round_trips() {
        for code in [0u8, 3, 5, 6, 7, 12, 13, 14, 15] {
            let mut frame = BitFrame::new();
            frame.write_field(u64::from(code), 4).unwrap();
            frame.seek(0);
            let service = CmServiceType::parse_v(&mut frame).unwrap();
            assert_eq!(service, CmServiceType::Unrecognized(code));
            assert_eq!(u8::from(service), code);
        }
    }

    #[test]
    fn test_every_4_bit_code_round_trips() {
        for code in 0u8..16 {
            let mut frame = BitFrame::new();
            frame.write_field(u64::from(code), 4).unwrap();
            frame.seek(0);
            let service = CmServiceType::parse_v(&mut frame).unwrap();
            assert_eq!(u8::from(service), code);
        }
    }

    #[test]
    fn test_service_type_display() {
        assert_eq!(CmServiceType::MobileOriginatedCall.to_string(), "MOC");
        assert_eq!(CmServiceType::VoiceGroupCall.to_string(), "VGCS");
        assert_eq!(CmServiceType::Unrecognized(7).to_string(), "?7?");
    }

    #[test]
    fn test_parse_truncated_frame_fails() {
        let mut frame = BitFrame::new();
        frame.write_field(0b101, 3).unwrap();
        frame.seek(0);
        assert!(CmServiceType::parse_v(&mut frame).is_err());
    }

    #[test]
    fn test_reject_cause_write() {
        let mut frame = BitFrame::new();
        RejectCause::new(0x16).write_v(&mut frame).unwrap();
        assert_eq!(frame.to_bytes(), vec![0x16]);

        frame.seek(0);
        assert_eq!(frame.read_field(8).unwrap(), 0x16);
    }

    #[test]
    fn test_reject_cause_display() {
        assert_eq!(RejectCause::new(0x3A).to_string(), "0x3a");
    }
}
