//! Bit-exact codec for GSM L3 Mobility Management information elements.
//!
//! Each information element (IE) has a fixed protocol-defined bit layout;
//! this crate serializes structured values to those exact bit sequences
//! and back, down to bit order, digit order, spare-bit padding and sign
//! conventions.
//!
//! # Elements
//!
//! - [`CmServiceType`]: 4-bit service selector (parse-only)
//! - [`RejectCause`]: 8-bit cause code (write-only)
//! - [`NetworkName`]: header octet + 7-bit packed or UCS-2 text
//! - [`TimeZoneAndTime`]: BCD timestamp with a quarter-hour zone octet
//! - [`AuthRand`] / [`AuthSres`]: 128-bit challenge and 32-bit response
//!
//! Elements read and write their value parts against a [`BitFrame`];
//! assembling complete messages around them is the caller's business.
//!
//! # Example
//!
//! ```rust
//! use gsm_mm_codec::{BitFrame, IeWrite, NetworkName};
//!
//! let name = NetworkName::new("Test");
//! let mut frame = BitFrame::new();
//! name.write_v(&mut frame).unwrap();
//!
//! // Header octet {ext=1, scheme=000, CI=0, spare=4}, then 4 packed
//! // septets and 4 spare bits.
//! assert_eq!(frame.to_bytes(), [0x84, 0xD4, 0xF2, 0x9C, 0x0E]);
//! ```

pub mod alphabet;
pub mod bcd;
pub mod codec;
pub mod frame;
pub mod ies;


pub use codec::{CodecError, CodecResult, IeParse, IeWrite};
pub use frame::BitFrame;
pub use ies::{
    Alphabet, AuthRand, AuthSres, CmServiceType, NetworkName, RejectCause, TimeKind,
    TimeZoneAndTime, ZoneContext,
};
