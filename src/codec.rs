//! Encoding/decoding traits and the codec error taxonomy.
//!
//! Every information element implements one or both of [`IeWrite`] and
//! [`IeParse`] against a [`BitFrame`](crate::frame::BitFrame). Several
//! elements only exist in one direction at this layer: the CM service type
//! is only ever received, the reject cause only ever sent.

use thiserror::Error;

use crate::frame::BitFrame;

/// Errors that can occur while encoding or decoding an information element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The bit frame has fewer bits remaining than a field requires.
    #[error("bit frame exhausted: needed {needed} bits, {remaining} remain")]
    OutOfRange {
        /// Bits the failing field required
        needed: usize,
        /// Bits left in the frame
        remaining: usize,
    },

    /// A value wider than its declared field width was passed to a write.
    #[error("value 0x{value:X} does not fit in a {width}-bit field")]
    FieldOverflow {
        /// The offending value
        value: u64,
        /// Declared field width in bits
        width: usize,
    },

    /// A character with no code point in the selected alphabet.
    #[error("character {0:?} has no encoding in the selected alphabet")]
    UnencodableChar(char),

    /// Decoded fields that do not form a valid calendar time.
    #[error("invalid calendar time: {0}")]
    InvalidTime(String),

    /// Invalid value encountered during decoding.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Trait for information elements that can write their value part.
pub trait IeWrite {
    /// Write the value part of this element at the frame's cursor.
    fn write_v(&self, frame: &mut BitFrame) -> CodecResult<()>;
}

/// Trait for information elements that can parse their value part.
pub trait IeParse: Sized {
    /// Parse the value part of this element from the frame's cursor.
    ///
    /// On failure the frame cursor is left wherever the failing read
    /// stopped; no partial value is returned.
    fn parse_v(frame: &mut BitFrame) -> CodecResult<Self>;
}
