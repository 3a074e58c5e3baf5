//! `BitFrame` - the bit-addressable buffer information elements are built in.
//!
//! A frame is an ordered sequence of bits with a cursor. Multi-bit fields
//! are read and written most-significant-bit first, matching the air
//! interface convention. The 7-bit default alphabet additionally needs the
//! reversed-field variants plus [`BitFrame::lsb8msb`], which reinterprets
//! the bit order within each byte.

use bitvec::prelude::*;

use crate::codec::{CodecError, CodecResult};

/// A growable bit-level read/write buffer with an internal bit cursor.
///
/// Writes extend the frame as needed; reads are bounds-checked and fail
/// with [`CodecError::OutOfRange`] rather than panicking.
///
/// # Example
/// ```
/// use gsm_mm_codec::BitFrame;
///
/// let mut frame = BitFrame::new();
/// frame.write_field(0b1010, 4).unwrap();
/// frame.write_field(0b1100, 4).unwrap();
///
/// frame.seek(0);
/// assert_eq!(frame.read_field(8).unwrap(), 0b10101100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitFrame {
    bits: BitVec<u8, Msb0>,
    index: usize, // bit cursor
}

impl BitFrame {
    /// Creates a new empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frame with capacity reserved for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
            index: 0,
        }
    }

    /// Creates a frame holding the given bytes, cursor at 0.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            bits: BitVec::from_slice(data),
            index: 0,
        }
    }

    /// Moves the cursor to the given bit index.
    #[inline]
    pub fn seek(&mut self, index: usize) {
        self.index = index;
    }

    /// Returns the current cursor position in bits.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Returns the total number of bits in the frame.
    #[inline]
    pub fn len_bits(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if the frame holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the number of bits between the cursor and the end.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        self.bits.len().saturating_sub(self.index)
    }

    /// Writes the low `width` bits of `value` at the cursor, MSB first.
    ///
    /// The frame grows as needed. A `width` of 0 is a no-op. Fails with
    /// [`CodecError::FieldOverflow`] if `value` does not fit in `width`
    /// bits; nothing is written in that case.
    ///
    /// # Panics
    /// Panics if `width` > 64.
    pub fn write_field(&mut self, value: u64, width: usize) -> CodecResult<()> {
        if width == 0 {
            return Ok(());
        }
        assert!(width <= 64, "field width must be <= 64");
        if width < 64 && value >> width != 0 {
            return Err(CodecError::FieldOverflow { value, width });
        }

        self.grow_to(self.index + width);
        for i in 0..width {
            let bit = (value >> (width - 1 - i)) & 1 != 0;
            self.bits.set(self.index + i, bit);
        }
        self.index += width;
        Ok(())
    }

    /// Writes the low `width` bits of `value` with the bit order reversed
    /// within the field (LSB of `value` first).
    ///
    /// Used by the 7-bit default alphabet packing, which lays out each
    /// character's bits in reverse before the byte-order normalization.
    pub fn write_field_reversed(&mut self, value: u64, width: usize) -> CodecResult<()> {
        if width == 0 {
            return Ok(());
        }
        assert!(width <= 64, "field width must be <= 64");
        if width < 64 && value >> width != 0 {
            return Err(CodecError::FieldOverflow { value, width });
        }

        self.grow_to(self.index + width);
        for i in 0..width {
            let bit = (value >> i) & 1 != 0;
            self.bits.set(self.index + i, bit);
        }
        self.index += width;
        Ok(())
    }

    /// Reads `width` bits at the cursor, MSB first, and advances.
    ///
    /// # Panics
    /// Panics if `width` > 64.
    pub fn read_field(&mut self, width: usize) -> CodecResult<u64> {
        if width == 0 {
            return Ok(0);
        }
        assert!(width <= 64, "field width must be <= 64");
        if self.remaining_bits() < width {
            return Err(CodecError::OutOfRange {
                needed: width,
                remaining: self.remaining_bits(),
            });
        }

        let mut value = 0u64;
        for i in 0..width {
            value <<= 1;
            if self.bits[self.index + i] {
                value |= 1;
            }
        }
        self.index += width;
        Ok(value)
    }

    /// Reads `width` bits with the bit order reversed within the field.
    ///
    /// Inverse of [`BitFrame::write_field_reversed`].
    pub fn read_field_reversed(&mut self, width: usize) -> CodecResult<u64> {
        if width == 0 {
            return Ok(0);
        }
        assert!(width <= 64, "field width must be <= 64");
        if self.remaining_bits() < width {
            return Err(CodecError::OutOfRange {
                needed: width,
                remaining: self.remaining_bits(),
            });
        }

        let mut value = 0u64;
        for i in 0..width {
            if self.bits[self.index + i] {
                value |= 1 << i;
            }
        }
        self.index += width;
        Ok(value)
    }

    /// Extracts `length` bits starting at `start` as an independent frame.
    ///
    /// The extracted frame has its own cursor at 0; the parent cursor is
    /// unchanged.
    pub fn segment(&self, start: usize, length: usize) -> CodecResult<BitFrame> {
        if start + length > self.bits.len() {
            return Err(CodecError::OutOfRange {
                needed: length,
                remaining: self.bits.len().saturating_sub(start),
            });
        }
        let mut bits = BitVec::with_capacity(length);
        bits.extend_from_bitslice(&self.bits[start..start + length]);
        Ok(BitFrame { bits, index: 0 })
    }

    /// Reverses the bit order within each successive 8-bit group.
    ///
    /// This normalizes a region packed LSB-first (the 7-bit alphabet
    /// quirk) to the frame's native MSB-first byte layout. Applying it
    /// twice restores the original contents.
    pub fn lsb8msb(&mut self) {
        for chunk in self.bits.chunks_mut(8) {
            chunk.reverse();
        }
    }

    /// Returns the frame contents as bytes, zero-padded to a byte boundary.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.bits.as_raw_slice().to_vec();
        out.truncate(self.bits.len().div_ceil(8));
        out
    }

    /// Consumes the frame, returning its contents as bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        let len = self.bits.len().div_ceil(8);
        let mut out = self.bits.into_vec();
        out.truncate(len);
        out
    }

    fn grow_to(&mut self, bits: usize) {
        if bits > self.bits.len() {
            self.bits.resize(bits, false);
        }
    }
}
