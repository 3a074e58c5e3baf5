//! BCD nibble pairs and the timezone octet.
//!
//! Calendar fields are written as two 4-bit decimal digits with the
//! least-significant digit first. The timezone field shares the digit
//! swap but splits unevenly: a sign bit, the low digit in 3 bits, the
//! high digit in 4 bits, with the magnitude counted in quarter-hour
//! units.

use crate::codec::CodecResult;
use crate::frame::BitFrame;

/// Seconds per quarter-hour, the timezone field's unit.
pub const QUARTER_HOUR_SECS: i32 = 15 * 60;

/// Writes a two-digit value as a digit-swapped BCD nibble pair.
///
/// Contract: `value < 100`.
pub fn write_bcd_pair(frame: &mut BitFrame, value: u32) -> CodecResult<()> {
    debug_assert!(value < 100, "BCD pair holds two decimal digits");
    frame.write_field(u64::from(value % 10), 4)?;
    frame.write_field(u64::from(value / 10), 4)
}

/// Reads a digit-swapped BCD nibble pair back to its two-digit value.
pub fn read_bcd_pair(frame: &mut BitFrame) -> CodecResult<u32> {
    let low = frame.read_field(4)? as u32;
    let high = frame.read_field(4)? as u32;
    Ok(low + high * 10)
}

/// Writes a timezone offset in seconds as the 8-bit zone field.
///
/// The offset is converted to quarter-hour units; the sign goes into a
/// 1-bit field and the absolute value is digit-split low-first into a
/// 3-bit and a 4-bit field. The 3-bit low digit cannot hold 8 or 9, so
/// magnitudes whose quarter-hour count ends in those digits alias; the
/// digit is masked to the field width, matching the wire layout.
pub fn write_zone_offset(frame: &mut BitFrame, offset_secs: i32) -> CodecResult<()> {
    let quarters = offset_secs / QUARTER_HOUR_SECS;
    let sign = u64::from(quarters < 0);
    let magnitude = quarters.unsigned_abs();
    frame.write_field(sign, 1)?;
    frame.write_field(u64::from(magnitude % 10) & 0x7, 3)?;
    frame.write_field(u64::from(magnitude / 10), 4)
}

/// Reads the 8-bit zone field back to a timezone offset in seconds.
pub fn read_zone_offset(frame: &mut BitFrame) -> CodecResult<i32> {
    let sign = frame.read_field(1)?;
    let magnitude = (frame.read_field(3)? + frame.read_field(4)? * 10) as i32;
    let quarters = if sign != 0 { -magnitude } else { magnitude };
    Ok(quarters * QUARTER_HOUR_SECS)
}
