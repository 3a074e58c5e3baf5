//! Time Zone and Time element.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};
use tracing::debug;

use crate::bcd;
use crate::codec::{CodecError, CodecResult, IeParse};
use crate::frame::BitFrame;

/// Whether the element carries the local civil time or universal time.
///
/// Either way the zone octet is written from the injected [`ZoneContext`];
/// the kind only selects which calendar breakdown fills the BCD fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeKind {
    /// Calendar fields are the civil time at the context's offset
    Local,
    /// Calendar fields are the UTC breakdown
    #[default]
    Universal,
}

/// Injected timezone context.
///
/// Replaces the process-wide timezone configuration: the offset to encode
/// is passed in explicitly, so tests can supply arbitrary deterministic
/// zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneContext {
    offset: FixedOffset,
}

impl ZoneContext {
    /// Creates a context for the given offset east of UTC, in seconds.
    ///
    /// Returns `None` if the offset is out of range (a full day or more).
    pub fn new(offset_secs: i32) -> Option<Self> {
        FixedOffset::east_opt(offset_secs).map(|offset| Self { offset })
    }

    /// The UTC context (zero offset).
    pub fn utc() -> Self {
        Self {
            offset: FixedOffset::east_opt(0).expect("zero offset is in range"),
        }
    }

    /// The context's offset east of UTC, in seconds.
    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    fn fixed_offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for ZoneContext {
    fn default() -> Self {
        Self::utc()
    }
}

/// Time Zone and Time element.
///
/// Seven octets on the wire: six digit-swapped BCD pairs (year mod 100,
/// month, day, hour, minute, second) followed by the zone octet. The
/// century base is 2000.
///
/// Writing branches on [`TimeKind`]; parsing always reconstructs the
/// instant from the decoded fields as universal time and reports
/// [`TimeKind::Universal`], discarding the decoded zone. The asymmetry is
/// deliberate and matches deployed peers; see `DESIGN.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZoneAndTime {
    /// The instant being conveyed
    pub time: DateTime<Utc>,
    /// Which breakdown fills the calendar fields
    pub kind: TimeKind,
}

impl TimeZoneAndTime {
    /// Creates an element for the given instant and interpretation.
    pub fn new(time: DateTime<Utc>, kind: TimeKind) -> Self {
        Self { time, kind }
    }

    /// Writes the value part using the injected timezone context.
    pub fn write_v(&self, frame: &mut BitFrame, ctx: &ZoneContext) -> CodecResult<()> {
        let fields: NaiveDateTime = match self.kind {
            TimeKind::Local => self.time.with_timezone(&ctx.fixed_offset()).naive_local(),
            TimeKind::Universal => self.time.naive_utc(),
        };

        let year = fields.year().rem_euclid(100) as u32;
        let (month, day) = (fields.month(), fields.day());
        let (hour, minute, second) = (fields.hour(), fields.minute(), fields.second());

        bcd::write_bcd_pair(frame, year)?;
        bcd::write_bcd_pair(frame, month)?;
        bcd::write_bcd_pair(frame, day)?;
        bcd::write_bcd_pair(frame, hour)?;
        bcd::write_bcd_pair(frame, minute)?;
        bcd::write_bcd_pair(frame, second)?;

        // A universal breakdown carries no offset of its own; the zone
        // octet comes from the injected context either way.
        let zone = ctx.offset_seconds();
        bcd::write_zone_offset(frame, zone)?;

        debug!(
            year,
            month,
            day,
            hour,
            minute,
            second,
            zone_quarters = zone / bcd::QUARTER_HOUR_SECS,
            "encoded time zone and time"
        );
        Ok(())
    }
}

impl IeParse for TimeZoneAndTime {
    fn parse_v(frame: &mut BitFrame) -> CodecResult<Self> {
        let year = 2000 + bcd::read_bcd_pair(frame)? as i32;
        let month = bcd::read_bcd_pair(frame)?;
        let day = bcd::read_bcd_pair(frame)?;
        let hour = bcd::read_bcd_pair(frame)?;
        let minute = bcd::read_bcd_pair(frame)?;
        let second = bcd::read_bcd_pair(frame)?;
        // The fields are combined directly as universal time; the zone is
        // decoded but does not shift the instant.
        let _zone = bcd::read_zone_offset(frame)?;

        let time = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .ok_or_else(|| {
                CodecError::InvalidTime(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })?;
        Ok(Self {
            time,
            kind: TimeKind::Universal,
        })
    }
}

impl fmt::Display for TimeZoneAndTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.time.to_rfc2822())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_universal_zero_offset_nibbles() {
        // 2010-06-05 12:34:56 UTC, digit-swapped BCD per field, zone 0.
        let element = TimeZoneAndTime::new(instant(2010, 6, 5, 12, 34, 56), TimeKind::Universal);
        let mut frame = BitFrame::new();
        element.write_v(&mut frame, &ZoneContext::utc()).unwrap();
        assert_eq!(
            frame.to_bytes(),
            vec![0x01, 0x60, 0x50, 0x21, 0x43, 0x65, 0x00]
        );
    }

    #[test]
    fn test_universal_fields_with_nonzero_context() {
        // Universal kind keeps UTC calendar fields but still writes the
        // context's zone.
        let ctx = ZoneContext::new(3600).unwrap();
        let element = TimeZoneAndTime::new(instant(2010, 6, 5, 12, 34, 56), TimeKind::Universal);
        let mut frame = BitFrame::new();
        element.write_v(&mut frame, &ctx).unwrap();
        assert_eq!(
            frame.to_bytes(),
            vec![0x01, 0x60, 0x50, 0x21, 0x43, 0x65, 0x40]
        );
    }

    #[test]
    fn test_local_fields_shift_with_context() {
        // +1 h context: local breakdown moves the hour field, zone = 4
        // quarter-hours.
        let ctx = ZoneContext::new(3600).unwrap();
        let element = TimeZoneAndTime::new(instant(2010, 6, 5, 12, 34, 56), TimeKind::Local);
        let mut frame = BitFrame::new();
        element.write_v(&mut frame, &ctx).unwrap();
        assert_eq!(
            frame.to_bytes(),
            vec![0x01, 0x60, 0x50, 0x31, 0x43, 0x65, 0x40]
        );
    }

    #[test]
    fn test_local_negative_offset_crosses_midnight() {
        // -5 h context on 2021-01-01 03:00:00 UTC lands on the previous
        // local day; zone octet is sign 1, 20 quarter-hours.
        let ctx = ZoneContext::new(-5 * 3600).unwrap();
        let element = TimeZoneAndTime::new(instant(2021, 1, 1, 3, 0, 0), TimeKind::Local);
        let mut frame = BitFrame::new();
        element.write_v(&mut frame, &ctx).unwrap();
        assert_eq!(
            frame.to_bytes(),
            vec![0x02, 0x21, 0x13, 0x22, 0x00, 0x00, 0x82]
        );
    }

    #[test]
    fn test_universal_round_trip() {
        let element = TimeZoneAndTime::new(instant(2015, 12, 31, 23, 59, 59), TimeKind::Universal);
        let mut frame = BitFrame::new();
        element.write_v(&mut frame, &ZoneContext::utc()).unwrap();
        frame.seek(0);
        let parsed = TimeZoneAndTime::parse_v(&mut frame).unwrap();
        assert_eq!(parsed, element);
    }

    #[test]
    fn test_decoder_reports_universal_kind() {
        // The decoder does not recover the original kind; local-encoded
        // fields come back as a universal instant at the local civil time.
        let ctx = ZoneContext::new(3600).unwrap();
        let element = TimeZoneAndTime::new(instant(2010, 6, 5, 12, 0, 0), TimeKind::Local);
        let mut frame = BitFrame::new();
        element.write_v(&mut frame, &ctx).unwrap();
        frame.seek(0);
        let parsed = TimeZoneAndTime::parse_v(&mut frame).unwrap();
        assert_eq!(parsed.kind, TimeKind::Universal);
        assert_eq!(parsed.time, instant(2010, 6, 5, 13, 0, 0));
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        let mut frame = BitFrame::new();
        // year 10, month 13, day 32: valid BCD, invalid calendar.
        for value in [10u32, 13, 32, 0, 0, 0] {
            bcd::write_bcd_pair(&mut frame, value).unwrap();
        }
        bcd::write_zone_offset(&mut frame, 0).unwrap();
        frame.seek(0);
        let err = TimeZoneAndTime::parse_v(&mut frame).unwrap_err();
        assert!(matches!(err, CodecError::InvalidTime(_)));
    }

    #[test]
    fn test_parse_truncated_frame_fails() {
        let mut frame = BitFrame::from_bytes(&[0x01, 0x60, 0x50]);
        assert!(TimeZoneAndTime::parse_v(&mut frame).is_err());
    }

    #[test]
    fn test_zone_context_range() {
        assert!(ZoneContext::new(86_400).is_none());
        assert_eq!(ZoneContext::new(-18_000).unwrap().offset_seconds(), -18_000);
        assert_eq!(ZoneContext::utc().offset_seconds(), 0);
    }
}
