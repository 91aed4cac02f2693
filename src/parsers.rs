//! Fixed-format string parsing.
//!
//! Every textual form accepted by `tinytz` has a fixed length and fixed
//! separator positions:
//!
//! | Type | Format | Length |
//! |------|--------|--------|
//! | `LocalDate` | `YYYY-MM-DD` | 10 |
//! | `LocalTime` | `hh:mm:ss` | 8 |
//! | `LocalDateTime` | `YYYY-MM-DDThh:mm:ss` | 19 |
//! | `TimeOffset` | `±hh:mm` | 6 |
//! | `OffsetDateTime` | `YYYY-MM-DDThh:mm:ss±hh:mm` | 25 |
//!
//! Input of the wrong length, or with anything but an ASCII digit in a
//! digit position, is rejected before any field is interpreted.

use crate::{TimeError, TimeResult};

pub(crate) const DATE_LEN: usize = 10;
pub(crate) const TIME_LEN: usize = 8;
pub(crate) const DATE_TIME_LEN: usize = DATE_LEN + 1 + TIME_LEN;
pub(crate) const OFFSET_LEN: usize = 6;
pub(crate) const OFFSET_DATE_TIME_LEN: usize = DATE_TIME_LEN + OFFSET_LEN;

/// Parsed `YYYY-MM-DD` fields, not yet validated as a calendar date.
pub(crate) struct DateRecord {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

/// Parsed `hh:mm:ss` fields, not yet range checked.
pub(crate) struct TimeRecord {
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
}

/// A cursor over a fixed-length ASCII input.
pub(crate) struct FixedFormatParser<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> FixedFormatParser<'a> {
    /// Creates a parser, rejecting input that is not exactly `len` bytes.
    pub(crate) fn new(source: &'a str, len: usize) -> TimeResult<Self> {
        if source.len() != len {
            return Err(TimeError::syntax().with_message("unexpected input length."));
        }
        let bytes = source.as_bytes();
        if !bytes.iter().all(u8::is_ascii) {
            return Err(TimeError::syntax().with_message("non-ASCII character in input."));
        }
        Ok(Self { bytes, cursor: 0 })
    }

    fn next(&mut self) -> TimeResult<u8> {
        let byte = self
            .bytes
            .get(self.cursor)
            .copied()
            .ok_or(TimeError::syntax().with_message("unexpected end of input."))?;
        self.cursor += 1;
        Ok(byte)
    }

    /// Reads exactly `count` ASCII digits.
    pub(crate) fn digits(&mut self, count: usize) -> TimeResult<u32> {
        let mut value = 0u32;
        for _ in 0..count {
            let byte = self.next()?;
            if !byte.is_ascii_digit() {
                return Err(TimeError::syntax().with_message("expected an ASCII digit."));
            }
            value = value * 10 + u32::from(byte - b'0');
        }
        Ok(value)
    }

    pub(crate) fn expect(&mut self, separator: u8) -> TimeResult<()> {
        if self.next()? != separator {
            return Err(TimeError::syntax().with_message("unexpected separator."));
        }
        Ok(())
    }

    /// Reads a `+` or `-` sign, returning `-1` for `-`.
    pub(crate) fn sign(&mut self) -> TimeResult<i32> {
        match self.next()? {
            b'+' => Ok(1),
            b'-' => Ok(-1),
            _ => Err(TimeError::syntax().with_message("expected an offset sign.")),
        }
    }

    pub(crate) fn finish(&self) -> TimeResult<()> {
        if self.cursor != self.bytes.len() {
            return Err(TimeError::syntax().with_message("trailing characters in input."));
        }
        Ok(())
    }

    pub(crate) fn date(&mut self) -> TimeResult<DateRecord> {
        let year = self.digits(4)? as i32;
        self.expect(b'-')?;
        let month = self.digits(2)? as u8;
        self.expect(b'-')?;
        let day = self.digits(2)? as u8;
        Ok(DateRecord { year, month, day })
    }

    pub(crate) fn time(&mut self) -> TimeResult<TimeRecord> {
        let hour = self.digits(2)? as u8;
        self.expect(b':')?;
        let minute = self.digits(2)? as u8;
        self.expect(b':')?;
        let second = self.digits(2)? as u8;
        Ok(TimeRecord {
            hour,
            minute,
            second,
        })
    }

    /// Reads `±hh:mm` and returns signed minutes.
    pub(crate) fn offset(&mut self) -> TimeResult<i32> {
        let sign = self.sign()?;
        let hour = self.digits(2)? as i32;
        self.expect(b':')?;
        let minute = self.digits(2)? as i32;
        if minute > 59 {
            return Err(TimeError::syntax().with_message("offset minute out of range."));
        }
        Ok(sign * (hour * 60 + minute))
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedFormatParser, DATE_LEN};

    #[test]
    fn rejects_wrong_length() {
        assert!(FixedFormatParser::new("2024-01-0", DATE_LEN).is_err());
        assert!(FixedFormatParser::new("2024-01-011", DATE_LEN).is_err());
    }

    #[test]
    fn rejects_non_digits() {
        let mut parser = FixedFormatParser::new("2024-0a-01", DATE_LEN).unwrap();
        assert!(parser.date().is_err());
        let mut parser = FixedFormatParser::new("+024-01-01", DATE_LEN).unwrap();
        assert!(parser.date().is_err());
        let mut parser = FixedFormatParser::new("2024/01/01", DATE_LEN).unwrap();
        assert!(parser.date().is_err());
    }

    #[test]
    fn reads_fields() {
        let mut parser = FixedFormatParser::new("2024-03-10", DATE_LEN).unwrap();
        let record = parser.date().unwrap();
        assert_eq!((record.year, record.month, record.day), (2024, 3, 10));
        assert!(parser.finish().is_ok());

        let mut parser = FixedFormatParser::new("-05:45", 6).unwrap();
        assert_eq!(parser.offset().unwrap(), -345);
    }
}
