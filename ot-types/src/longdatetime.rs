//! Datetimes, in the font epoch and as absolute instants

/// Seconds from 1904-01-01T00:00:00Z to 1970-01-01T00:00:00Z.
const SECONDS_1904_TO_1970: i64 = 2_082_844_800;

/// A datetime as stored in a font file.
///
/// This is represented as a number of seconds since 12:00 midnight, January 1, 1904, UTC.
/// Use [`LongDateTime::to_timestamp`] to obtain an instant that does not
/// depend on this epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck_derive::AnyBitPattern))]
#[repr(transparent)]
pub struct LongDateTime(i64);

impl LongDateTime {
    /// Create a new datetime from a number of seconds since 1904-01-01, UTC.
    pub const fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// The number of seconds since 00:00 1904-01-01, UTC.
    ///
    /// This can be a negative number, which presumably represents a date prior
    /// to the reference date.
    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// The absolute instant this datetime refers to.
    pub const fn to_timestamp(self) -> Timestamp {
        Timestamp(self.0.wrapping_sub(SECONDS_1904_TO_1970))
    }
}

crate::newtype_scalar!(LongDateTime, [u8; 8]);

/// An absolute instant, with a resolution of one second.
///
/// Table records store their creation and modification dates as timestamps;
/// the conversion from the on-disk 1904 epoch happens while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(i64);

impl Timestamp {
    /// 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Timestamp = Timestamp(0);

    /// 1904-01-01T00:00:00Z, the zero point of [`LongDateTime`].
    pub const FONT_EPOCH: Timestamp = Timestamp(-SECONDS_1904_TO_1970);

    /// Create a timestamp from a number of seconds relative to the Unix epoch.
    pub const fn from_unix_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// The number of seconds relative to the Unix epoch.
    pub const fn unix_secs(self) -> i64 {
        self.0
    }

    /// Encode this instant relative to the font epoch.
    pub const fn to_long_date_time(self) -> LongDateTime {
        LongDateTime(self.0.wrapping_add(SECONDS_1904_TO_1970))
    }

    /// Convert to a [`SystemTime`][std::time::SystemTime].
    ///
    /// Returns `None` if the instant is not representable on this platform.
    #[cfg(feature = "std")]
    pub fn to_system_time(self) -> Option<std::time::SystemTime> {
        let offset = std::time::Duration::from_secs(self.0.unsigned_abs());
        if self.0 >= 0 {
            std::time::UNIX_EPOCH.checked_add(offset)
        } else {
            std::time::UNIX_EPOCH.checked_sub(offset)
        }
    }

    /// Create a timestamp from a [`SystemTime`][std::time::SystemTime],
    /// truncating sub-second precision towards the Unix epoch.
    #[cfg(feature = "std")]
    pub fn from_system_time(time: std::time::SystemTime) -> Self {
        match time.duration_since(std::time::UNIX_EPOCH) {
            Ok(after) => Self(i64::try_from(after.as_secs()).unwrap_or(i64::MAX)),
            Err(before) => Self(
                i64::try_from(before.duration().as_secs())
                    .map(|secs| -secs)
                    .unwrap_or(i64::MIN),
            ),
        }
    }
}

impl From<LongDateTime> for Timestamp {
    fn from(value: LongDateTime) -> Self {
        value.to_timestamp()
    }
}

impl From<Timestamp> for LongDateTime {
    fn from(value: Timestamp) -> Self {
        value.to_long_date_time()
    }
}

#[cfg(feature = "chrono")]
impl Timestamp {
    /// Convert to a UTC [`chrono::DateTime`].
    ///
    /// Returns `None` if the instant is outside of the range chrono supports.
    pub fn to_chrono(self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.0, 0)
    }

    /// Create a timestamp from a [`chrono::DateTime`], dropping sub-second
    /// precision.
    pub fn from_chrono<Tz: chrono::TimeZone>(date: &chrono::DateTime<Tz>) -> Self {
        Self(date.timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    #[test]
    fn font_epoch() {
        assert_eq!(LongDateTime::new(0).to_timestamp(), Timestamp::FONT_EPOCH);
        assert_eq!(
            LongDateTime::new(SECONDS_1904_TO_1970).to_timestamp(),
            Timestamp::UNIX_EPOCH
        );
        // 2015-02-19T22:33:26Z
        let date = Timestamp::from_unix_secs(1_424_385_206);
        assert_eq!(date.to_long_date_time().as_secs(), 3_507_230_006);
    }

    #[test]
    fn conversion_is_lossless() {
        for secs in [0, 1, -1, 3_507_230_006, i64::MAX, i64::MIN] {
            let date = LongDateTime::new(secs);
            assert_eq!(date.to_timestamp().to_long_date_time(), date);
            assert_eq!(LongDateTime::from(Timestamp::from(date)), date);
        }
    }

    #[test]
    fn big_endian() {
        let date = LongDateTime::from_raw([0, 0, 0, 0, 0xD1, 0x0B, 0x6E, 0x4E]);
        assert_eq!(date.as_secs(), 0xD10B_6E4E);
        assert_eq!(date.to_raw(), [0, 0, 0, 0, 0xD1, 0x0B, 0x6E, 0x4E]);
    }

    #[test]
    #[cfg(feature = "std")]
    fn system_time() {
        let date = Timestamp::from_unix_secs(1_424_385_206);
        let time = date.to_system_time().unwrap();
        assert_eq!(Timestamp::from_system_time(time), date);
        let before = Timestamp::FONT_EPOCH.to_system_time().unwrap();
        assert_eq!(Timestamp::from_system_time(before), Timestamp::FONT_EPOCH);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn chrono_dates() {
        use chrono::{Datelike, Timelike};

        let date = LongDateTime::new(3_507_230_006).to_timestamp();
        let chrono_date = date.to_chrono().unwrap();
        assert_eq!(
            (chrono_date.year(), chrono_date.month(), chrono_date.day()),
            (2015, 2, 19)
        );
        assert_eq!(
            (chrono_date.hour(), chrono_date.minute(), chrono_date.second()),
            (22, 33, 26)
        );
        assert_eq!(Timestamp::from_chrono(&chrono_date), date);
    }
}
