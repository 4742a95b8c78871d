//! 24-hour clock helpers.

use std::fmt;

use nalgebra::RealField;

use crate::embedding::circular_distance;
use crate::math::scalar::lit;
use crate::period::Period;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Local hour of arrival in `[0, 24)`.
///
/// `timezone_shift` is the destination offset minus the origin offset, in
/// hours. Daylight-saving transitions are not modelled.
pub fn arrival_hour<T>(departure: T, duration: T, timezone_shift: T) -> T
where
    T: RealField + Copy,
{
    Period::hours().normalize(departure + duration + timezone_shift)
}

/// Hours between two clock readings the short way round, in `[0, 12]`.
pub fn clock_distance<T>(a: T, b: T) -> T
where
    T: RealField + Copy,
{
    circular_distance(a, b, Period::hours())
}

/// Wall-clock time rounded to the minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Round fractional `hours` to the nearest minute, wrapping past midnight.
    ///
    /// `None` for non-finite input.
    pub fn from_hours<T>(hours: T) -> Option<Self>
    where
        T: RealField + Copy,
    {
        if !hours.is_finite() {
            return None;
        }
        let minutes = (Period::hours().normalize(hours) * lit(60.0)).round();
        let minutes: f64 = nalgebra::try_convert(minutes)?;
        // 23:59:59 rounds up to 24:00, which is midnight
        Some(Self {
            minutes: (minutes as u32) % MINUTES_PER_DAY,
        })
    }

    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
