mod consts;
mod grid;
mod picker;
mod prelude;
mod range;
mod types;
mod year_picker;

pub use consts::*;
pub use grid::MonthCursor;
pub use picker::{Change, DatePicker, DayCell, PickerConfig, PickerView};
pub use range::{BoundsError, DateRange, RangeCheck};
pub use types::{Day, Month, Year};
pub use year_picker::{YearPicker, YearPickerMode, YearPickerView};

use crate::prelude::*;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use types::days_in_month;

/// A single Gregorian calendar day.
/// Equality and ordering compare by calendar-day value only; there is no
/// time-of-day component anywhere in this crate. Construction from text or
/// raw numbers fails for dates that don't exist (no Feb 30) instead of
/// silently normalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "month.get()", "day.get()", "year.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Malformed date text: {_0:?} (expected MM/DD/YYYY)")]
    Malformed(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from validated components
    pub const fn new(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw numbers, validating every component
    ///
    /// # Errors
    /// Returns the component's `ParseError` when year, month, or day is out
    /// of range for the Gregorian calendar.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month as u8 (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    /// True when both dates fall in the same month of the same year
    pub fn same_month(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Sunday-based weekday index: 0 = Sunday .. 6 = Saturday
    pub fn weekday(&self) -> u8 {
        // Zeller's congruence; January and February count as months 13 and
        // 14 of the previous year.
        let mut y = i32::from(self.year.get());
        let mut m = i32::from(self.month.get());
        let d = i32::from(self.day.get());
        if m < 3 {
            y -= 1;
            m += 12;
        }
        let k = y % 100;
        let j = y / 100;
        let h = (d + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 + 5 * j) % 7;
        // Zeller yields 0 = Saturday; rotate so 0 = Sunday.
        ((h + 6) % 7) as u8
    }

    /// Next calendar day, or `None` past December 31st of `MAX_YEAR`
    pub fn succ(&self) -> Option<Self> {
        let (y, m, d) = (self.year.get(), self.month.get(), self.day.get());
        if d < days_in_month(y, m) {
            Self::from_ymd(y, m, d + 1).ok()
        } else if m < DECEMBER {
            Self::from_ymd(y, m + 1, MIN_DAY).ok()
        } else if y < MAX_YEAR {
            Self::from_ymd(y + 1, JANUARY, MIN_DAY).ok()
        } else {
            None
        }
    }

    /// Previous calendar day, or `None` before January 1st of year 1
    pub fn pred(&self) -> Option<Self> {
        let (y, m, d) = (self.year.get(), self.month.get(), self.day.get());
        if d > MIN_DAY {
            Self::from_ymd(y, m, d - 1).ok()
        } else if m > JANUARY {
            Self::from_ymd(y, m - 1, days_in_month(y, m - 1)).ok()
        } else if y > 1 {
            Self::from_ymd(y - 1, DECEMBER, days_in_month(y - 1, DECEMBER)).ok()
        } else {
            None
        }
    }

    /// Today as a UTC civil date, read from the system clock
    pub fn today_utc() -> Self {
        let days = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| (d.as_secs() / 86_400) as i64)
            .unwrap_or(0);
        let (y, m, d) = civil_from_days(days);
        if y >= 1 && y <= i64::from(MAX_YEAR) {
            if let Ok(date) = Self::from_ymd(y as u16, m, d) {
                return date;
            }
        }
        unix_epoch_date()
    }
}

/// January 1st 1970, the fallback when the clock reads nonsense
fn unix_epoch_date() -> CalendarDate {
    match CalendarDate::from_ymd(1970, JANUARY, MIN_DAY) {
        Ok(date) => date,
        Err(_) => unreachable!("the Unix epoch is a valid calendar date"),
    }
}

/// Days-since-epoch to civil (year, month, day), Gregorian
fn civil_from_days(days_since_epoch: i64) -> (i64, u8, u8) {
    let z = days_since_epoch + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses exactly the fixed pattern `MM/DD/YYYY`: two digits, a slash,
    /// two digits, a slash, four digits. Anything else is `Malformed`;
    /// numerically well-formed text naming a date that doesn't exist fails
    /// component validation instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != PATTERN_LEN
            || bytes[2] != DATE_SEPARATOR as u8
            || bytes[5] != DATE_SEPARATOR as u8
        {
            return Err(ParseError::Malformed(s.to_owned()));
        }

        let digit = |idx: usize| -> Result<u16, ParseError> {
            let b = bytes[idx];
            if b.is_ascii_digit() {
                Ok(u16::from(b - b'0'))
            } else {
                Err(ParseError::Malformed(s.to_owned()))
            }
        };

        let month = (digit(0)? * 10 + digit(1)?) as u8;
        let day = (digit(3)? * 10 + digit(4)?) as u8;
        let year = digit(6)? * 1000 + digit(7)? * 100 + digit(8)? * 10 + digit(9)?;

        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
