use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU8, NonZeroU16};

/// A calendar year in `1..=9999`. Zero is unrepresentable, so the niche
/// keeps `Option<Year>` pointer-sized.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// `ParseError::InvalidYear` when `value` is 0 or above `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(inner) if value <= MAX_YEAR => Ok(Self(inner)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// First year of the 10-year block this year belongs to (2024 -> 2020).
    /// Widened to i32 because decade arithmetic may leave the u16 domain.
    #[inline]
    pub const fn decade_start(self) -> i32 {
        (self.get() as i32 / 10) * 10
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// A month number in `1..=12`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// `ParseError::InvalidMonth` when `value` is 0 or above `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(inner) if value <= MAX_MONTH => Ok(Self(inner)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full English month name, for the popover header
    pub const fn name(self) -> &'static str {
        const NAMES: [&str; MAX_MONTH as usize] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[self.get() as usize - 1]
    }

    /// Whether this is January
    #[inline]
    pub const fn is_first(self) -> bool {
        self.get() == JANUARY
    }

    /// Whether this is December
    #[inline]
    pub const fn is_last(self) -> bool {
        self.get() == DECEMBER
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day-of-month validated against its year and month, so February 30th is
/// unrepresentable rather than merely discouraged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// `ParseError::InvalidDay` when `value` is 0 or exceeds the length of
    /// the given month in the given year.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(inner) if value <= days_in_month(year, month) => Ok(Self(inner)),
            _ => Err(ParseError::InvalidDay {
                month,
                day: value,
                year,
            }),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    /// Context-free conversion used by serde: without a year and month only
    /// the universal bound `1..=31` can be checked here.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match NonZeroU8::new(value) {
            Some(inner) if value <= MAX_DAY => Ok(Self(inner)),
            _ => Err(ParseError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            }),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
