use crate::consts::{GRID_LEN, MAX_YEAR, MIN_DAY};
use crate::prelude::*;
use crate::types::{Month, Year};
use crate::{CalendarDate, ParseError};

/// Linear month index used for cursor arithmetic (year * 12 + month - 1).
/// The supported span excludes January of year 1 and December of `MAX_YEAR`:
/// their six-week grids would reach outside the representable year domain.
const MONTH_IDX_MIN: i32 = 12 + 1;
const MONTH_IDX_MAX: i32 = (MAX_YEAR as i32) * 12 + 11 - 1;

/// The month currently displayed in the calendar grid, independent of any
/// selected date. Holds year and month only; navigation never has to clamp
/// a day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{} {}", "month.name()", "year")]
pub struct MonthCursor {
    year: Year,
    month: Month,
}

impl MonthCursor {
    /// Creates a cursor for the given month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for the two calendar-edge months
    /// (January of year 1, December of year 9999) whose grid would leave the
    /// supported year domain.
    pub fn new(year: Year, month: Month) -> Result<Self, ParseError> {
        let cursor = Self { year, month };
        if !cursor.grid_in_domain() {
            return Err(ParseError::InvalidYear(year.get()));
        }
        Ok(cursor)
    }

    /// Cursor for the month containing `date`, clamped away from the two
    /// calendar-edge months
    pub fn of(date: CalendarDate) -> Self {
        let cursor = Self {
            year: date.year_typed(),
            month: date.month_typed(),
        };
        if cursor.grid_in_domain() {
            cursor
        } else if date.year() == 1 {
            cursor.shift(1)
        } else {
            cursor.shift(-1)
        }
    }

    /// Returns the displayed year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the displayed month as u8 (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Full English name of the displayed month
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// True when `date` falls inside the displayed month
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.year.get() == date.year() && self.month.get() == date.month()
    }

    /// Shifts the cursor by `months` (negative for past), saturating at the
    /// edges of the supported span
    pub fn shift(&self, months: i32) -> Self {
        let idx = i32::from(self.year.get()) * 12 + i32::from(self.month.get()) - 1;
        let idx = idx.saturating_add(months).clamp(MONTH_IDX_MIN, MONTH_IDX_MAX);
        let year = (idx / 12) as u16;
        let month = (idx % 12 + 1) as u8;
        match (Year::new(year), Month::new(month)) {
            (Ok(year), Ok(month)) => Self { year, month },
            // Unreachable: idx is clamped into the valid span.
            _ => *self,
        }
    }

    /// Moves to the same month of another year, used by year selection.
    /// Returns `None` when the year is out of domain or the result would be
    /// a calendar-edge month.
    pub fn with_year(&self, year: i32) -> Option<Self> {
        let year = Year::new(u16::try_from(year).ok()?).ok()?;
        Self::new(year, self.month).ok()
    }

    /// Builds the fixed six-week grid for the displayed month: exactly 42
    /// consecutive days, the first of which is the Sunday on or before the
    /// first of the month. Pure function of the cursor.
    pub fn build_grid(&self) -> Vec<CalendarDate> {
        let mut cells = Vec::with_capacity(GRID_LEN);
        let Ok(first) = CalendarDate::from_ymd(self.year.get(), self.month.get(), MIN_DAY) else {
            return cells;
        };

        let mut day = first;
        for _ in 0..first.weekday() {
            match day.pred() {
                Some(prev) => day = prev,
                None => break,
            }
        }

        while cells.len() < GRID_LEN {
            cells.push(day);
            match day.succ() {
                Some(next) => day = next,
                None => break,
            }
        }

        debug_assert_eq!(cells.len(), GRID_LEN);
        cells
    }

    fn grid_in_domain(&self) -> bool {
        let idx = i32::from(self.year.get()) * 12 + i32::from(self.month.get()) - 1;
        (MONTH_IDX_MIN..=MONTH_IDX_MAX).contains(&idx)
    }
}
