/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Longest possible month length
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Field separator in the wire pattern (month-first US format)
pub const DATE_SEPARATOR: char = '/';

/// Total width of the wire pattern `MM/DD/YYYY`
pub const PATTERN_LEN: usize = 10;

/// Placeholder hosts can render in an empty text input
pub const PATTERN_PLACEHOLDER: &str = "MM/DD/YYYY";

/// Days per week; the grid is seven columns wide
pub const WEEK_LEN: usize = 7;

/// Weeks in the calendar grid, fixed regardless of how many the month spans
pub const GRID_WEEKS: usize = 6;

/// Cell count of the calendar grid
pub const GRID_LEN: usize = WEEK_LEN * GRID_WEEKS;

/// Single-letter weekday header row, Sunday first
pub const WEEKDAY_LABELS: [&str; WEEK_LEN] = ["S", "M", "T", "W", "T", "F", "S"];

/// Years shown by the decade and sliding year pickers
pub const YEAR_WINDOW_LEN: usize = 12;

/// Default lower year bound when the host configures none
pub const DEFAULT_YEAR_MIN: i32 = 1900;

/// Default upper year bound when the host configures none
pub const DEFAULT_YEAR_MAX: i32 = 2100;
