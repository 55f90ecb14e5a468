use serde::{Deserialize, Serialize};

use crate::CalendarDate;

/// An optional pair of inclusive date bounds.
/// `None` on a side means unbounded on that side; when both are present the
/// minimum must not exceed the maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
}

/// Where a candidate date falls relative to a `DateRange`.
/// Bounds are inclusive: a date equal to the minimum or maximum is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    InRange,
    BelowMin,
    AboveMax,
}

/// Error type for range construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// Minimum bound is after the maximum bound.
    #[error("Invalid date bounds: min ({min}) is after max ({max})")]
    Inverted {
        min: CalendarDate,
        max: CalendarDate,
    },
}

impl DateRange {
    /// Creates a range with validation.
    ///
    /// # Errors
    /// Returns `BoundsError::Inverted` if both bounds are present and
    /// min > max.
    pub fn new(
        min: Option<CalendarDate>,
        max: Option<CalendarDate>,
    ) -> Result<Self, BoundsError> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(BoundsError::Inverted { min: lo, max: hi });
            }
        }
        Ok(Self { min, max })
    }

    /// A range unbounded on both sides; every date is selectable
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Returns the minimum bound, if any
    pub const fn min(&self) -> Option<CalendarDate> {
        self.min
    }

    /// Returns the maximum bound, if any
    pub const fn max(&self) -> Option<CalendarDate> {
        self.max
    }

    /// Classifies a candidate date against the bounds, inclusive at both ends
    pub fn classify(&self, date: CalendarDate) -> RangeCheck {
        if let Some(min) = self.min {
            if date < min {
                return RangeCheck::BelowMin;
            }
        }
        if let Some(max) = self.max {
            if date > max {
                return RangeCheck::AboveMax;
            }
        }
        RangeCheck::InRange
    }

    /// True when the date may be selected (equivalent to `InRange`)
    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        self.classify(date) == RangeCheck::InRange
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.min, self.max).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (min, max) = <(Option<CalendarDate>, Option<CalendarDate>)>::deserialize(deserializer)?;
        Self::new(min, max).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> CalendarDate {
        text.parse().unwrap()
    }

    #[test]
    fn test_new_valid() {
        assert!(DateRange::new(Some(date("01/01/2020")), Some(date("12/31/2030"))).is_ok());
        assert!(DateRange::new(Some(date("01/01/2020")), Some(date("01/01/2020"))).is_ok());
        assert!(DateRange::new(None, Some(date("12/31/2030"))).is_ok());
        assert!(DateRange::new(Some(date("01/01/2020")), None).is_ok());
        assert!(DateRange::new(None, None).is_ok());
    }

    #[test]
    fn test_new_inverted() {
        let result = DateRange::new(Some(date("12/31/2030")), Some(date("01/01/2020")));
        assert!(matches!(result, Err(BoundsError::Inverted { .. })));
    }

    #[test]
    fn test_classify_inclusive_bounds() {
        let range = DateRange::new(Some(date("01/01/2020")), Some(date("12/31/2030"))).unwrap();

        assert_eq!(range.classify(date("01/01/2020")), RangeCheck::InRange);
        assert_eq!(range.classify(date("12/31/2030")), RangeCheck::InRange);
        assert_eq!(range.classify(date("06/15/2025")), RangeCheck::InRange);
        assert_eq!(range.classify(date("12/31/2019")), RangeCheck::BelowMin);
        assert_eq!(range.classify(date("01/01/2031")), RangeCheck::AboveMax);
    }

    #[test]
    fn test_classify_matches_ordering() {
        let lo = date("03/10/2021");
        let hi = date("11/05/2027");
        let range = DateRange::new(Some(lo), Some(hi)).unwrap();

        let mut d = date("02/20/2021");
        while d < date("12/15/2027") {
            let in_range = d >= lo && d <= hi;
            assert_eq!(
                range.classify(d) == RangeCheck::InRange,
                in_range,
                "classify disagrees with ordering at {d}"
            );
            d = d.succ().unwrap();
        }
    }

    #[test]
    fn test_half_open_sides() {
        let min_only = DateRange::new(Some(date("01/01/2020")), None).unwrap();
        assert_eq!(min_only.classify(date("12/31/2019")), RangeCheck::BelowMin);
        assert_eq!(min_only.classify(date("01/01/9999")), RangeCheck::InRange);

        let max_only = DateRange::new(None, Some(date("01/01/2020"))).unwrap();
        assert_eq!(max_only.classify(date("01/02/2020")), RangeCheck::AboveMax);
        assert_eq!(max_only.classify(date("01/01/0001")), RangeCheck::InRange);
    }

    #[test]
    fn test_unbounded_selects_everything() {
        let range = DateRange::unbounded();
        assert!(range.is_selectable(date("01/01/0001")));
        assert!(range.is_selectable(date("12/31/9999")));
    }

    #[test]
    fn test_is_selectable() {
        let range = DateRange::new(Some(date("01/01/2020")), Some(date("12/31/2030"))).unwrap();
        assert!(range.is_selectable(date("07/04/2024")));
        assert!(!range.is_selectable(date("12/31/2019")));
        assert!(!range.is_selectable(date("01/01/2031")));
    }

    #[test]
    fn test_serde_round_trip() {
        let range = DateRange::new(Some(date("01/01/2020")), Some(date("12/31/2030"))).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"["01/01/2020","12/31/2030"]"#);
        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, parsed);
    }

    #[test]
    fn test_serde_rejects_inverted_bounds() {
        let result: Result<DateRange, _> =
            serde_json::from_str(r#"["12/31/2030","01/01/2020"]"#);
        assert!(result.is_err());
    }
}
