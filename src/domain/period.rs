// ============================================================================
// Period Value Object
// Immutable time interval with optionally open bounds
// ============================================================================

use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised when building a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodError {
    /// Both bounds are set and the start lies after the end
    StartAfterEnd {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodError::StartAfterEnd { start, end } => {
                write!(f, "invalid period: start {} is after end {}", start, end)
            },
        }
    }
}

impl std::error::Error for PeriodError {}

/// How bounds are rendered by [`Period::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateStringRepresentation {
    /// `2004-11-28`
    Date,
    /// `2004-11-28 13:31`
    DateTime,
    /// `2004-11-28 13:31:17`
    DateTimeSeconds,
    /// `2004-11-28 13:31:17.098`
    #[default]
    Timestamp,
}

impl DateStringRepresentation {
    /// `chrono` format string for this representation.
    pub const fn pattern(self) -> &'static str {
        match self {
            DateStringRepresentation::Date => "%Y-%m-%d",
            DateStringRepresentation::DateTime => "%Y-%m-%d %H:%M",
            DateStringRepresentation::DateTimeSeconds => "%Y-%m-%d %H:%M:%S",
            DateStringRepresentation::Timestamp => "%Y-%m-%d %H:%M:%S%.3f",
        }
    }
}

/// A span of time between `start` and `end`, both inclusive.
///
/// A missing bound means the period is open towards that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PeriodBounds"))]
pub struct Period {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl Period {
    /// Period without any bound.
    pub const UNLIMITED: Self = Self {
        start: None,
        end: None,
    };

    /// Create a new period.
    ///
    /// # Errors
    /// Returns `StartAfterEnd` if both bounds are set and `start > end`.
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, PeriodError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(PeriodError::StartAfterEnd { start, end });
            }
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn has_open_beginning(&self) -> bool {
        self.start.is_none()
    }

    pub fn has_open_end(&self) -> bool {
        self.end.is_none()
    }

    /// Check whether `at` lies within this period.
    pub fn is_enclosed(&self, at: DateTime<Utc>) -> bool {
        let after_start = self.start.is_none_or(|start| at >= start);
        let before_end = self.end.is_none_or(|end| at <= end);
        after_start && before_end
    }

    pub fn is_now_enclosed(&self) -> bool {
        self.is_enclosed(Utc::now())
    }

    /// True if `other` ends at or before the start of this period.
    pub fn starts_after(&self, other: &Period) -> bool {
        match (self.start, other.end) {
            (Some(start), Some(other_end)) => start >= other_end,
            _ => false,
        }
    }

    /// True if `other` starts at or after the end of this period.
    pub fn ends_before(&self, other: &Period) -> bool {
        match (self.end, other.start) {
            (Some(end), Some(other_start)) => end <= other_start,
            _ => false,
        }
    }

    /// Two periods overlap unless one lies entirely before the other.
    ///
    /// Touching bounds do not count as overlap.
    pub fn overlaps(&self, other: &Period) -> bool {
        !(self.starts_after(other) || self.ends_before(other))
    }

    /// True if any of `periods` overlaps with this one.
    pub fn overlaps_any<'a, I>(&self, periods: I) -> bool
    where
        I: IntoIterator<Item = &'a Period>,
    {
        periods.into_iter().any(|other| self.overlaps(other))
    }

    /// All of `periods` that overlap with this one, in input order.
    pub fn overlapping_periods<'a, I>(&self, periods: I) -> Vec<Period>
    where
        I: IntoIterator<Item = &'a Period>,
    {
        periods
            .into_iter()
            .filter(|other| self.overlaps(other))
            .copied()
            .collect()
    }

    /// Render as `Start: <start> End: <end>`; open bounds print as `null`.
    pub fn format(&self, representation: DateStringRepresentation) -> String {
        let render = |bound: Option<DateTime<Utc>>| match bound {
            Some(at) => at.format(representation.pattern()).to_string(),
            None => "null".to_string(),
        };
        format!("Start: {} End: {}", render(self.start), render(self.end))
    }
}

/// Unchecked wire shape of a [`Period`]; deserialized values go through
/// [`Period::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PeriodBounds {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

#[cfg(feature = "serde")]
impl TryFrom<PeriodBounds> for Period {
    type Error = PeriodError;

    fn try_from(bounds: PeriodBounds) -> Result<Self, Self::Error> {
        Period::new(bounds.start, bounds.end)
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DateStringRepresentation::Timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn period(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Period {
        Period::new(start, end).unwrap()
    }

    #[test]
    fn test_bounds() {
        let year = period(Some(day(2010, 12, 31)), Some(day(2011, 12, 31)));
        assert_eq!(year.start(), Some(day(2010, 12, 31)));
        assert_eq!(year.end(), Some(day(2011, 12, 31)));
        assert!(!year.has_open_beginning());
        assert!(!year.has_open_end());

        let open_start = period(None, Some(day(2010, 12, 31)));
        assert!(open_start.has_open_beginning());
        assert_eq!(open_start.start(), None);

        assert!(Period::UNLIMITED.has_open_beginning());
        assert!(Period::UNLIMITED.has_open_end());
        assert_eq!(Period::default(), Period::UNLIMITED);
    }

    #[test]
    fn test_start_after_end_rejected() {
        let result = Period::new(Some(day(2012, 1, 1)), Some(day(2011, 1, 1)));
        assert_eq!(
            result,
            Err(PeriodError::StartAfterEnd {
                start: day(2012, 1, 1),
                end: day(2011, 1, 1)
            })
        );
        assert!(Period::new(Some(day(2011, 1, 1)), Some(day(2011, 1, 1))).is_ok());
    }

    #[test]
    fn test_relations() {
        let year = period(Some(day(2010, 12, 31)), Some(day(2011, 12, 31)));
        let before = period(None, Some(day(2010, 12, 31)));
        let after = period(Some(day(2011, 12, 31)), None);
        let long_before = period(None, Some(day(2010, 12, 30)));
        let long_after = period(Some(day(2012, 1, 1)), None);
        let overlapping = period(Some(day(2010, 12, 30)), Some(day(2011, 12, 31)));

        assert!(year.starts_after(&before));
        assert!(!year.starts_after(&after));
        assert!(year.ends_before(&after));
        assert!(year.ends_before(&long_after));
        assert!(!year.ends_before(&before));
        assert!(!after.ends_before(&year));

        assert!(!year.overlaps(&before));
        assert!(!year.overlaps(&long_before));
        assert!(!year.overlaps(&after));
        assert!(!before.overlaps(&year));
        assert!(!after.overlaps(&year));
        assert!(!year.overlaps(&long_after));
        assert!(year.overlaps(&year));
        assert!(year.overlaps(&Period::UNLIMITED));
        assert!(year.overlaps(&overlapping));

        assert!(year.overlaps_any(&[overlapping]));
        let disjoint = [before, after, long_before, long_after];
        assert!(!year.overlaps_any(&disjoint));

        let mut mixed = disjoint.to_vec();
        mixed.push(Period::UNLIMITED);
        mixed.push(overlapping);
        assert_eq!(
            year.overlapping_periods(&mixed),
            vec![Period::UNLIMITED, overlapping]
        );
    }

    #[test]
    fn test_is_enclosed() {
        let year = period(Some(day(2011, 1, 1)), Some(day(2011, 12, 31)));
        assert!(year.is_enclosed(day(2011, 1, 1)));
        assert!(year.is_enclosed(day(2011, 6, 15)));
        assert!(year.is_enclosed(day(2011, 12, 31)));
        assert!(!year.is_enclosed(day(2010, 12, 31)));
        assert!(!year.is_enclosed(day(2012, 1, 1)));

        assert!(Period::UNLIMITED.is_now_enclosed());
        assert!(!period(None, Some(day(2000, 1, 1))).is_now_enclosed());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_bounds() {
        let inverted = r#"{"start":"2012-01-01T00:00:00Z","end":"2011-01-01T00:00:00Z"}"#;
        let err = serde_json::from_str::<Period>(inverted).unwrap_err();
        assert!(err.to_string().contains("start"));

        let year = period(Some(day(2011, 1, 1)), Some(day(2011, 12, 31)));
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(serde_json::from_str::<Period>(&json).unwrap(), year);

        let open: Period = serde_json::from_str(r#"{"start":null,"end":null}"#).unwrap();
        assert_eq!(open, Period::UNLIMITED);
    }

    #[test]
    fn test_format() {
        let year = period(Some(day(2010, 12, 31)), Some(day(2011, 12, 31)));
        let open_start = period(None, Some(day(2010, 12, 31)));
        let open_end = period(Some(day(2011, 12, 31)), None);

        assert_eq!(
            year.to_string(),
            "Start: 2010-12-31 00:00:00.000 End: 2011-12-31 00:00:00.000"
        );
        assert_eq!(
            open_start.to_string(),
            "Start: null End: 2010-12-31 00:00:00.000"
        );
        assert_eq!(
            open_end.format(DateStringRepresentation::DateTimeSeconds),
            "Start: 2011-12-31 00:00:00 End: null"
        );
        assert_eq!(
            year.format(DateStringRepresentation::DateTime),
            "Start: 2010-12-31 00:00 End: 2011-12-31 00:00"
        );
        assert_eq!(
            year.format(DateStringRepresentation::Date),
            "Start: 2010-12-31 End: 2011-12-31"
        );
    }
}
