mod consts;
mod days;
mod interval;
mod ocpi;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use days::{DayBreakdown, DayRange, expand_to_days};
pub use interval::{WeekInterval, WeekSchedule, format, parse};
pub use ocpi::{OcpiOpeningTimes, OcpiRegularHours, project_to_ocpi};
pub use types::{MinuteOfDay, Weekday, parse_clock_minutes, parse_weekday_name};

use crate::prelude::*;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Matches one week time token, e.g. `W2T06:00:00`.
/// Seconds are required but never interpreted.
#[allow(clippy::expect_used)]
static WEEK_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^W([0-9])T([0-9]{2}):([0-9]{2}):[0-9]{2}$").expect("week time pattern is valid")
});

/// A point within the recurring week: a weekday and the minutes since its
/// midnight.
///
/// Renders as `W<weekday>T<HH>:<MM>:00`. There is no standard (RFC 3339 or
/// ISO 8601) notation for a recurring time within a week, so this one is
/// made up. Weekdays follow RFC 3339 and start on monday. No time zone is
/// carried: opening hours stay the same across daylight saving changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "W{}T{}:00", "weekday.get()", "time")]
pub struct WeekTime {
    weekday: Weekday,
    time:    MinuteOfDay,
}

/// Error produced when opening hours cannot be parsed.
///
/// Wrapping variants add context (which side of the interval, which token)
/// around the reason in their source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A comma separated segment without exactly one `/`.
    #[error("invalid opening hours string '{0}'")]
    InvalidSegment(String),

    /// The opening side of an interval failed to parse.
    #[error("invalid opening hours: {0}")]
    InvalidOpening(#[source] Box<FormatError>),

    /// The closing side of an interval failed to parse.
    #[error("invalid closing hours: {0}")]
    InvalidClosing(#[source] Box<FormatError>),

    /// A token that does not look like `W<d>T<HH>:<MM>:<SS>`.
    #[error("invalid value '{0}'")]
    InvalidToken(String),

    #[error("invalid workday in '{0}': expected to be between 1 (monday) and 7 (sunday)")]
    InvalidWorkday(String),

    #[error("invalid time in '{token}': {source}")]
    InvalidTime { token: String, source: Box<FormatError> },

    #[error("invalid hours value")]
    InvalidHours,

    #[error("invalid minutes value")]
    InvalidMinutes,

    /// Hour 24 with a non-zero minute.
    #[error("invalid value")]
    InvalidValue,

    #[error("invalid weekday '{0}'")]
    InvalidWeekdayName(String),

    #[error("invalid weekday {0}: expected to be between 1 (monday) and 7 (sunday)")]
    WeekdayOutOfRange(u8),

    #[error("invalid minutes since midnight {0}: expected to be between 0 and 1440")]
    MinutesOutOfRange(u16),
}

impl WeekTime {
    /// Creates a new week time from a weekday number and minutes since midnight
    ///
    /// # Errors
    /// Returns `FormatError::WeekdayOutOfRange` or `FormatError::MinutesOutOfRange`.
    pub fn new(weekday: u8, minutes: u16) -> Result<Self, FormatError> {
        Ok(Self::from_parts(Weekday::new(weekday)?, MinuteOfDay::new(minutes)?))
    }

    /// Creates a new week time from already validated parts
    pub const fn from_parts(weekday: Weekday, time: MinuteOfDay) -> Self {
        Self { weekday, time }
    }

    /// Returns the weekday
    pub const fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Returns the time of day
    pub const fn time(self) -> MinuteOfDay {
        self.time
    }

    /// Returns the minutes since midnight
    pub const fn minutes_since_midnight(self) -> u16 {
        self.time.get()
    }

    /// Moves a `00:00` closing time back to `24:00` of the previous weekday.
    ///
    /// A close at midnight would otherwise read as "open for zero minutes that
    /// day". Any other time is returned unchanged.
    #[must_use]
    pub const fn as_closing(self) -> Self {
        if self.time.is_midnight() {
            Self::from_parts(self.weekday.previous(), MinuteOfDay::END_OF_DAY)
        } else {
            self
        }
    }
}

impl FromStr for WeekTime {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = WEEK_TIME_PATTERN
            .captures(s)
            .ok_or_else(|| FormatError::InvalidToken(s.to_owned()))?;

        let weekday = captures[1]
            .parse::<u8>()
            .ok()
            .and_then(|d| Weekday::new(d).ok())
            .ok_or_else(|| FormatError::InvalidWorkday(s.to_owned()))?;

        let minutes = parse_clock_minutes(&captures[2], &captures[3]).map_err(|err| FormatError::InvalidTime {
            token:  s.to_owned(),
            source: Box::new(err),
        })?;

        Ok(Self::from_parts(weekday, MinuteOfDay::new(minutes)?))
    }
}

impl serde::Serialize for WeekTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for WeekTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::week_time;

    #[test]
    fn test_parse_week_time() {
        let time = "W2T06:00:00".parse::<WeekTime>().unwrap();
        assert_eq!(time.weekday().get(), 2);
        assert_eq!(time.minutes_since_midnight(), 360);
    }

    #[test]
    fn test_parse_week_time_end_of_day() {
        let time = "W7T24:00:00".parse::<WeekTime>().unwrap();
        assert_eq!(time, week_time(7, 1440));
    }

    #[test]
    fn test_parse_ignores_seconds_value() {
        let time = "W4T08:10:42".parse::<WeekTime>().unwrap();
        assert_eq!(time, week_time(4, 490));
        assert_eq!(time.to_string(), "W4T08:10:00");
    }

    #[test]
    fn test_display() {
        assert_eq!(week_time(1, 480).to_string(), "W1T08:00:00");
        assert_eq!(week_time(4, 975).to_string(), "W4T16:15:00");
        assert_eq!(week_time(7, 1440).to_string(), "W7T24:00:00");
        assert_eq!(week_time(3, 0).to_string(), "W3T00:00:00");
    }

    #[test]
    fn test_new_validates() {
        assert!(matches!(WeekTime::new(0, 0), Err(FormatError::WeekdayOutOfRange(0))));
        assert!(matches!(WeekTime::new(8, 0), Err(FormatError::WeekdayOutOfRange(8))));
        assert!(matches!(WeekTime::new(1, 1441), Err(FormatError::MinutesOutOfRange(1441))));
        assert!(WeekTime::new(7, 1440).is_ok());
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            input:    &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                input:    "invalid",
                expected: "invalid value 'invalid'",
            },
            TestCase {
                input:    "W1T8:00:00",
                expected: "invalid value 'W1T8:00:00'",
            },
            TestCase {
                input:    "W1T08:00",
                expected: "invalid value 'W1T08:00'",
            },
            TestCase {
                input:    "W10T08:00:00",
                expected: "invalid value 'W10T08:00:00'",
            },
            TestCase {
                input:    "W9T08:00:00",
                expected: "invalid workday in 'W9T08:00:00': expected to be between 1 (monday) and 7 (sunday)",
            },
            TestCase {
                input:    "W0T08:00:00",
                expected: "invalid workday in 'W0T08:00:00': expected to be between 1 (monday) and 7 (sunday)",
            },
            TestCase {
                input:    "W1T99:00:00",
                expected: "invalid time in 'W1T99:00:00': invalid hours value",
            },
            TestCase {
                input:    "W1T08:99:00",
                expected: "invalid time in 'W1T08:99:00': invalid minutes value",
            },
            TestCase {
                input:    "W7T24:01:00",
                expected: "invalid time in 'W7T24:01:00': invalid value",
            },
        ];

        for case in &cases {
            let err = case.input.parse::<WeekTime>().expect_err("expected week time to be rejected");
            assert_eq!(err.to_string(), case.expected, "input {:?}", case.input);
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // U+0663 ARABIC-INDIC DIGIT THREE
        assert!("W\u{663}T08:00:00".parse::<WeekTime>().is_err());
    }

    #[test]
    fn test_as_closing_moves_midnight_back() {
        assert_eq!(week_time(3, 0).as_closing(), week_time(2, 1440));
        assert_eq!(week_time(1, 0).as_closing(), week_time(7, 1440));
    }

    #[test]
    fn test_as_closing_keeps_other_times() {
        assert_eq!(week_time(3, 240).as_closing(), week_time(3, 240));
        assert_eq!(week_time(7, 1440).as_closing(), week_time(7, 1440));
    }

    #[test]
    fn test_ordering() {
        assert!(week_time(1, 1200) < week_time(2, 0));
        assert!(week_time(2, 60) < week_time(2, 120));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = "W1T25:00:00".parse::<WeekTime>().unwrap_err();
        let source = err.source().expect("time errors carry their reason");
        assert_eq!(source.to_string(), "invalid hours value");
    }

    #[test]
    fn test_serde_string_format() {
        let time = week_time(5, 630);
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, r#""W5T10:30:00""#);
        let parsed: WeekTime = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, time);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<WeekTime, _> = serde_json::from_str(r#""W8T10:30:00""#);
        assert!(result.is_err());

        let result: Result<WeekTime, _> = serde_json::from_str(r#""W1T24:30:00""#);
        assert!(result.is_err());
    }
}
