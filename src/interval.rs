use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    DayBreakdown, ENDPOINT_SEPARATOR, FormatError, INTERVAL_SEPARATOR, OcpiOpeningTimes, WeekTime, expand_to_days,
    prelude::*, project_to_ocpi,
};

/// One opening period within the week, from `open` until `close`.
///
/// Either side may be unknown. A close earlier in the week than the open
/// wraps past sunday into the next week.
///
/// For example, `W2T06:00:00/W2T20:00:00` is open on tuesdays from 06:00 to
/// 20:00, and `W2T20:00:00/W3T04:00:00` opens tuesday evening and closes at
/// 04:00 on wednesday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekInterval {
    open:  Option<WeekTime>,
    close: Option<WeekTime>,
}

impl WeekInterval {
    /// Creates a new interval. Either endpoint may be absent.
    pub const fn new(open: Option<WeekTime>, close: Option<WeekTime>) -> Self {
        Self { open, close }
    }

    /// Creates an interval with both endpoints known
    pub const fn between(open: WeekTime, close: WeekTime) -> Self {
        Self::new(Some(open), Some(close))
    }

    /// Returns the opening time, if known
    pub const fn open(self) -> Option<WeekTime> {
        self.open
    }

    /// Returns the closing time, if known
    pub const fn close(self) -> Option<WeekTime> {
        self.close
    }

    /// Returns both endpoints when neither is missing
    pub const fn endpoints(self) -> Option<(WeekTime, WeekTime)> {
        match (self.open, self.close) {
            (Some(open), Some(close)) => Some((open, close)),
            _ => None,
        }
    }

    pub const fn is_complete(self) -> bool {
        self.open.is_some() && self.close.is_some()
    }
}

impl fmt::Display for WeekInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(open) = self.open {
            write!(f, "{open}")?;
        }
        write!(f, "{ENDPOINT_SEPARATOR}")?;
        if let Some(close) = self.close {
            write!(f, "{close}")?;
        }
        Ok(())
    }
}

impl FromStr for WeekInterval {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (open, close) = s
            .split_once(ENDPOINT_SEPARATOR)
            .filter(|(_, close)| !close.contains(ENDPOINT_SEPARATOR))
            .ok_or_else(|| FormatError::InvalidSegment(s.to_owned()))?;

        let open = parse_endpoint(open).map_err(|err| FormatError::InvalidOpening(Box::new(err)))?;
        let close = parse_endpoint(close).map_err(|err| FormatError::InvalidClosing(Box::new(err)))?;

        Ok(Self { open, close })
    }
}

fn parse_endpoint(s: &str) -> Result<Option<WeekTime>, FormatError> {
    if s.is_empty() {
        return Ok(None);
    }
    s.parse().map(Some)
}

impl Serialize for WeekInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WeekInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a comma separated list of intervals, e.g.
/// `"W1T08:00:00/W1T16:00:00,W2T06:00:00/W2T20:00:00"`.
///
/// Empty segments are skipped, so `""` yields no intervals. The first
/// malformed segment fails the whole parse.
///
/// # Errors
/// Returns the `FormatError` of the first segment that fails to parse.
pub fn parse(s: &str) -> Result<Vec<WeekInterval>, FormatError> {
    s.split(INTERVAL_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment.parse::<WeekInterval>().inspect_err(|err| {
                tracing::debug!(segment, error = %err, "rejecting opening hours segment");
            })
        })
        .collect()
}

/// Renders intervals in the notation read by [`parse`].
pub fn format(intervals: &[WeekInterval]) -> String {
    intervals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&INTERVAL_SEPARATOR.to_string())
}

/// The full weekly opening hours of one place, in order.
///
/// Parses from and displays as the comma separated notation, and serializes
/// as that string so it can be stored in a single column or API field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, From, Into)]
pub struct WeekSchedule(Vec<WeekInterval>);

impl WeekSchedule {
    pub const fn new(intervals: Vec<WeekInterval>) -> Self {
        Self(intervals)
    }

    /// Returns the intervals in their original order
    pub fn intervals(&self) -> &[WeekInterval] {
        &self.0
    }

    /// See [`expand_to_days`]
    pub fn expand_to_days(&self) -> DayBreakdown {
        expand_to_days(&self.0)
    }

    /// See [`project_to_ocpi`]
    pub fn to_ocpi(&self) -> OcpiOpeningTimes {
        project_to_ocpi(&self.0)
    }
}

impl fmt::Display for WeekSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(&self.0))
    }
}

impl FromStr for WeekSchedule {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl Serialize for WeekSchedule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WeekSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
