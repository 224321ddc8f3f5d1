use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, ser::SerializeMap};

use crate::{MinuteOfDay, WeekInterval, WeekTime, Weekday, parse_weekday_name, prelude::*};

/// Opening and closing clock time within a single day.
/// A close of `24:00` means open until the end of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "open: {open}, close: {close}")]
pub struct DayRange {
    open:  MinuteOfDay,
    close: MinuteOfDay,
}

impl DayRange {
    pub const fn new(open: MinuteOfDay, close: MinuteOfDay) -> Self {
        Self { open, close }
    }

    pub const fn open(self) -> MinuteOfDay {
        self.open
    }

    pub const fn close(self) -> MinuteOfDay {
        self.close
    }
}

/// Opening hours broken down per weekday.
///
/// Weekdays iterate monday first; ranges within a day keep the order of the
/// intervals they came from. Days without opening hours are absent.
/// Serializes as an object keyed by lowercase weekday name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct DayBreakdown(BTreeMap<Weekday, Vec<DayRange>>);

impl DayBreakdown {
    /// Looks up a day by name, e.g. `"monday"` or `"Mon"`
    pub fn day(&self, name: &str) -> Option<&[DayRange]> {
        let weekday = parse_weekday_name(name).ok()?;
        self.0.get(&weekday).map(Vec::as_slice)
    }

    fn push(&mut self, weekday: Weekday, range: DayRange) {
        self.0.entry(weekday).or_default().push(range);
    }
}

impl Serialize for DayBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (weekday, ranges) in &self.0 {
            map.serialize_entry(weekday.name(), ranges)?;
        }
        map.end()
    }
}

/// The part of a week interval that falls on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySegment {
    pub weekday: Weekday,
    pub open:    MinuteOfDay,
    pub close:   MinuteOfDay,
}

/// Splits `open..close` into one segment per weekday it touches.
///
/// A close at `00:00` is first read as `24:00` of the previous day. When the
/// close lands on another weekday the open day runs until `24:00`, every day
/// in between is open all day (walking forward past sunday if needed), and
/// the close day starts at `00:00`.
pub fn split_by_day(open: WeekTime, close: WeekTime) -> Vec<DaySegment> {
    let close = close.as_closing();

    if open.weekday() == close.weekday() {
        return vec![DaySegment {
            weekday: open.weekday(),
            open:    open.time(),
            close:   close.time(),
        }];
    }

    let mut segments = vec![DaySegment {
        weekday: open.weekday(),
        open:    open.time(),
        close:   MinuteOfDay::END_OF_DAY,
    }];

    let mut weekday = open.weekday().next();
    while weekday != close.weekday() {
        segments.push(DaySegment {
            weekday,
            open: MinuteOfDay::MIDNIGHT,
            close: MinuteOfDay::END_OF_DAY,
        });
        weekday = weekday.next();
    }

    segments.push(DaySegment {
        weekday: close.weekday(),
        open:    MinuteOfDay::MIDNIGHT,
        close:   close.time(),
    });

    segments
}

/// Yields the endpoints of every interval that has both, skipping the rest.
pub fn complete_intervals(intervals: &[WeekInterval]) -> impl Iterator<Item = (WeekTime, WeekTime)> + '_ {
    intervals.iter().filter_map(|interval| {
        let endpoints = interval.endpoints();
        if endpoints.is_none() {
            tracing::warn!(%interval, "skipping opening hours interval with a missing endpoint");
        }
        endpoints
    })
}

/// Breaks opening hours down into per-weekday ranges.
///
/// For example, `"W3T10:00:00/W3T20:30:00,W5T10:00:00/W5T12:00:00,W5T13:00:00/W5T21:00:00"`
/// becomes
///
/// ```text
/// wednesday: [10:00-20:30]
/// friday:    [10:00-12:00, 13:00-21:00]
/// ```
///
/// Intervals spanning several days are split at midnight, as described on
/// `split_by_day`. Intervals with a missing endpoint are skipped.
pub fn expand_to_days(intervals: &[WeekInterval]) -> DayBreakdown {
    let mut breakdown = DayBreakdown::default();
    for (open, close) in complete_intervals(intervals) {
        for segment in split_by_day(open, close) {
            breakdown.push(segment.weekday, DayRange::new(segment.open, segment.close));
        }
    }
    tracing::trace!(intervals = intervals.len(), days = breakdown.len(), "expanded opening hours");
    breakdown
}
