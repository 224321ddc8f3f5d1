//! Builders shared by the unit tests.

#![allow(clippy::unwrap_used)]

use crate::{DayRange, MinuteOfDay, WeekInterval, WeekTime, Weekday};

pub fn weekday(day: u8) -> Weekday {
    Weekday::new(day).unwrap()
}

pub fn week_time(day: u8, minutes: u16) -> WeekTime {
    WeekTime::new(day, minutes).unwrap()
}

/// `interval((1, 480), (1, 960))` is monday 08:00 to monday 16:00
pub fn interval(open: (u8, u16), close: (u8, u16)) -> WeekInterval {
    WeekInterval::between(week_time(open.0, open.1), week_time(close.0, close.1))
}

pub fn day_range(open: &str, close: &str) -> DayRange {
    DayRange::new(open.parse::<MinuteOfDay>().unwrap(), close.parse::<MinuteOfDay>().unwrap())
}
