use crate::consts::{
    CLOCK_SEPARATOR, DAYS_IN_WEEK, MAX_HOUR, MAX_MINUTE, MINUTES_PER_DAY, MINUTES_PER_HOUR, MONDAY, SUNDAY,
    WEEKDAY_ABBREVIATIONS, WEEKDAY_NAMES,
};
use crate::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A weekday guaranteed to be in the range `MONDAY..=SUNDAY` (1..=7)
/// Numbering follows RFC 3339: the week starts on monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(NonZeroU8);

impl Weekday {
    pub const MONDAY: Self = Self::from_index(MONDAY);
    pub const SUNDAY: Self = Self::from_index(SUNDAY);

    /// Creates a new `Weekday`, validating that it's within `MONDAY..=SUNDAY`
    ///
    /// # Errors
    /// Returns `FormatError::WeekdayOutOfRange` if the value is 0 or > `SUNDAY`.
    pub fn new(value: u8) -> Result<Self, FormatError> {
        let non_zero = NonZeroU8::new(value).ok_or(FormatError::WeekdayOutOfRange(value))?;
        if value > SUNDAY {
            return Err(FormatError::WeekdayOutOfRange(value));
        }
        Ok(Self(non_zero))
    }

    // Only called with values already reduced into 1..=7.
    const fn from_index(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the weekday number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Lowercase English name, e.g. `"monday"`
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.get() as usize]
    }

    /// The following weekday, wrapping sunday to monday
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.get() % DAYS_IN_WEEK + 1)
    }

    /// The preceding weekday, wrapping monday to sunday
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.get() == MONDAY {
            Self::SUNDAY
        } else {
            Self::from_index(self.get() - 1)
        }
    }

    /// All seven weekdays, monday first
    pub fn all() -> impl Iterator<Item = Self> {
        (MONDAY..=SUNDAY).map(Self::from_index)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.0.get()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_weekday_name(s)
    }
}

/// Parses a weekday name, case-insensitively.
///
/// Accepts full English names (`"monday"`) and three-letter abbreviations
/// (`"mon"`) for all seven days.
///
/// # Errors
/// Returns `FormatError::InvalidWeekdayName` for anything else.
pub fn parse_weekday_name(name: &str) -> Result<Weekday, FormatError> {
    let lowered = name.to_ascii_lowercase();
    (MONDAY..=SUNDAY)
        .find(|&i| WEEKDAY_NAMES[i as usize] == lowered || WEEKDAY_ABBREVIATIONS[i as usize] == lowered)
        .map(Weekday::from_index)
        .ok_or_else(|| FormatError::InvalidWeekdayName(name.to_owned()))
}

/// Minutes since midnight, guaranteed to be in the range `0..=MINUTES_PER_DAY`.
///
/// `MINUTES_PER_DAY` (1440) is the end of the day and renders as `"24:00"`,
/// which is not the same thing as `0` (`"00:00"`, the start of the day).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub const MIDNIGHT: Self = Self(0);
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY);

    /// Creates a new `MinuteOfDay`, validating that it's <= `MINUTES_PER_DAY`
    ///
    /// # Errors
    /// Returns `FormatError::MinutesOutOfRange` if the value is > `MINUTES_PER_DAY`.
    pub const fn new(value: u16) -> Result<Self, FormatError> {
        if value > MINUTES_PER_DAY {
            return Err(FormatError::MinutesOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the minutes since midnight
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Hour component, 0..=24
    #[inline]
    pub const fn hours(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    /// Minute component, 0..=59
    #[inline]
    pub const fn minutes(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    pub const fn is_midnight(self) -> bool {
        self.0 == 0
    }

    pub const fn is_end_of_day(self) -> bool {
        self.0 == MINUTES_PER_DAY
    }
}

impl TryFrom<u16> for MinuteOfDay {
    type Error = FormatError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MinuteOfDay> for u16 {
    fn from(minutes: MinuteOfDay) -> Self {
        minutes.0
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{CLOCK_SEPARATOR}{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for MinuteOfDay {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .split_once(CLOCK_SEPARATOR)
            .filter(|(hours, minutes)| is_two_digits(hours) && is_two_digits(minutes))
            .ok_or(FormatError::InvalidValue)?;
        parse_clock_minutes(hours, minutes).map(Self)
    }
}

fn is_two_digits(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit())
}

impl Serialize for MinuteOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MinuteOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Converts an hour and a minute string into minutes since midnight.
///
/// Hours must be in `0..=24` and minutes in `0..=59`; hour 24 is only legal as
/// `"24:00"`.
///
/// # Errors
/// Returns `FormatError::InvalidHours`, `FormatError::InvalidMinutes`, or
/// `FormatError::InvalidValue` for `24:xx` with a non-zero minute.
pub fn parse_clock_minutes(hours: &str, minutes: &str) -> Result<u16, FormatError> {
    let hours = hours
        .parse::<u16>()
        .ok()
        .filter(|&h| h <= MAX_HOUR)
        .ok_or(FormatError::InvalidHours)?;

    let minutes = minutes
        .parse::<u16>()
        .ok()
        .filter(|&m| m <= MAX_MINUTE)
        .ok_or(FormatError::InvalidMinutes)?;

    if hours == MAX_HOUR && minutes != 0 {
        return Err(FormatError::InvalidValue);
    }

    Ok(hours * MINUTES_PER_HOUR + minutes)
}
