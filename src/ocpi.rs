//! Projection of weekly opening hours onto the OCPI `opening_times` object.
//!
//! OCPI has no `24:00`: a period ending at the end of the day is written with
//! a `period_end` of `00:00` on the same weekday.

use serde::{Deserialize, Serialize};

use crate::{
    MinuteOfDay, WeekInterval, WeekTime, Weekday,
    days::{DaySegment, complete_intervals, split_by_day},
};

/// One OCPI `regular_hours` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OcpiRegularHours {
    pub weekday:      Weekday,
    pub period_begin: String,
    pub period_end:   String,
}

/// The OCPI `opening_times` object.
///
/// `regular_hours` is only present when the location is not open around the
/// clock and has at least one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OcpiOpeningTimes {
    pub twentyfourseven: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_hours:   Option<Vec<OcpiRegularHours>>,
}

impl OcpiOpeningTimes {
    /// Open all day, every day
    pub const fn twenty_four_seven() -> Self {
        Self {
            twentyfourseven: true,
            regular_hours:   None,
        }
    }
}

impl From<DaySegment> for OcpiRegularHours {
    fn from(segment: DaySegment) -> Self {
        let period_end = if segment.close.is_end_of_day() {
            MinuteOfDay::MIDNIGHT
        } else {
            segment.close
        };
        Self {
            weekday:      segment.weekday,
            period_begin: segment.open.to_string(),
            period_end:   period_end.to_string(),
        }
    }
}

fn is_whole_week(endpoints: (WeekTime, WeekTime)) -> bool {
    const WEEK_START: WeekTime = WeekTime::from_parts(Weekday::MONDAY, MinuteOfDay::MIDNIGHT);
    const WEEK_END: WeekTime = WeekTime::from_parts(Weekday::SUNDAY, MinuteOfDay::END_OF_DAY);

    endpoints == (WEEK_START, WEEK_END)
}

/// Converts opening hours into OCPI opening times.
///
/// Intervals with a missing endpoint are skipped before anything else, so
/// they neither count towards nor prevent `twentyfourseven`. Opening hours
/// made up only of `W1T00:00:00/W7T24:00:00` are reported as
/// `twentyfourseven`. Otherwise every interval is split per weekday the same
/// way [`crate::expand_to_days`] does, with end-of-day written as `00:00`.
/// A day slice that opens at `24:00` is empty and left out. No periods at all
/// gives the default value.
pub fn project_to_ocpi(intervals: &[WeekInterval]) -> OcpiOpeningTimes {
    let complete: Vec<(WeekTime, WeekTime)> = complete_intervals(intervals).collect();
    if !complete.is_empty() && complete.iter().all(|&endpoints| is_whole_week(endpoints)) {
        return OcpiOpeningTimes::twenty_four_seven();
    }

    let regular_hours: Vec<OcpiRegularHours> = complete
        .into_iter()
        .flat_map(|(open, close)| split_by_day(open, close))
        .filter(|segment| !segment.open.is_end_of_day())
        .map(OcpiRegularHours::from)
        .collect();

    if regular_hours.is_empty() {
        return OcpiOpeningTimes::default();
    }

    OcpiOpeningTimes {
        twentyfourseven: false,
        regular_hours:   Some(regular_hours),
    }
}
