/// Weekday number for Monday (RFC 3339 numbering, the week starts on monday)
pub const MONDAY: u8 = 1;
/// Weekday number for Sunday
pub const SUNDAY: u8 = 7;

/// Number of days in the recurring week
pub const DAYS_IN_WEEK: u8 = 7;

/// Minutes in one hour
pub const MINUTES_PER_HOUR: u16 = 60;
/// Minutes in one day, also the "24:00" end-of-day marker
pub const MINUTES_PER_DAY: u16 = 1440;

/// Largest accepted hour value, only legal as "24:00"
pub const MAX_HOUR: u16 = 24;
/// Largest accepted minute value
pub const MAX_MINUTE: u16 = 59;

/// Lowercase weekday names (index 0 is unused, weekdays are 1-indexed)
pub const WEEKDAY_NAMES: [&str; 8] = [
    "",          // index 0 unused (weekdays are 1-indexed)
    "monday",    // 1
    "tuesday",   // 2
    "wednesday", // 3
    "thursday",  // 4
    "friday",    // 5
    "saturday",  // 6
    "sunday",    // 7
];

/// Three-letter weekday abbreviations, indexed like `WEEKDAY_NAMES`
pub const WEEKDAY_ABBREVIATIONS: [&str; 8] = ["", "mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Separates intervals in a schedule string
pub const INTERVAL_SEPARATOR: char = ',';
/// Separates the opening and closing side of one interval
pub const ENDPOINT_SEPARATOR: char = '/';
/// Separates hours from minutes in a clock value
pub const CLOCK_SEPARATOR: char = ':';
