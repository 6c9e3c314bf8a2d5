/// Day of month by which the first bi-weekly due must be paid (end of day).
pub const Q1_DEADLINE_DAY: u32 = 3;

/// Day of month by which the second bi-weekly due must be paid (end of day).
pub const Q2_DEADLINE_DAY: u32 = 18;

/// Number of bi-weekly dues in one savings period.
pub const DUES_PER_PERIOD: u32 = 2;
