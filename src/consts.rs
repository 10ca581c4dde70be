/// Month number for Farvardin, the first month of the Jalaali year
pub const FARVARDIN: u8 = 1;
/// Month number for Shahrivar, the last 31-day month
pub const SHAHRIVAR: u8 = 6;
/// Month number for Bahman, the last month that always has 30 days
pub const BAHMAN: u8 = 11;
/// Month number for Esfand, the last month of the Jalaali year
pub const ESFAND: u8 = 12;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = ESFAND;

/// First day of month, used for lower bounds and month shifts
pub const MIN_DAY: u8 = 1;

/// Days in each of the first six months
pub const FIRST_HALF_MONTH_DAYS: u8 = 31;
/// Days in months seven through eleven
pub const SECOND_HALF_MONTH_DAYS: u8 = 30;
/// Days in Esfand for common years
pub const ESFAND_DAYS: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Years where the 33-year leap cycle is re-anchored.
/// The first and last entries are the bounds of the supported range.
pub(crate) const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394,
    2456, 3178,
];

/// Smallest supported Jalaali year (inclusive)
pub const MIN_YEAR: i32 = BREAKS[0];
/// Largest supported Jalaali year (inclusive)
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Length of the leap cycle in years
pub(crate) const LEAP_CYCLE: i32 = 33;
/// Leap years per full cycle
pub(crate) const LEAPS_PER_CYCLE: i32 = 8;
/// Gregorian year of Jalaali year 0
pub(crate) const GREGORIAN_OFFSET: i32 = 621;
/// Gregorian March, the month Nowruz falls in
pub(crate) const MARCH: u32 = 3;

/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Gregorian weekday index of Saturday when Sunday is 0
pub const GREGORIAN_SATURDAY: u8 = 6;

/// Offset reported for months starting on a Saturday.
/// Not the Saturday position (1) of a Saturday-first week; grids are laid out against 3.
pub const SATURDAY_FIRST_WEEKDAY_OFFSET: u8 = 3;

/// Default first year offered by the year selector
pub const DEFAULT_SELECTOR_STARTING_YEAR: i32 = 1300;
/// Default last year offered by the year selector
pub const DEFAULT_SELECTOR_ENDING_YEAR: i32 = 1450;

/// Date component separator (`YYYY/MM/DD`)
pub const DATE_SEPARATOR: char = '/';
