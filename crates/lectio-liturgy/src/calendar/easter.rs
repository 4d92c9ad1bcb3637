//! Gregorian Easter computation (Meeus/Jones/Butcher).

use crate::date::CalendarDate;

/// ## Summary
/// Returns the Gregorian Easter Sunday of `year`.
///
/// Returns `None` only for years outside the representable calendar.
#[must_use]
pub fn easter_sunday(year: i32) -> Option<CalendarDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    let month = u32::try_from(n / 31).ok()?;
    let day = u32::try_from(n % 31 + 1).ok()?;
    CalendarDate::from_ymd(year, month, day)
}
