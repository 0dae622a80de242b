/*!
Julian day arithmetic and the ISO 8601 week date.

Everything here works in Julian day numbers, which makes the week math a
matter of integer subtraction. The conversions use the proleptic Gregorian
calendar and are valid for the full year range a rendering can plausibly
see; inputs are `i64` throughout so intermediate products cannot wrap.
*/

/// Converts a Gregorian date to its Julian day number.
pub(crate) fn julian_day(year: i64, month: i64, day: i64) -> i64 {
    let (y, m) = if month > 2 {
        (year + 4800, month + 1)
    } else {
        (year + 4799, month + 13)
    };
    let century = y / 100;
    y * 365 - 32167 + y / 4 - century + century / 4 + 7834 * m / 256 + day
}

/// The day of the week for a Julian day number, `0` for Sunday.
pub(crate) fn julian_weekday(julian: i64) -> i64 {
    let day = (julian + 1) % 7;
    if day < 0 {
        day + 7
    } else {
        day
    }
}

/// The Julian day number of the Monday starting ISO week `week` of
/// `iso_year`.
fn iso_week_start(iso_year: i64, week: i64) -> i64 {
    // Week 1 is the week containing January 4th.
    let day4 = julian_day(iso_year, 1, 4);
    let day0 = julian_weekday(day4 - 1);
    (week - 1) * 7 + (day4 - day0)
}

/// The ISO 8601 week number (1 to 53) of a Gregorian date.
pub(crate) fn iso_week(year: i64, month: i64, day: i64) -> i64 {
    let dayn = julian_day(year, month, day);
    let mut week = (dayn - iso_week_start(year, 1)) / 7 + 1;

    // The first days of January can fall in the last week of the previous
    // ISO year, and the last days of December in week 1 of the next.
    if week < 1 {
        week = (dayn - iso_week_start(year - 1, 1)) / 7 + 1;
    } else if week > 52 {
        let next = iso_week_start(year + 1, 1);
        if dayn >= next {
            week = (dayn - next) / 7 + 1;
        }
    }
    week
}

/// The ISO 8601 week-numbering year of a Gregorian date.
pub(crate) fn iso_year(year: i64, month: i64, day: i64) -> i64 {
    let dayn = julian_day(year, month, day);
    let mut week = (dayn - iso_week_start(year, 1)) / 7 + 1;

    if week < 1 {
        return year - 1;
    }
    if week > 52 {
        let next = iso_week_start(year + 1, 1);
        if dayn >= next {
            week = (dayn - next) / 7 + 1;
            if week >= 1 {
                return year + 1;
            }
        }
    }
    year
}

/// The ordinal day (1 to 371) of a Gregorian date within its ISO
/// week-numbering year.
pub(crate) fn iso_yearday(year: i64, month: i64, day: i64) -> i64 {
    let iso = iso_year(year, month, day);
    julian_day(year, month, day) - iso_week_start(iso, 1) + 1
}
