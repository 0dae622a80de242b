/*!
The civil time breakdown that rendering consumes.
*/

/// A broken-down civil time.
///
/// This is a plain bag of fields on purpose. Producing a correct breakdown
/// for an instant in some time zone is the caller's job, and this crate
/// does not second-guess the values it is handed. In particular,
/// [`weekday`](CivilTime::weekday) and [`yearday`](CivilTime::yearday) are
/// *not* derived from the date fields; a caller that wants `Day` or `DDD`
/// to come out right must fill them in.
///
/// All fields are zero by default, with no zone abbreviation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CivilTime {
    /// The year. Negative years are "before common era" and there is no
    /// year zero: `1` is 1 AD and `-1` is 1 BC.
    pub year: i32,
    /// The month, `1..=12`. A zero month makes name-based fields (`Month`,
    /// `Mon`, `RM`, `Q`) render nothing, which is how a month-less
    /// interval breakdown behaves.
    pub month: i32,
    /// The day of the month, `1..=31`.
    pub day: i32,
    /// The hour. Wide on purpose: an interval may run to thousands of
    /// hours, or negative.
    pub hour: i64,
    /// The minute, `0..=59`.
    pub minute: i32,
    /// The second, `0..=59`.
    pub second: i32,
    /// The fractional second in microseconds, `0..=999_999`.
    pub microsecond: i32,
    /// The day of the week, with `0` for Sunday through `6` for Saturday.
    pub weekday: i32,
    /// The day of the year, `1..=366`.
    pub yearday: i32,
    /// The offset from UTC in seconds, positive east of Greenwich.
    pub gmt_offset: i64,
    /// The abbreviated zone name, e.g. `EST`, if one is known.
    pub zone_abbrev: Option<String>,
}

/// Selects between the two interpretations of a [`CivilTime`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeKind {
    /// The breakdown describes a point on the calendar. All fields are
    /// permitted.
    Timestamp,
    /// The breakdown describes an elapsed duration. Fields that only make
    /// sense for a calendar date (eras, month and day names, weekday
    /// numbers, time zone fields) are rejected with an error.
    Interval,
}

impl TimeKind {
    pub(crate) fn is_interval(self) -> bool {
        matches!(self, TimeKind::Interval)
    }
}
