/*!
Renders a compiled format picture against a civil time breakdown.
*/

use crate::{
    calendar,
    civil::{CivilTime, TimeKind},
    compile::{Node, Pattern},
    error::{render, Error},
    locale::{English, Locale},
    tables::{
        FieldId, Keyword, Suffix, DAYS_ABBREV, DAYS_FULL,
        LOCALIZED_SUFFIX_LEN, MONTHS_ABBREV, MONTHS_FULL, ORDINAL_LOWER,
        ORDINAL_UPPER, ROMAN_MONTHS_LOWER, ROMAN_MONTHS_UPPER,
    },
    util::DecimalFormatter,
};

/// The most output code units a single non-localized field can produce.
/// Doubles as the per-pattern-character unit of the localized name guard.
pub(crate) const MAX_FIELD_WIDTH: usize = 12;

impl Pattern {
    /// Renders `tm` with this pattern, using the built-in English names.
    ///
    /// Rendering is all or nothing. When any field fails, the error is
    /// returned and all partial output is discarded.
    pub fn render(
        &self,
        tm: &CivilTime,
        kind: TimeKind,
    ) -> Result<String, Error> {
        self.render_with(&English, tm, kind)
    }

    /// Like [`Pattern::render`], but fields carrying the `TM` prefix take
    /// their month and day names from `locale`.
    pub fn render_with(
        &self,
        locale: &dyn Locale,
        tm: &CivilTime,
        kind: TimeKind,
    ) -> Result<String, Error> {
        let mut fmt = Formatter {
            locale,
            tm,
            kind,
            out: String::with_capacity(
                self.nodes.len().saturating_mul(MAX_FIELD_WIDTH),
            ),
        };
        for node in self.nodes.iter() {
            match *node {
                Node::Action { keyword, suffix } => {
                    fmt.field(keyword, suffix)?;
                }
                Node::Literal(ch) | Node::Separator(ch) | Node::Space(ch) => {
                    fmt.out.push(ch);
                }
            }
        }
        Ok(fmt.out)
    }
}

/// How a name field cases its output.
#[derive(Clone, Copy)]
enum Case {
    Upper,
    Mixed,
    Lower,
}

struct Formatter<'a> {
    locale: &'a dyn Locale,
    tm: &'a CivilTime,
    kind: TimeKind,
    out: String,
}

impl<'a> Formatter<'a> {
    fn field(
        &mut self,
        keyword: &'static Keyword,
        suffix: Suffix,
    ) -> Result<(), Error> {
        use self::FieldId::*;

        // Ordinal endings only ever attach to digit fields.
        let suffix = if keyword.is_numeric {
            suffix
        } else {
            suffix
                .without(Suffix::ORDINAL_UPPER)
                .without(Suffix::ORDINAL_LOWER)
        };
        let tm = self.tm;
        match keyword.field {
            MeridiemDotsUpper => self.meridiem("A.M.", "P.M."),
            MeridiemUpper => self.meridiem("AM", "PM"),
            MeridiemDotsLower => self.meridiem("a.m.", "p.m."),
            MeridiemLower => self.meridiem("am", "pm"),
            EraDotsUpper => self.era(keyword, "A.D.", "B.C.")?,
            EraUpper => self.era(keyword, "AD", "BC")?,
            EraDotsLower => self.era(keyword, "a.d.", "b.c.")?,
            EraLower => self.era(keyword, "ad", "bc")?,
            Hour12 => {
                // A 12-hour clock even for intervals, where the hour may
                // be negative or beyond 24.
                let hour = tm.hour % 12;
                let hour = if hour == 0 { 12 } else { hour };
                self.number(hour, self.pad(suffix, 2), suffix);
            }
            Hour24 => self.number(tm.hour, self.pad(suffix, 2), suffix),
            Minute => {
                self.number(tm.minute.into(), self.pad(suffix, 2), suffix);
            }
            Second => {
                self.number(tm.second.into(), self.pad(suffix, 2), suffix);
            }
            // Fractions truncate and keep their fixed width even in fill
            // mode.
            Fraction1 => {
                self.number((tm.microsecond / 100_000).into(), 1, suffix);
            }
            Fraction2 => {
                self.number((tm.microsecond / 10_000).into(), 2, suffix);
            }
            Fraction3 | Millisecond => {
                self.number((tm.microsecond / 1_000).into(), 3, suffix);
            }
            Fraction4 => {
                self.number((tm.microsecond / 100).into(), 4, suffix);
            }
            Fraction5 => {
                self.number((tm.microsecond / 10).into(), 5, suffix);
            }
            Fraction6 | Microsecond => {
                self.number(tm.microsecond.into(), 6, suffix);
            }
            SecondsPastMidnight => {
                let seconds = tm
                    .hour
                    .checked_mul(3600)
                    .and_then(|s| {
                        s.checked_add(i64::from(tm.minute) * 60)
                    })
                    .and_then(|s| s.checked_add(i64::from(tm.second)))
                    .ok_or(render::Error::OutOfRange {
                        what: "seconds past midnight",
                    })?;
                self.number(seconds, 0, suffix);
            }
            TzAbbrevUpper => {
                self.guard_interval(keyword)?;
                let abbrev = self.zone_abbrev()?;
                self.out.push_str(abbrev);
            }
            TzAbbrevLower => {
                self.guard_interval(keyword)?;
                let abbrev = self.zone_abbrev()?;
                let lowered = abbrev.to_lowercase();
                self.out.push_str(&lowered);
            }
            TzHour => {
                self.guard_interval(keyword)?;
                self.push_offset_sign();
                self.number(tm.gmt_offset.abs() / 3600, 2, Suffix::empty());
            }
            TzMinute => {
                self.guard_interval(keyword)?;
                self.number(
                    tm.gmt_offset.abs() % 3600 / 60,
                    2,
                    Suffix::empty()
                );
            }
            OffsetFull => {
                self.guard_interval(keyword)?;
                self.push_offset_sign();
                self.number(
                    tm.gmt_offset.abs() / 3600,
                    self.pad(suffix, 2),
                    Suffix::empty()
                );
                // Minutes only show up for ragged offsets.
                if tm.gmt_offset.abs() % 3600 != 0 {
                    self.out.push(':');
                    self.number(
                        tm.gmt_offset.abs() % 3600 / 60,
                        2,
                        Suffix::empty()
                    );
                }
            }
            MonthNameUpper | MonthName | MonthNameLower => {
                self.guard_interval(keyword)?;
                let Some(i) = self.month_index()? else { return Ok(()) };
                let case = match keyword.field {
                    MonthNameUpper => Case::Upper,
                    MonthNameLower => Case::Lower,
                    _ => Case::Mixed,
                };
                let localized = self.locale.month_name(i);
                self.name(keyword, suffix, MONTHS_FULL[i], localized, case, 9)?;
            }
            MonthAbbrevUpper | MonthAbbrev | MonthAbbrevLower => {
                self.guard_interval(keyword)?;
                let Some(i) = self.month_index()? else { return Ok(()) };
                let case = match keyword.field {
                    MonthAbbrevUpper => Case::Upper,
                    MonthAbbrevLower => Case::Lower,
                    _ => Case::Mixed,
                };
                let localized = self.locale.month_abbrev(i);
                self.name(
                    keyword,
                    suffix,
                    MONTHS_ABBREV[i],
                    localized,
                    case,
                    0,
                )?;
            }
            Month => {
                self.number(tm.month.into(), self.pad(suffix, 2), suffix);
            }
            DayNameUpper | DayName | DayNameLower => {
                self.guard_interval(keyword)?;
                let i = self.weekday_index()?;
                let case = match keyword.field {
                    DayNameUpper => Case::Upper,
                    DayNameLower => Case::Lower,
                    _ => Case::Mixed,
                };
                let localized = self.locale.day_name(i);
                self.name(keyword, suffix, DAYS_FULL[i], localized, case, 9)?;
            }
            DayAbbrevUpper | DayAbbrev | DayAbbrevLower => {
                self.guard_interval(keyword)?;
                let i = self.weekday_index()?;
                let case = match keyword.field {
                    DayAbbrevUpper => Case::Upper,
                    DayAbbrevLower => Case::Lower,
                    _ => Case::Mixed,
                };
                let localized = self.locale.day_abbrev(i);
                self.name(keyword, suffix, DAYS_ABBREV[i], localized, case, 0)?;
            }
            DayOfYear => {
                self.number(tm.yearday.into(), self.pad(suffix, 3), suffix);
            }
            IsoDayOfYear => {
                let day = calendar::iso_yearday(
                    tm.year.into(),
                    tm.month.into(),
                    tm.day.into()
                );
                self.number(day, self.pad(suffix, 3), suffix);
            }
            DayOfMonth => {
                self.number(tm.day.into(), self.pad(suffix, 2), suffix);
            }
            DayOfWeek => {
                self.guard_interval(keyword)?;
                self.number(i64::from(tm.weekday) + 1, 0, suffix);
            }
            IsoDayOfWeek => {
                self.guard_interval(keyword)?;
                let day = if tm.weekday == 0 { 7 } else { tm.weekday };
                self.number(day.into(), 0, suffix);
            }
            WeekOfYear => {
                let week = (i64::from(tm.yearday) - 1) / 7 + 1;
                self.number(week, self.pad(suffix, 2), suffix);
            }
            IsoWeek => {
                let week = calendar::iso_week(
                    tm.year.into(),
                    tm.month.into(),
                    tm.day.into()
                );
                self.number(week, self.pad(suffix, 2), suffix);
            }
            WeekOfMonth => {
                let week = (i64::from(tm.day) - 1) / 7 + 1;
                self.number(week, 0, suffix);
            }
            Quarter => {
                if tm.month == 0 {
                    return Ok(());
                }
                let quarter = (i64::from(tm.month) - 1) / 3 + 1;
                self.number(quarter, 0, suffix);
            }
            Century => {
                let year = i64::from(tm.year);
                let century = if self.kind.is_interval() {
                    year / 100
                } else if year > 0 {
                    // Century 20 runs 1901 through 2000.
                    (year - 1) / 100 + 1
                } else {
                    // Century 6 BC runs 600 BC through 501 BC. The +1
                    // accounts for year -1 being 1 BC.
                    (year + 1) / 100 - 1
                };
                let pad = if (-99..=99).contains(&century) {
                    self.pad(suffix, 2)
                } else {
                    0
                };
                self.number(century, pad, suffix);
            }
            YearComma => {
                let year = self.display_year(tm.year.into());
                let thousands = year / 1000;
                let rem = year - thousands * 1000;
                let start = self.out.len();
                let d = DecimalFormatter::new().format(thousands);
                self.out.push_str(d.as_str());
                self.out.push(',');
                let pad = if rem < 0 { 2 } else { 3 };
                let d = DecimalFormatter::new().padding(pad).format(rem);
                self.out.push_str(d.as_str());
                self.push_ordinal(start, suffix);
            }
            Year4 => {
                let year = self.display_year(tm.year.into());
                self.number(year, self.pad(suffix, 4), suffix);
            }
            Year3 => {
                let year = self.display_year(tm.year.into());
                self.number(year % 1000, self.pad(suffix, 3), suffix);
            }
            Year2 => {
                let year = self.display_year(tm.year.into());
                self.number(year % 100, self.pad(suffix, 2), suffix);
            }
            Year1 => {
                let year = self.display_year(tm.year.into());
                self.number(year % 10, 0, suffix);
            }
            IsoYear4 => {
                let year = self.display_year(self.iso_year());
                self.number(year, self.pad(suffix, 4), suffix);
            }
            IsoYear3 => {
                let year = self.display_year(self.iso_year());
                self.number(year % 1000, self.pad(suffix, 3), suffix);
            }
            IsoYear2 => {
                let year = self.display_year(self.iso_year());
                self.number(year % 100, self.pad(suffix, 2), suffix);
            }
            IsoYear1 => {
                let year = self.display_year(self.iso_year());
                self.number(year % 10, 0, suffix);
            }
            RomanMonthUpper | RomanMonthLower => {
                // An interval reduced to whole years has month 0 and
                // still renders. Only a breakdown with nothing at all to
                // say skips.
                if tm.month == 0 && tm.year == 0 {
                    return Ok(());
                }
                let months = if keyword.field == RomanMonthUpper {
                    &ROMAN_MONTHS_UPPER
                } else {
                    &ROMAN_MONTHS_LOWER
                };
                // The table is December first, so the position is derived
                // rather than indexed directly.
                let i = if tm.month == 0 {
                    if tm.year >= 0 {
                        0
                    } else {
                        11
                    }
                } else if tm.month < 0 {
                    // -1 is December, -2 November and so on.
                    -(tm.month + 1)
                } else {
                    12 - tm.month
                };
                let roman = usize::try_from(i)
                    .ok()
                    .and_then(|i| months.get(i))
                    .ok_or(render::Error::OutOfRange { what: "month" })?;
                self.out.push_str(roman);
                if !suffix.fill() {
                    for _ in roman.len()..4 {
                        self.out.push(' ');
                    }
                }
            }
            JulianDay => {
                let julian = calendar::julian_day(
                    tm.year.into(),
                    tm.month.into(),
                    tm.day.into()
                );
                self.number(julian, 0, suffix);
            }
            FormatExact => {}
        }
        Ok(())
    }

    fn meridiem(&mut self, am: &str, pm: &str) {
        let half = if self.tm.hour % 24 >= 12 { pm } else { am };
        self.out.push_str(half);
    }

    fn era(
        &mut self,
        keyword: &'static Keyword,
        ad: &str,
        bc: &str,
    ) -> Result<(), Error> {
        self.guard_interval(keyword)?;
        // There is no year zero, so zero and below are BC.
        let era = if self.tm.year <= 0 { bc } else { ad };
        self.out.push_str(era);
        Ok(())
    }

    /// Formats `value` with at least `pad` digits and then any ordinal
    /// ending the suffix asks for, derived from the rendered digits.
    fn number(&mut self, value: i64, pad: u8, suffix: Suffix) {
        let start = self.out.len();
        let d = DecimalFormatter::new().padding(pad).format(value);
        self.out.push_str(d.as_str());
        self.push_ordinal(start, suffix);
    }

    fn push_ordinal(&mut self, start: usize, suffix: Suffix) {
        let Some(upper) = suffix.ordinal() else { return };
        let digits = &self.out.as_bytes()[start..];
        let Some(&last) = digits.last() else { return };
        if !last.is_ascii_digit() {
            return;
        }
        // Teens take `th` no matter their last digit, which falls out of
        // looking one position further back.
        let seclast = if digits.len() >= 2 {
            digits[digits.len() - 2]
        } else {
            b'0'
        };
        let i = if seclast == b'1' {
            3
        } else {
            match last {
                b'1' => 0,
                b'2' => 1,
                b'3' => 2,
                _ => 3,
            }
        };
        let endings = if upper { &ORDINAL_UPPER } else { &ORDINAL_LOWER };
        self.out.push_str(endings[i]);
    }

    /// Writes a name field: the localized name when `TM` is set (length
    /// guarded, never padded), otherwise the built-in English name padded
    /// left-justified to `width` unless fill mode is on.
    fn name(
        &mut self,
        keyword: &'static Keyword,
        suffix: Suffix,
        english: &'static str,
        localized: &str,
        case: Case,
        width: usize,
    ) -> Result<(), Error> {
        if suffix.localized() {
            let max =
                (keyword.len() + LOCALIZED_SUFFIX_LEN) * MAX_FIELD_WIDTH;
            if localized.len() > max {
                return Err(render::Error::ValueTooLong {
                    keyword: keyword.name,
                    len: localized.len(),
                    max,
                }
                .into());
            }
            self.push_cased(localized, case);
        } else {
            let n = self.push_cased(english, case);
            if !suffix.fill() {
                for _ in n..width {
                    self.out.push(' ');
                }
            }
        }
        Ok(())
    }

    /// Pushes `s` in the requested casing and returns the number of
    /// characters written.
    fn push_cased(&mut self, s: &str, case: Case) -> usize {
        let mut written = 0;
        match case {
            Case::Upper => {
                for ch in s.chars() {
                    for up in ch.to_uppercase() {
                        self.out.push(up);
                        written += 1;
                    }
                }
            }
            Case::Lower => {
                for ch in s.chars() {
                    for low in ch.to_lowercase() {
                        self.out.push(low);
                        written += 1;
                    }
                }
            }
            Case::Mixed => {
                for ch in s.chars() {
                    self.out.push(ch);
                    written += 1;
                }
            }
        }
        written
    }

    fn push_offset_sign(&mut self) {
        let sign = if self.tm.gmt_offset >= 0 { '+' } else { '-' };
        self.out.push(sign);
    }

    fn pad(&self, suffix: Suffix, width: u8) -> u8 {
        if suffix.fill() {
            0
        } else {
            width
        }
    }

    /// Years are displayed as their era-relative count: year -1 (1 BC)
    /// displays as 1. Intervals keep the sign.
    fn display_year(&self, year: i64) -> i64 {
        if self.kind.is_interval() {
            year
        } else {
            year.abs()
        }
    }

    fn iso_year(&self) -> i64 {
        calendar::iso_year(
            self.tm.year.into(),
            self.tm.month.into(),
            self.tm.day.into(),
        )
    }

    fn month_index(&self) -> Result<Option<usize>, Error> {
        match self.tm.month {
            0 => Ok(None),
            m @ 1..=12 => Ok(Some(m as usize - 1)),
            _ => Err(render::Error::OutOfRange { what: "month" }.into()),
        }
    }

    fn weekday_index(&self) -> Result<usize, Error> {
        match self.tm.weekday {
            w @ 0..=6 => Ok(w as usize),
            _ => Err(render::Error::OutOfRange { what: "weekday" }.into()),
        }
    }

    fn zone_abbrev(&self) -> Result<&'a str, Error> {
        match self.tm.zone_abbrev {
            Some(ref abbrev) => Ok(abbrev),
            None => Err(render::Error::MissingZoneAbbreviation.into()),
        }
    }

    fn guard_interval(&self, keyword: &'static Keyword) -> Result<(), Error> {
        if self.kind.is_interval() {
            return Err(render::Error::NotSupported {
                keyword: keyword.name,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::Mode;

    fn date(year: i32, month: i32, day: i32) -> CivilTime {
        let julian =
            calendar::julian_day(year.into(), month.into(), day.into());
        CivilTime {
            year,
            month,
            day,
            weekday: calendar::julian_weekday(julian) as i32,
            yearday: (julian
                - calendar::julian_day(year.into(), 1, 1)
                + 1) as i32,
            ..CivilTime::default()
        }
    }

    fn render(pattern: &str, tm: &CivilTime) -> String {
        Pattern::compile(pattern, Mode::Free)
            .unwrap()
            .render(tm, TimeKind::Timestamp)
            .unwrap()
    }

    fn render_interval(pattern: &str, tm: &CivilTime) -> String {
        Pattern::compile(pattern, Mode::Free)
            .unwrap()
            .render(tm, TimeKind::Interval)
            .unwrap()
    }

    #[test]
    fn timestamp_basic() {
        let tm = CivilTime {
            hour: 8,
            minute: 9,
            second: 10,
            microsecond: 123_456,
            ..date(2024, 3, 5)
        };
        insta::assert_snapshot!(
            render("YYYY-MM-DD HH24:MI:SS.US", &tm),
            @"2024-03-05 08:09:10.123456"
        );
        insta::assert_snapshot!(
            render("Day, DD Mon YYYY", &tm),
            @"Tuesday  , 05 Mar 2024"
        );
        insta::assert_snapshot!(render("DDD WW Q J", &tm), @"065 10 1 2460375");
    }

    #[test]
    fn fill_mode() {
        let tm = date(1776, 7, 4);
        insta::assert_snapshot!(
            render("FMMonth DD, YYYY", &tm),
            @"July 4, 1776"
        );
        insta::assert_snapshot!(render("FMDDD", &tm), @"186");
        insta::assert_snapshot!(render("FMDay", &tm), @"Thursday");
    }

    #[test]
    fn ordinal_suffixes() {
        let day = |d: i32| CivilTime { day: d, ..date(2024, 3, 1) };
        insta::assert_snapshot!(render("FMDDTH", &day(1)), @"1ST");
        insta::assert_snapshot!(render("FMDDTH", &day(2)), @"2ND");
        insta::assert_snapshot!(render("FMDDTH", &day(3)), @"3RD");
        insta::assert_snapshot!(render("FMDDTH", &day(4)), @"4TH");
        insta::assert_snapshot!(render("FMDDTH", &day(11)), @"11TH");
        insta::assert_snapshot!(render("FMDDTH", &day(12)), @"12TH");
        insta::assert_snapshot!(render("FMDDTH", &day(13)), @"13TH");
        insta::assert_snapshot!(render("FMDDTH", &day(21)), @"21ST");
        insta::assert_snapshot!(render("FMDDth", &day(22)), @"22nd");
        insta::assert_snapshot!(render("FMDDth", &day(23)), @"23rd");
        insta::assert_snapshot!(render("DDTH", &day(4)), @"04TH");
        // Ordinals never attach to name fields.
        insta::assert_snapshot!(render("FMDayTH", &day(1)), @"Friday");
    }

    #[test]
    fn twelve_hour_clock() {
        let at = |hour: i64| CivilTime { hour, ..CivilTime::default() };
        insta::assert_snapshot!(render("HH12 AM", &at(0)), @"12 AM");
        insta::assert_snapshot!(render("HH12 A.M.", &at(13)), @"01 P.M.");
        insta::assert_snapshot!(render("HH am", &at(12)), @"12 pm");
        insta::assert_snapshot!(render("HH24 pm", &at(23)), @"23 pm");
        insta::assert_snapshot!(render("HH12", &at(15)), @"03");
    }

    #[test]
    fn eras_and_years() {
        insta::assert_snapshot!(render("YYYY AD", &date(1, 1, 1)), @"0001 AD");
        insta::assert_snapshot!(render("YYYY BC", &date(-1, 1, 1)), @"0001 BC");
        insta::assert_snapshot!(
            render("YYYY bc", &date(-42, 1, 1)),
            @"0042 bc"
        );
        insta::assert_snapshot!(
            render("Y,YYY YYY YY Y", &date(2024, 3, 5)),
            @"2,024 024 24 4"
        );
        insta::assert_snapshot!(render("Y,YYY", &date(1776, 7, 4)), @"1,776");
        insta::assert_snapshot!(render("A.D.", &date(987, 1, 1)), @"A.D.");
    }

    #[test]
    fn centuries() {
        insta::assert_snapshot!(render("CC", &date(2024, 1, 1)), @"21");
        insta::assert_snapshot!(render("CC", &date(2000, 1, 1)), @"20");
        insta::assert_snapshot!(render("CC", &date(-510, 1, 1)), @"-06");
        let interval = CivilTime { year: 250, ..CivilTime::default() };
        insta::assert_snapshot!(render_interval("CC", &interval), @"02");
    }

    #[test]
    fn iso_week_dates() {
        let tm = date(2005, 1, 1);
        insta::assert_snapshot!(render("IYYY-IW", &tm), @"2004-53");
        insta::assert_snapshot!(render("IDDD", &tm), @"370");
        insta::assert_snapshot!(render("ID D", &tm), @"6 7");
        insta::assert_snapshot!(render("IYY IY I", &tm), @"004 04 4");
        insta::assert_snapshot!(render("IW", &date(2024, 3, 5)), @"10");
    }

    #[test]
    fn roman_months() {
        insta::assert_snapshot!(render("RM", &date(2024, 3, 1)), @"III ");
        insta::assert_snapshot!(render("FMRM", &date(2024, 3, 1)), @"III");
        insta::assert_snapshot!(render("rm", &date(2024, 12, 1)), @"xii ");
        insta::assert_snapshot!(render("RM", &date(2024, 8, 1)), @"VIII");

        // Interval months count backwards from December when negative,
        // and whole years render as January (or December below zero).
        let months = |month: i32, year: i32| CivilTime {
            month,
            year,
            ..CivilTime::default()
        };
        insta::assert_snapshot!(
            render_interval("FMRM", &months(-2, 0)),
            @"XI"
        );
        insta::assert_snapshot!(
            render_interval("FMRM", &months(0, 3)),
            @"XII"
        );
        insta::assert_snapshot!(render_interval("FMRM", &months(0, -3)), @"I");
        insta::assert_snapshot!(render_interval("RM", &months(0, 0)), @"");
    }

    #[test]
    fn month_names() {
        let tm = date(2024, 5, 1);
        insta::assert_snapshot!(render("MONTH", &tm), @"MAY      ");
        insta::assert_snapshot!(render("Month", &tm), @"May      ");
        insta::assert_snapshot!(render("month", &tm), @"may      ");
        insta::assert_snapshot!(render("FMMonth", &tm), @"May");
        insta::assert_snapshot!(render("MON Mon mon", &tm), @"MAY May may");
        // A zero month renders nothing rather than failing.
        let zero = CivilTime { month: 0, ..tm.clone() };
        insta::assert_snapshot!(render("[Month]", &zero), @"[]");
    }

    #[test]
    fn day_names() {
        let tm = date(2024, 3, 5);
        insta::assert_snapshot!(render("DAY", &tm), @"TUESDAY  ");
        insta::assert_snapshot!(render("day", &tm), @"tuesday  ");
        insta::assert_snapshot!(render("DY Dy dy", &tm), @"TUE Tue tue");
    }

    #[test]
    fn zone_fields() {
        let mut tm = date(2024, 3, 5);
        tm.gmt_offset = 19_800;
        tm.zone_abbrev = Some("IST".to_string());
        insta::assert_snapshot!(render("OF", &tm), @"+05:30");
        insta::assert_snapshot!(render("TZH:TZM", &tm), @"+05:30");
        insta::assert_snapshot!(render("TZ tz", &tm), @"IST ist");

        tm.gmt_offset = 18_000;
        insta::assert_snapshot!(render("OF", &tm), @"+05");
        insta::assert_snapshot!(render("FMOF", &tm), @"+5");

        tm.gmt_offset = -16_200;
        insta::assert_snapshot!(render("OF", &tm), @"-04:30");
        insta::assert_snapshot!(render("TZH:TZM", &tm), @"-04:30");
    }

    #[test]
    fn missing_zone_abbreviation_is_an_error() {
        let tm = date(2024, 3, 5);
        let err = Pattern::compile("TZ", Mode::Free)
            .unwrap()
            .render(&tm, TimeKind::Timestamp)
            .unwrap_err();
        insta::assert_snapshot!(
            err,
            @"field `TZ` requires a time zone abbreviation, but none is available"
        );
    }

    #[test]
    fn fractions_truncate() {
        let tm = CivilTime { microsecond: 123_456, ..CivilTime::default() };
        insta::assert_snapshot!(
            render("FF1 FF2 FF3 FF4 FF5 FF6", &tm),
            @"1 12 123 1234 12345 123456"
        );
        insta::assert_snapshot!(render("MS US", &tm), @"123 123456");
        let tiny = CivilTime { microsecond: 789, ..CivilTime::default() };
        insta::assert_snapshot!(render("MS US", &tiny), @"000 000789");
        // Fractions keep their width even in fill mode.
        insta::assert_snapshot!(render("FMMS", &tiny), @"000");
    }

    #[test]
    fn seconds_past_midnight() {
        let tm = CivilTime {
            hour: 8,
            minute: 9,
            second: 10,
            ..CivilTime::default()
        };
        insta::assert_snapshot!(render("SSSS", &tm), @"29350");
        insta::assert_snapshot!(render("SSSSS", &tm), @"29350");
    }

    #[test]
    fn intervals_allow_wide_and_negative_times() {
        let tm = CivilTime {
            hour: 100,
            minute: 30,
            second: 0,
            ..CivilTime::default()
        };
        insta::assert_snapshot!(render_interval("HH24:MI", &tm), @"100:30");
        insta::assert_snapshot!(render_interval("SSSS", &tm), @"361800");

        let neg = CivilTime { hour: -5, minute: -30, ..CivilTime::default() };
        insta::assert_snapshot!(render_interval("HH24:MI", &neg), @"-05:-30");
        insta::assert_snapshot!(render_interval("HH12", &neg), @"-05");
    }

    #[test]
    fn intervals_reject_calendar_fields() {
        let tm = CivilTime { hour: 3, ..CivilTime::default() };
        for pattern in ["TZ", "TZH", "OF", "Day", "Dy", "BC", "D", "ID"] {
            let err = Pattern::compile(pattern, Mode::Free)
                .unwrap()
                .render(&tm, TimeKind::Interval)
                .unwrap_err();
            assert!(err.is_unsupported(), "{pattern}: {err}");
        }
        let err = Pattern::compile("Day", Mode::Free)
            .unwrap()
            .render(&tm, TimeKind::Interval)
            .unwrap_err();
        insta::assert_snapshot!(
            err,
            @"field `Day` is not supported for interval values"
        );
    }

    #[test]
    fn localized_names() {
        #[derive(Debug)]
        struct Shouty;

        impl Locale for Shouty {
            fn month_name(&self, month: usize) -> &str {
                ["JANVIER", "F\u{c9}VRIER", "MARS", "AVRIL", "MAI", "JUIN",
                 "JUILLET", "AO\u{db}T", "SEPTEMBRE", "OCTOBRE", "NOVEMBRE",
                 "D\u{c9}CEMBRE"][month]
            }
            fn month_abbrev(&self, _: usize) -> &str {
                "jan"
            }
            fn day_name(&self, _: usize) -> &str {
                "mardi"
            }
            fn day_abbrev(&self, _: usize) -> &str {
                "mar"
            }
        }

        let tm = date(2024, 3, 5);
        let got = Pattern::compile("TMMonth TMDay", Mode::Free)
            .unwrap()
            .render_with(&Shouty, &tm, TimeKind::Timestamp)
            .unwrap();
        // Localized names are cased per the keyword but never padded.
        insta::assert_snapshot!(got, @"Mars mardi");

        // Without the TM prefix the built-in English names are used no
        // matter the locale.
        let got = Pattern::compile("Month", Mode::Free)
            .unwrap()
            .render_with(&Shouty, &tm, TimeKind::Timestamp)
            .unwrap();
        insta::assert_snapshot!(got, @"March    ");
    }

    #[test]
    fn localized_name_length_guard() {
        #[derive(Debug)]
        struct Long(String);

        impl Locale for Long {
            fn month_name(&self, _: usize) -> &str {
                &self.0
            }
            fn month_abbrev(&self, _: usize) -> &str {
                &self.0
            }
            fn day_name(&self, _: usize) -> &str {
                &self.0
            }
            fn day_abbrev(&self, _: usize) -> &str {
                &self.0
            }
        }

        let locale = Long("x".repeat(100));
        let tm = date(2024, 3, 5);
        // The bound for `Month` is (5 + 2) * 12 = 84 bytes.
        let err = Pattern::compile("TMMonth", Mode::Free)
            .unwrap()
            .render_with(&locale, &tm, TimeKind::Timestamp)
            .unwrap_err();
        assert!(err.is_value_too_long());
        insta::assert_snapshot!(
            err,
            @"localized name for field `Month` is 100 bytes, which exceeds the maximum of 84 bytes"
        );

        let ok = Long("x".repeat(84));
        let got = Pattern::compile("TMMonth", Mode::Free)
            .unwrap()
            .render_with(&ok, &tm, TimeKind::Timestamp)
            .unwrap();
        assert_eq!(got.len(), 84);
    }

    #[test]
    fn out_of_range_fields() {
        let bad_month = CivilTime { month: 13, ..date(2024, 3, 5) };
        let err = Pattern::compile("Month", Mode::Free)
            .unwrap()
            .render(&bad_month, TimeKind::Timestamp)
            .unwrap_err();
        assert!(err.is_out_of_range());

        let bad_wday = CivilTime { weekday: 9, ..date(2024, 3, 5) };
        let err = Pattern::compile("Day", Mode::Free)
            .unwrap()
            .render(&bad_wday, TimeKind::Timestamp)
            .unwrap_err();
        assert!(err.is_out_of_range());

        let wide = CivilTime { hour: i64::MAX, ..CivilTime::default() };
        let err = Pattern::compile("SSSS", Mode::Free)
            .unwrap()
            .render(&wide, TimeKind::Interval)
            .unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn quoted_literals_render_verbatim() {
        let tm = date(2024, 3, 5);
        insta::assert_snapshot!(render("\"Q:\" Q", &tm), @"Q: 1");
        insta::assert_snapshot!(
            render("\"Year: \"FMYYYY", &tm),
            @"Year: 2024"
        );
    }

    #[test]
    fn output_stays_within_worst_case_estimate() {
        let tm = CivilTime {
            hour: 23,
            minute: 59,
            second: 59,
            microsecond: 999_999,
            gmt_offset: -16_200,
            zone_abbrev: Some("AEST".to_string()),
            ..date(2024, 12, 31)
        };
        for pattern in [
            "YYYY-MM-DD HH24:MI:SS.US OF",
            "Day Month DDTH, Y,YYY BC",
            "IYYY-IW-ID J SSSS WW CC RM",
        ] {
            let compiled = Pattern::compile(pattern, Mode::Free).unwrap();
            let got = compiled.render(&tm, TimeKind::Timestamp).unwrap();
            assert!(
                got.len() <= compiled.nodes.len() * MAX_FIELD_WIDTH,
                "{pattern}: {} > {}",
                got.len(),
                compiled.nodes.len() * MAX_FIELD_WIDTH
            );
        }
    }
}
