/*!
The constant data backing the format picture grammar: the keyword table,
the suffix table, the first-character dispatch index and the name arrays
used by the renderer.
*/

/// The semantic field a keyword stands for.
///
/// Distinct keywords that render identically share a variant. For example,
/// `AM` and `PM` both compile to `MeridiemUpper`, since which half of the
/// day gets printed depends on the hour and not on which spelling appears
/// in the picture. Likewise `SSSS` and `SSSSS` are both
/// `SecondsPastMidnight`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FieldId {
    MeridiemDotsUpper,
    MeridiemUpper,
    MeridiemDotsLower,
    MeridiemLower,
    EraDotsUpper,
    EraUpper,
    EraDotsLower,
    EraLower,
    Century,
    DayNameUpper,
    DayName,
    DayNameLower,
    DayAbbrevUpper,
    DayAbbrev,
    DayAbbrevLower,
    DayOfMonth,
    DayOfYear,
    DayOfWeek,
    Fraction1,
    Fraction2,
    Fraction3,
    Fraction4,
    Fraction5,
    Fraction6,
    FormatExact,
    Hour24,
    Hour12,
    IsoDayOfYear,
    IsoDayOfWeek,
    IsoWeek,
    IsoYear4,
    IsoYear3,
    IsoYear2,
    IsoYear1,
    JulianDay,
    Minute,
    Month,
    MonthNameUpper,
    MonthName,
    MonthNameLower,
    MonthAbbrevUpper,
    MonthAbbrev,
    MonthAbbrevLower,
    Millisecond,
    Microsecond,
    OffsetFull,
    Quarter,
    RomanMonthUpper,
    RomanMonthLower,
    SecondsPastMidnight,
    Second,
    TzHour,
    TzMinute,
    TzAbbrevUpper,
    TzAbbrevLower,
    WeekOfYear,
    WeekOfMonth,
    YearComma,
    Year4,
    Year3,
    Year2,
    Year1,
}

/// The calendar convention a keyword belongs to.
///
/// Keywords that read a date do so either through the ordinary Gregorian
/// day/month/year fields or through the ISO 8601 week date. The two
/// families are distinct; `IW` is not an alias for `WW`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CalendarMode {
    None,
    Gregorian,
    IsoWeek,
}

/// One entry in the keyword table.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Keyword {
    pub(crate) name: &'static str,
    pub(crate) field: FieldId,
    /// Whether the field produces digits, which is what decides whether
    /// an ordinal suffix can attach to it.
    pub(crate) is_numeric: bool,
    pub(crate) calendar: CalendarMode,
}

impl Keyword {
    pub(crate) fn len(&self) -> usize {
        self.name.len()
    }
}

const fn kw(
    name: &'static str,
    field: FieldId,
    is_numeric: bool,
    calendar: CalendarMode,
) -> Keyword {
    Keyword { name, field, is_numeric, calendar }
}

/// The keyword table.
///
/// Table order is load bearing. Matching scans a bucket of keywords
/// sharing a first character in table order and takes the first prefix
/// match, so longer keywords that share a prefix with shorter ones must
/// come first: `SSSSS` before `SSSS` before `SS`, `HH24` and `HH12`
/// before `HH`. Reordering this table changes which keyword wins for
/// overlapping prefixes and is a compatibility break.
#[rustfmt::skip]
pub(crate) const KEYWORDS: &[Keyword] = &[
    kw("A.D.", FieldId::EraDotsUpper, false, CalendarMode::None),
    kw("A.M.", FieldId::MeridiemDotsUpper, false, CalendarMode::None),
    kw("AD", FieldId::EraUpper, false, CalendarMode::None),
    kw("AM", FieldId::MeridiemUpper, false, CalendarMode::None),
    kw("B.C.", FieldId::EraDotsUpper, false, CalendarMode::None),
    kw("BC", FieldId::EraUpper, false, CalendarMode::None),
    kw("CC", FieldId::Century, true, CalendarMode::None),
    kw("DAY", FieldId::DayNameUpper, false, CalendarMode::None),
    kw("DDD", FieldId::DayOfYear, true, CalendarMode::Gregorian),
    kw("DD", FieldId::DayOfMonth, true, CalendarMode::Gregorian),
    kw("DY", FieldId::DayAbbrevUpper, false, CalendarMode::None),
    kw("Day", FieldId::DayName, false, CalendarMode::None),
    kw("Dy", FieldId::DayAbbrev, false, CalendarMode::None),
    kw("D", FieldId::DayOfWeek, true, CalendarMode::Gregorian),
    kw("FF1", FieldId::Fraction1, true, CalendarMode::None),
    kw("FF2", FieldId::Fraction2, true, CalendarMode::None),
    kw("FF3", FieldId::Fraction3, true, CalendarMode::None),
    kw("FF4", FieldId::Fraction4, true, CalendarMode::None),
    kw("FF5", FieldId::Fraction5, true, CalendarMode::None),
    kw("FF6", FieldId::Fraction6, true, CalendarMode::None),
    kw("FX", FieldId::FormatExact, false, CalendarMode::None),
    kw("HH24", FieldId::Hour24, true, CalendarMode::None),
    kw("HH12", FieldId::Hour12, true, CalendarMode::None),
    kw("HH", FieldId::Hour12, true, CalendarMode::None),
    kw("IDDD", FieldId::IsoDayOfYear, true, CalendarMode::IsoWeek),
    kw("ID", FieldId::IsoDayOfWeek, true, CalendarMode::IsoWeek),
    kw("IW", FieldId::IsoWeek, true, CalendarMode::IsoWeek),
    kw("IYYY", FieldId::IsoYear4, true, CalendarMode::IsoWeek),
    kw("IYY", FieldId::IsoYear3, true, CalendarMode::IsoWeek),
    kw("IY", FieldId::IsoYear2, true, CalendarMode::IsoWeek),
    kw("I", FieldId::IsoYear1, true, CalendarMode::IsoWeek),
    kw("J", FieldId::JulianDay, true, CalendarMode::None),
    kw("MI", FieldId::Minute, true, CalendarMode::None),
    kw("MM", FieldId::Month, true, CalendarMode::Gregorian),
    kw("MONTH", FieldId::MonthNameUpper, false, CalendarMode::Gregorian),
    kw("MON", FieldId::MonthAbbrevUpper, false, CalendarMode::Gregorian),
    kw("MS", FieldId::Millisecond, true, CalendarMode::None),
    kw("Month", FieldId::MonthName, false, CalendarMode::Gregorian),
    kw("Mon", FieldId::MonthAbbrev, false, CalendarMode::Gregorian),
    kw("OF", FieldId::OffsetFull, false, CalendarMode::None),
    kw("P.M.", FieldId::MeridiemDotsUpper, false, CalendarMode::None),
    kw("PM", FieldId::MeridiemUpper, false, CalendarMode::None),
    kw("Q", FieldId::Quarter, true, CalendarMode::None),
    kw("RM", FieldId::RomanMonthUpper, false, CalendarMode::Gregorian),
    kw("SSSSS", FieldId::SecondsPastMidnight, true, CalendarMode::None),
    kw("SSSS", FieldId::SecondsPastMidnight, true, CalendarMode::None),
    kw("SS", FieldId::Second, true, CalendarMode::None),
    kw("TZH", FieldId::TzHour, false, CalendarMode::None),
    kw("TZM", FieldId::TzMinute, true, CalendarMode::None),
    kw("TZ", FieldId::TzAbbrevUpper, false, CalendarMode::None),
    kw("US", FieldId::Microsecond, true, CalendarMode::None),
    kw("WW", FieldId::WeekOfYear, true, CalendarMode::Gregorian),
    kw("W", FieldId::WeekOfMonth, true, CalendarMode::Gregorian),
    kw("Y,YYY", FieldId::YearComma, true, CalendarMode::Gregorian),
    kw("YYYY", FieldId::Year4, true, CalendarMode::Gregorian),
    kw("YYY", FieldId::Year3, true, CalendarMode::Gregorian),
    kw("YY", FieldId::Year2, true, CalendarMode::Gregorian),
    kw("Y", FieldId::Year1, true, CalendarMode::Gregorian),
    kw("a.d.", FieldId::EraDotsLower, false, CalendarMode::None),
    kw("a.m.", FieldId::MeridiemDotsLower, false, CalendarMode::None),
    kw("ad", FieldId::EraLower, false, CalendarMode::None),
    kw("am", FieldId::MeridiemLower, false, CalendarMode::None),
    kw("b.c.", FieldId::EraDotsLower, false, CalendarMode::None),
    kw("bc", FieldId::EraLower, false, CalendarMode::None),
    kw("cc", FieldId::Century, true, CalendarMode::None),
    kw("day", FieldId::DayNameLower, false, CalendarMode::None),
    kw("ddd", FieldId::DayOfYear, true, CalendarMode::Gregorian),
    kw("dd", FieldId::DayOfMonth, true, CalendarMode::Gregorian),
    kw("dy", FieldId::DayAbbrevLower, false, CalendarMode::None),
    kw("d", FieldId::DayOfWeek, true, CalendarMode::Gregorian),
    kw("ff1", FieldId::Fraction1, true, CalendarMode::None),
    kw("ff2", FieldId::Fraction2, true, CalendarMode::None),
    kw("ff3", FieldId::Fraction3, true, CalendarMode::None),
    kw("ff4", FieldId::Fraction4, true, CalendarMode::None),
    kw("ff5", FieldId::Fraction5, true, CalendarMode::None),
    kw("ff6", FieldId::Fraction6, true, CalendarMode::None),
    kw("fx", FieldId::FormatExact, false, CalendarMode::None),
    kw("hh24", FieldId::Hour24, true, CalendarMode::None),
    kw("hh12", FieldId::Hour12, true, CalendarMode::None),
    kw("hh", FieldId::Hour12, true, CalendarMode::None),
    kw("iddd", FieldId::IsoDayOfYear, true, CalendarMode::IsoWeek),
    kw("id", FieldId::IsoDayOfWeek, true, CalendarMode::IsoWeek),
    kw("iw", FieldId::IsoWeek, true, CalendarMode::IsoWeek),
    kw("iyyy", FieldId::IsoYear4, true, CalendarMode::IsoWeek),
    kw("iyy", FieldId::IsoYear3, true, CalendarMode::IsoWeek),
    kw("iy", FieldId::IsoYear2, true, CalendarMode::IsoWeek),
    kw("i", FieldId::IsoYear1, true, CalendarMode::IsoWeek),
    kw("j", FieldId::JulianDay, true, CalendarMode::None),
    kw("mi", FieldId::Minute, true, CalendarMode::None),
    kw("mm", FieldId::Month, true, CalendarMode::Gregorian),
    kw("month", FieldId::MonthNameLower, false, CalendarMode::Gregorian),
    kw("mon", FieldId::MonthAbbrevLower, false, CalendarMode::Gregorian),
    kw("ms", FieldId::Millisecond, true, CalendarMode::None),
    kw("of", FieldId::OffsetFull, false, CalendarMode::None),
    kw("p.m.", FieldId::MeridiemDotsLower, false, CalendarMode::None),
    kw("pm", FieldId::MeridiemLower, false, CalendarMode::None),
    kw("q", FieldId::Quarter, true, CalendarMode::None),
    kw("rm", FieldId::RomanMonthLower, false, CalendarMode::Gregorian),
    kw("sssss", FieldId::SecondsPastMidnight, true, CalendarMode::None),
    kw("ssss", FieldId::SecondsPastMidnight, true, CalendarMode::None),
    kw("ss", FieldId::Second, true, CalendarMode::None),
    kw("tzh", FieldId::TzHour, false, CalendarMode::None),
    kw("tzm", FieldId::TzMinute, true, CalendarMode::None),
    kw("tz", FieldId::TzAbbrevLower, false, CalendarMode::None),
    kw("us", FieldId::Microsecond, true, CalendarMode::None),
    kw("ww", FieldId::WeekOfYear, true, CalendarMode::Gregorian),
    kw("w", FieldId::WeekOfMonth, true, CalendarMode::Gregorian),
    kw("y,yyy", FieldId::YearComma, true, CalendarMode::Gregorian),
    kw("yyyy", FieldId::Year4, true, CalendarMode::Gregorian),
    kw("yyy", FieldId::Year3, true, CalendarMode::Gregorian),
    kw("yy", FieldId::Year2, true, CalendarMode::Gregorian),
    kw("y", FieldId::Year1, true, CalendarMode::Gregorian),
];

/// A bitmask of suffix modifiers attached to a compiled keyword node.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Suffix(u8);

impl Suffix {
    /// `FM`: suppress zero padding on numeric fields and blank padding on
    /// names.
    pub(crate) const FILL: Suffix = Suffix(0b0000_0001);
    /// `TH`: append an uppercase ordinal ending.
    pub(crate) const ORDINAL_UPPER: Suffix = Suffix(0b0000_0010);
    /// `th`: append a lowercase ordinal ending.
    pub(crate) const ORDINAL_LOWER: Suffix = Suffix(0b0000_0100);
    /// `SP`: spell the number out. Recognized but never rendered, same as
    /// the grammar this one imitates.
    pub(crate) const SPELL_OUT: Suffix = Suffix(0b0000_1000);
    /// `TM`: use localized month/day names.
    pub(crate) const LOCALIZED: Suffix = Suffix(0b0001_0000);

    pub(crate) const fn empty() -> Suffix {
        Suffix(0)
    }

    pub(crate) const fn union(self, other: Suffix) -> Suffix {
        Suffix(self.0 | other.0)
    }

    pub(crate) const fn contains(self, other: Suffix) -> bool {
        self.0 & other.0 == other.0
    }

    pub(crate) const fn without(self, other: Suffix) -> Suffix {
        Suffix(self.0 & !other.0)
    }

    pub(crate) fn fill(self) -> bool {
        self.contains(Suffix::FILL)
    }

    pub(crate) fn localized(self) -> bool {
        self.contains(Suffix::LOCALIZED)
    }

    /// Returns `Some(true)` for an uppercase ordinal request, `Some(false)`
    /// for lowercase and `None` when no ordinal suffix is attached.
    pub(crate) fn ordinal(self) -> Option<bool> {
        if self.contains(Suffix::ORDINAL_UPPER) {
            Some(true)
        } else if self.contains(Suffix::ORDINAL_LOWER) {
            Some(false)
        } else {
            None
        }
    }
}

/// Whether a suffix is recognized before or after its keyword.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SuffixKind {
    Prefix,
    Postfix,
}

/// One entry in the suffix table.
#[derive(Debug)]
pub(crate) struct SuffixDef {
    pub(crate) name: &'static str,
    pub(crate) flag: Suffix,
    pub(crate) kind: SuffixKind,
}

const fn suffix(
    name: &'static str,
    flag: Suffix,
    kind: SuffixKind,
) -> SuffixDef {
    SuffixDef { name, flag, kind }
}

pub(crate) const SUFFIXES: &[SuffixDef] = &[
    suffix("FM", Suffix::FILL, SuffixKind::Prefix),
    suffix("fm", Suffix::FILL, SuffixKind::Prefix),
    suffix("TM", Suffix::LOCALIZED, SuffixKind::Prefix),
    suffix("tm", Suffix::LOCALIZED, SuffixKind::Prefix),
    suffix("TH", Suffix::ORDINAL_UPPER, SuffixKind::Postfix),
    suffix("th", Suffix::ORDINAL_LOWER, SuffixKind::Postfix),
    suffix("SP", Suffix::SPELL_OUT, SuffixKind::Postfix),
];

/// The number of bytes the `TM` prefix occupies, used by the localized
/// name length guard.
pub(crate) const LOCALIZED_SUFFIX_LEN: usize = 2;

/// The dispatch index covers printable ASCII strictly between `' '` and
/// `'~'`.
const KEYWORD_INDEX_SIZE: usize = (b'~' - b' ') as usize;

/// Maps a first byte (offset by `' '`) to the position of the first
/// keyword starting with that byte, so that a lookup only ever scans one
/// bucket of the table.
///
/// Built from `KEYWORDS` at compile time, which keeps the index and the
/// table from drifting apart.
pub(crate) const KEYWORD_INDEX: [Option<u8>; KEYWORD_INDEX_SIZE] =
    build_keyword_index();

const fn build_keyword_index() -> [Option<u8>; KEYWORD_INDEX_SIZE] {
    let mut index = [None; KEYWORD_INDEX_SIZE];
    // Walk backwards so the earliest table position for each first byte
    // wins.
    let mut i = KEYWORDS.len();
    while i > 0 {
        i -= 1;
        let first = KEYWORDS[i].name.as_bytes()[0];
        assert!(b' ' < first && first < b'~');
        index[(first - b' ') as usize] = Some(i as u8);
    }
    index
}

/// Looks for a keyword matching a prefix of `input`.
///
/// Candidates sharing the input's first byte are tried in table order and
/// the first prefix match wins. This is leftmost-longest *by table order*:
/// `HH12` is found before `HH` only because the table lists it first.
pub(crate) fn keyword_search(input: &str) -> Option<&'static Keyword> {
    let first = *input.as_bytes().first()?;
    if first <= b' ' || first >= b'~' {
        return None;
    }
    let start = KEYWORD_INDEX[usize::from(first - b' ')]?;
    for keyword in KEYWORDS[usize::from(start)..].iter() {
        if keyword.name.as_bytes()[0] != first {
            break;
        }
        if input.as_bytes().starts_with(keyword.name.as_bytes()) {
            return Some(keyword);
        }
    }
    None
}

/// Looks for a prefix or postfix suffix matching a prefix of `input`.
pub(crate) fn suffix_search(
    input: &str,
    kind: SuffixKind,
) -> Option<&'static SuffixDef> {
    SUFFIXES.iter().find(|suffix| {
        suffix.kind == kind && input.as_bytes().starts_with(suffix.name.as_bytes())
    })
}

pub(crate) const MONTHS_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const MONTHS_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
    "Nov", "Dec",
];

pub(crate) const DAYS_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub(crate) const DAYS_ABBREV: [&str; 7] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Roman numeral months, December first.
///
/// The reverse chronological order comes from the parsing direction of the
/// original grammar, where a subtraction-style prefix match needs `VIII`
/// tried before `V`. Rendering simply indexes by a derived position, but
/// the layout is kept so the derivation stays the same.
pub(crate) const ROMAN_MONTHS_UPPER: [&str; 12] = [
    "XII", "XI", "X", "IX", "VIII", "VII", "VI", "V", "IV", "III", "II", "I",
];

pub(crate) const ROMAN_MONTHS_LOWER: [&str; 12] = [
    "xii", "xi", "x", "ix", "viii", "vii", "vi", "v", "iv", "iii", "ii", "i",
];

pub(crate) const ORDINAL_UPPER: [&str; 4] = ["ST", "ND", "RD", "TH"];
pub(crate) const ORDINAL_LOWER: [&str; 4] = ["st", "nd", "rd", "th"];
