/*!
Localized month and day names for the `TM` prefix.
*/

use crate::tables;

/// A source of localized month and day names.
///
/// A keyword carrying the `TM` prefix (say `TMMonth` or `TMDay`) renders
/// its name through a `Locale` instead of the built-in English tables.
/// Names come back in the locale's natural casing; rendering upper- or
/// lowercases them afterwards when the keyword's spelling asks for it,
/// and localized names are never padded.
///
/// Indices are zero-based: months `0..=11` starting at January, weekdays
/// `0..=6` starting at Sunday. Implementations are only ever called with
/// in-range indices.
pub trait Locale: core::fmt::Debug {
    /// The full month name, e.g. `January`.
    fn month_name(&self, month: usize) -> &str;
    /// The abbreviated month name, e.g. `Jan`.
    fn month_abbrev(&self, month: usize) -> &str;
    /// The full day name, e.g. `Sunday`.
    fn day_name(&self, weekday: usize) -> &str;
    /// The abbreviated day name, e.g. `Sun`.
    fn day_abbrev(&self, weekday: usize) -> &str;
}

/// The built-in English locale. This is what rendering without an explicit
/// locale uses.
#[derive(Clone, Copy, Debug, Default)]
pub struct English;

impl Locale for English {
    fn month_name(&self, month: usize) -> &str {
        tables::MONTHS_FULL[month]
    }

    fn month_abbrev(&self, month: usize) -> &str {
        tables::MONTHS_ABBREV[month]
    }

    fn day_name(&self, weekday: usize) -> &str {
        tables::DAYS_FULL[weekday]
    }

    fn day_abbrev(&self, weekday: usize) -> &str {
        tables::DAYS_ABBREV[weekday]
    }
}
