/*!
Formats civil time with "format pictures" in the style of SQL's `to_char`.

A format picture is a template string like `YYYY-MM-DD HH24:MI:SS TZ`. It
is compiled once into a sequence of nodes and can then be rendered any
number of times against a [`CivilTime`] breakdown supplied by the caller.
This crate deliberately does not do any calendar or time zone math of its
own beyond what rendering requires (ISO week dates and the like); producing
a correct breakdown for an instant in a time zone is the caller's job.

# Example

```
use tochar::{CivilTime, Mode, Pattern, TimeKind};

let tm = CivilTime {
    year: 2024,
    month: 3,
    day: 5,
    hour: 8,
    minute: 9,
    second: 10,
    microsecond: 123_456,
    ..CivilTime::default()
};
let pat = Pattern::compile("YYYY-MM-DD HH24:MI:SS.US", Mode::Free)?;
assert_eq!(
    pat.render(&tm, TimeKind::Timestamp)?,
    "2024-03-05 08:09:10.123456",
);

# Ok::<(), tochar::Error>(())
```

# Example: caching compiled patterns

Compiling is cheap but not free. When the same handful of pictures is
rendered over and over (the common case in a server), a [`PatternCache`]
keeps the most recently used compilations around:

```
use tochar::{CivilTime, Mode, PatternCache, TimeKind};

let cache = PatternCache::new();
let tm = CivilTime { year: 1776, month: 7, day: 4, ..CivilTime::default() };
let got = cache.format("FMMonth DD, YYYY", Mode::Free, &tm, TimeKind::Timestamp)?;
assert_eq!(got, "July 4, 1776");

# Ok::<(), tochar::Error>(())
```

# Separator modes

Patterns are compiled in one of two [`Mode`]s. In `Mode::Free`, any
character that isn't a keyword passes through to the output. In
`Mode::Standard`, only the separators `-./,':;` and space are allowed
between fields, and anything else is a compile error. Standard mode exists
for grammar entry points that want to reject sloppy pictures up front.

# Intervals

A breakdown can describe an elapsed duration instead of a point in time
(hours may be negative or exceed 24). Rendering with
[`TimeKind::Interval`] permits the purely numeric fields, but rejects
fields that only make sense for a calendar date: eras, month and day
names, the `D` and `ID` weekday numbers, and every time zone field.
*/

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub use crate::{
    cache::PatternCache,
    civil::{CivilTime, TimeKind},
    compile::{Mode, Pattern},
    error::Error,
    locale::{English, Locale},
};

#[macro_use]
mod logging;

mod cache;
mod calendar;
mod civil;
mod compile;
mod error;
mod locale;
mod render;
mod tables;
mod util;
