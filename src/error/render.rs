#[derive(Clone, Debug)]
pub(crate) enum Error {
    NotSupported {
        keyword: &'static str,
    },
    ValueTooLong {
        keyword: &'static str,
        len: usize,
        max: usize,
    },
    OutOfRange {
        what: &'static str,
    },
    MissingZoneAbbreviation,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            NotSupported { keyword } => write!(
                f,
                "field `{keyword}` is not supported for interval values",
            ),
            ValueTooLong { keyword, len, max } => write!(
                f,
                "localized name for field `{keyword}` is {len} bytes, \
                 which exceeds the maximum of {max} bytes",
            ),
            OutOfRange { what } => {
                write!(f, "{what} is out of the representable range")
            }
            MissingZoneAbbreviation => f.write_str(
                "field `TZ` requires a time zone abbreviation, \
                 but none is available",
            ),
        }
    }
}
