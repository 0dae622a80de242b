#[derive(Clone, Debug)]
pub(crate) enum Error {
    InvalidSeparator { ch: char },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            InvalidSeparator { ch } => write!(
                f,
                "invalid character {ch:?} in format picture, only \
                 `-./,':;` and spaces may separate fields",
            ),
        }
    }
}
