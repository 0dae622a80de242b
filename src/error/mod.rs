pub(crate) mod compile;
pub(crate) mod render;

/// An error that can occur when compiling or rendering a format picture.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`], [`core::fmt::Debug`]
/// and [`core::fmt::Display`] traits, this error type currently provides
/// very limited introspection capabilities. Coarse predicates like
/// [`Error::is_invalid_separator`] are provided, but they are not
/// exhaustive.
///
/// There is one error type for the whole crate because compilation and
/// rendering compose: a cache lookup can fail while compiling, and a
/// render call made through the cache can surface either.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Returns true when this error came from compiling a pattern in
    /// standard separator mode that contains a disallowed raw character.
    pub fn is_invalid_separator(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Compile(compile::Error::InvalidSeparator { .. }),
        )
    }

    /// Returns true when this error came from rendering a calendar-only
    /// field (an era, a name, a week date, a time zone field) against an
    /// interval breakdown.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Render(render::Error::NotSupported { .. }),
        )
    }

    /// Returns true when this error came from a localized name that
    /// exceeds the renderer's fixed length guard.
    pub fn is_value_too_long(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Render(render::Error::ValueTooLong { .. }),
        )
    }

    /// Returns true when this error came from a civil time value that a
    /// field computation could not represent.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Render(render::Error::OutOfRange { .. }),
        )
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            ErrorKind::Compile(ref err) => err.fmt(f),
            ErrorKind::Render(ref err) => err.fmt(f),
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Clone, Debug)]
enum ErrorKind {
    Compile(compile::Error),
    Render(render::Error),
}

impl From<compile::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: compile::Error) -> Error {
        Error { kind: ErrorKind::Compile(err) }
    }
}

impl From<render::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: render::Error) -> Error {
        Error { kind: ErrorKind::Render(err) }
    }
}
