//! Error kinds shared by every crate of the toolkit,
//! plus the error type of this crate.
//!
//! Each crate keeps its own error type,
//! but all of them can be classified into an [`ErrorKind`],
//! which is what callers should match on
//! when they only need to know the nature of a failure.
use snafu::{Backtrace, Snafu};
use std::fmt;

/// The nature of a failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Structural error in the input,
    /// such as a bad magic code, a truncated value
    /// or an unbalanced sequence delimiter.
    BadFileFormat,
    /// Known but unsupported feature.
    NotImplemented,
    /// The caller passed an argument outside of its valid range.
    ParameterOutOfRange,
    /// A modification request violates the rules of the data model.
    BadRequest,
    /// The image format is not supported by the requested operation.
    IncompatibleImageFormat,
    /// The image dimensions do not fit the requested operation.
    IncompatibleImageSize,
    /// An invariant of the toolkit was violated.
    InternalError,
    /// A file could not be opened, read or written.
    InaccessibleFile,
    /// The requested attribute or item does not exist.
    InexistentItem,
}

impl ErrorKind {
    /// Retrieve a short, human readable description of the kind.
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::BadFileFormat => "bad file format",
            ErrorKind::NotImplemented => "not implemented",
            ErrorKind::ParameterOutOfRange => "parameter out of range",
            ErrorKind::BadRequest => "bad request",
            ErrorKind::IncompatibleImageFormat => "incompatible image format",
            ErrorKind::IncompatibleImageSize => "incompatible image size",
            ErrorKind::InternalError => "internal error",
            ErrorKind::InaccessibleFile => "inaccessible file",
            ErrorKind::InexistentItem => "inexistent item",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// An error raised when interpreting textual tags and paths.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The text is not a valid attribute tag.
    #[snafu(display("Invalid tag `{}`", text))]
    InvalidTag {
        /// the offending text
        text: String,
        /// the backtrace
        backtrace: Backtrace,
    },
    /// The text is not a valid attribute path.
    #[snafu(display("Invalid attribute path `{}`: {}", text, reason))]
    InvalidPath {
        /// the offending text
        text: String,
        /// the reason why it was rejected
        reason: &'static str,
        /// the backtrace
        backtrace: Backtrace,
    },
    /// The text does not name a known value representation.
    #[snafu(display("Unknown value representation `{}`", text))]
    UnknownVr {
        /// the offending text
        text: String,
        /// the backtrace
        backtrace: Backtrace,
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ParameterOutOfRange
    }
}

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
