//! Errors raised by the readers and writers of this crate.
use dcmkit_core::{ErrorKind, Tag};
use snafu::{Backtrace, Snafu};

#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not read from the data source"))]
    ReadSource {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not write to the destination"))]
    WriteDestination {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Missing DICM magic code"))]
    BadMagic { backtrace: Backtrace },
    #[snafu(display("File meta information does not start with its group length"))]
    MissingGroupLength { backtrace: Backtrace },
    #[snafu(display("Unknown value representation {:?} at {}", vr, tag))]
    UnknownVr {
        tag: Tag,
        vr: [u8; 2],
        backtrace: Backtrace,
    },
    #[snafu(display("Reserved bytes of element {} are not zero", tag))]
    NonZeroReservedBytes { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Element {} overflows the file meta information", tag))]
    TruncatedMetaElement { tag: Tag, backtrace: Backtrace },
    #[snafu(display(
        "File meta information ends at {} bytes instead of {}",
        position,
        length
    ))]
    InconsistentMetaLength {
        position: usize,
        length: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("File meta information has no transfer syntax UID"))]
    MissingTransferSyntax { backtrace: Backtrace },
    #[snafu(display("Unsupported transfer syntax {}", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Delimiter {} has a non-zero length {}", tag, len))]
    DelimiterLength {
        tag: Tag,
        len: u32,
        backtrace: Backtrace,
    },
    #[snafu(display("Unexpected delimiter {} outside of a sequence", tag))]
    UnexpectedDelimiter { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Unexpected tag {} where a sequence item was expected", tag))]
    UnexpectedItemTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Sequence depth underflow"))]
    DepthUnderflow { backtrace: Backtrace },
    #[snafu(display("Unexpected end of data while reading {}", what))]
    UnexpectedEnd {
        what: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Undefined length for non-sequence element {}", tag))]
    UndefinedLength { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Value of {} is too long to be encoded ({} bytes)", tag, len))]
    ValueTooLong {
        tag: Tag,
        len: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Unbalanced data set token {}", token))]
    UnbalancedToken {
        token: &'static str,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedTransferSyntax { .. } => ErrorKind::NotImplemented,
            Error::UnbalancedToken { .. } | Error::DepthUnderflow { .. } => {
                ErrorKind::InternalError
            }
            Error::ValueTooLong { .. } => ErrorKind::ParameterOutOfRange,
            _ => ErrorKind::BadFileFormat,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
