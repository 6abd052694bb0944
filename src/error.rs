//! Contains the Error and Result type used by the codec.
use std::fmt::Display;

use crate::Tag;

/// An error that occurred while decoding or encoding NBT. Carries the byte
/// offset into the (decompressed) stream where the problem was found, if one
/// applies.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    offset: Option<usize>,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The type byte read did not match the type the caller asked for.
    TypeMismatch { expected: Tag, actual: Tag },

    /// A type byte outside of 0..=12.
    UnknownType(u8),

    /// The first byte of a document was neither a raw compound nor a known
    /// compression magic byte.
    UnknownEnvelope(u8),

    /// Ran out of input before a value was complete. `needed` is the number of
    /// bytes the read required, `available` what was left.
    TruncatedStream { needed: usize, available: usize },

    /// A negative or implausible length or count.
    MalformedLength(i64),

    /// String data that is not valid in the configured string encoding.
    /// Contains the offending bytes.
    InvalidString(Vec<u8>),

    /// Compounds and lists were nested deeper than allowed.
    DepthLimit(usize),

    /// Failure from the underlying reader, writer or compression stream.
    Io(String),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset of the failure, if known.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, ErrorKind::TruncatedStream { .. })
    }

    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind, offset: None }
    }

    pub(crate) fn at(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub(crate) fn type_mismatch(expected: Tag, actual: Tag) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    pub(crate) fn unknown_type(t: u8) -> Self {
        Self::new(ErrorKind::UnknownType(t))
    }

    pub(crate) fn unknown_envelope(b: u8) -> Self {
        Self::new(ErrorKind::UnknownEnvelope(b)).at(0)
    }

    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        Self::new(ErrorKind::TruncatedStream { needed, available })
    }

    pub(crate) fn malformed_length(len: i64) -> Self {
        Self::new(ErrorKind::MalformedLength(len))
    }

    pub(crate) fn invalid_string(data: &[u8]) -> Self {
        Self::new(ErrorKind::InvalidString(data.to_vec()))
    }

    pub(crate) fn depth_limit(max: usize) -> Self {
        Self::new(ErrorKind::DepthLimit(max))
    }
}

impl std::error::Error for Error {}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected {:?}, found {:?}", expected, actual)
            }
            ErrorKind::UnknownType(t) => write!(f, "invalid nbt tag value: {}", t),
            ErrorKind::UnknownEnvelope(b) => write!(
                f,
                "unknown envelope: first byte {:#04x} is not a compound, gzip or zlib header",
                b
            ),
            ErrorKind::TruncatedStream { needed, available } => write!(
                f,
                "eof: needed {} bytes but only {} remain",
                needed, available
            ),
            ErrorKind::MalformedLength(len) => write!(f, "malformed length: {}", len),
            ErrorKind::InvalidString(data) => write!(
                f,
                "invalid nbt string: {}",
                String::from_utf8_lossy(data)
            ),
            ErrorKind::DepthLimit(max) => write!(f, "nesting deeper than {} levels", max),
            ErrorKind::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} (at byte {})", self.kind, offset),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::new(ErrorKind::Io(e.to_string()))
    }
}
