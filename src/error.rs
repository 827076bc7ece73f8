use crate::schema::TType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during Thrift binary encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Attempted to read past the end of the input buffer
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A wire type tag is not one defined by the binary protocol
    #[error("unrecognized wire type tag: {0:#04x}")]
    InvalidTypeTag(u8),

    /// A string or collection carried a negative length prefix
    #[error("negative length prefix: {0}")]
    InvalidLength(i32),

    /// A string field contained non-UTF-8 bytes
    #[error("string contains invalid UTF-8")]
    InvalidString,

    /// A value exceeded the i32 length prefix the wire format allows
    #[error("value of {0} bytes exceeds the maximum encodable length")]
    LengthOverflow(usize),

    /// Nested structs or collections exceeded the decoder's depth limit
    #[error("nesting exceeded the maximum depth of {0}")]
    DepthLimit(usize),

    /// On encode, a field's value did not match its declared kind
    #[error("expected a {expected:?} value, got {got:?}")]
    KindMismatch { expected: TType, got: TType },

    /// On encode, a nested struct carried a different schema than declared
    #[error("expected a {expected} struct, got {got}")]
    SchemaMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// An I/O error occurred during writing
    #[error("I/O error: {0}")]
    Io(String),
}
