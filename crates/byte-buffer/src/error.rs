//! Buffer error type.

use thiserror::Error;

/// Error type for [`ByteBuffer`](crate::ByteBuffer) operations.
///
/// Every failing operation reports its error before touching storage or the
/// cursor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The accessed byte range does not fit inside the buffer.
    #[error("offset: {offset}, length: {length}, buffer: {capacity}")]
    OutOfRange {
        offset: usize,
        length: usize,
        capacity: usize,
    },
    /// A numeric value does not fit the width it is written with.
    #[error("bad number {value} for type {type_name}.{}", .notes.unwrap_or(""))]
    InvalidValue {
        value: String,
        type_name: &'static str,
        notes: Option<&'static str>,
    },
    /// The buffer could not be constructed from the given initializer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BufferError>;
