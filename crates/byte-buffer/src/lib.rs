//! Fixed-capacity binary buffer for building and parsing wire formats.
//!
//! # Overview
//!
//! - [`ByteBuffer`] - Fixed-length byte storage with a cursor, plus indexed
//!   and cursor-relative readers and writers
//! - [`ByteOrder`] - Per-call byte order selector (big-endian by default)
//! - [`BufferError`] - Range, value and construction errors
//!
//! Supported values are unsigned 8/16/32/64-bit integers, IEEE-754 floats and
//! doubles, raw byte runs and length-prefixed tokens (1- or 2-byte prefix).
//! The buffer never grows: a write past its capacity fails instead.
//!
//! # Example
//!
//! ```
//! use byte_buffer::{ByteBuffer, ByteOrder};
//!
//! // Write some data
//! let mut buf = ByteBuffer::new(32);
//! buf.put(0x01)?
//!     .put_short(0x0203, ByteOrder::BigEndian)?
//!     .put_int(0x0405_0607, ByteOrder::LittleEndian)?
//!     .put_token(b"hello", ByteOrder::BigEndian)?;
//! let data = buf.data().to_vec();
//! assert_eq!(data.len(), 1 + 2 + 4 + 2 + 5);
//!
//! // Read it back
//! let mut reader = ByteBuffer::from_bytes(data);
//! assert_eq!(reader.get()?, 0x01);
//! assert_eq!(reader.get_short(ByteOrder::BigEndian)?, 0x0203);
//! assert_eq!(reader.get_int(ByteOrder::LittleEndian)?, 0x0405_0607);
//! assert_eq!(reader.get_token(ByteOrder::BigEndian)?, b"hello");
//! assert!(!reader.has_remaining());
//! # Ok::<(), byte_buffer::BufferError>(())
//! ```

mod buffer;
mod codec;
mod error;
mod order;
mod read;
mod write;

pub use buffer::ByteBuffer;
pub use error::{BufferError, Result};
pub use order::{is_little_endian, ByteOrder};
