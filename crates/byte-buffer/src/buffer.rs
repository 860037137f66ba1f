//! Fixed-capacity byte storage with cursor tracking.

use tracing::trace;

use crate::{BufferError, Result};

/// A fixed-capacity binary buffer with an internal cursor.
///
/// Storage length is set at construction and never changes. Cursor-relative
/// accessors (`get_int`, `put_int`, ...) advance the cursor by the number of
/// bytes consumed or produced; indexed accessors (`get_int_at`,
/// `put_int_at`, ...) take an explicit offset and leave the cursor alone.
///
/// # Example
///
/// ```
/// use byte_buffer::{ByteBuffer, ByteOrder};
///
/// let mut buf = ByteBuffer::new(16);
/// buf.put(2)?.put_short(0xFEFE, ByteOrder::BigEndian)?;
/// assert_eq!(buf.position(), 3);
/// assert_eq!(buf.data(), &[0x02, 0xFE, 0xFE]);
/// # Ok::<(), byte_buffer::BufferError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    pub(crate) storage: Vec<u8>,
    pub(crate) position: usize,
}

impl ByteBuffer {
    /// Creates a buffer of `capacity` zero bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity],
            position: 0,
        }
    }

    /// Creates a buffer wrapping existing content, positioned at its start.
    pub fn from_bytes(content: impl Into<Vec<u8>>) -> Self {
        Self {
            storage: content.into(),
            position: 0,
        }
    }

    /// Bytes from the start of storage up to the cursor.
    pub fn data(&self) -> &[u8] {
        let end = self.position.min(self.storage.len());
        &self.storage[..end]
    }

    /// The whole storage, regardless of the cursor.
    pub fn as_slice(&self) -> &[u8] {
        &self.storage
    }

    /// Consumes the buffer, returning its storage.
    pub fn into_inner(self) -> Vec<u8> {
        self.storage
    }

    /// Total capacity in bytes.
    pub fn length(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor.
    ///
    /// The position is not checked here. A position past the end is reported
    /// as [`BufferError::OutOfRange`] by the next access that needs it.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Bytes between the cursor and the end of storage.
    pub fn remaining(&self) -> usize {
        self.length().saturating_sub(self.position)
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Checks that `[offset, offset + length)` lies inside storage.
    pub(crate) fn check_range(&self, offset: usize, length: usize) -> Result<()> {
        let capacity = self.storage.len();
        let fits = offset < capacity
            && offset
                .checked_add(length)
                .is_some_and(|end| end <= capacity);
        if fits {
            Ok(())
        } else {
            trace!(offset, length, capacity, "byte range out of bounds");
            Err(BufferError::OutOfRange {
                offset,
                length,
                capacity,
            })
        }
    }

    /// Advances the cursor after a successful cursor-relative operation.
    #[inline]
    pub(crate) fn advance(&mut self, count: usize) {
        self.position += count;
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(content: Vec<u8>) -> Self {
        Self::from_bytes(content)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(content: &[u8]) -> Self {
        Self::from_bytes(content)
    }
}

impl TryFrom<i64> for ByteBuffer {
    type Error = BufferError;

    /// Creates a zero-filled buffer from a signed size.
    fn try_from(size: i64) -> Result<Self> {
        let capacity = usize::try_from(size).map_err(|_| {
            trace!(size, "rejected buffer size");
            BufferError::InvalidArgument(format!(
                "buffer size must be a non-negative integer, got {size}"
            ))
        })?;
        Ok(Self::new(capacity))
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}
