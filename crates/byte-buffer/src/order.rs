//! Byte order selection.

/// Byte order of a multi-byte value.
///
/// Always passed explicitly per call; the buffer never infers it from the
/// host. The default is big-endian (network order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Most significant byte first.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Network byte order.
    pub const NETWORK: ByteOrder = ByteOrder::BigEndian;

    /// Byte order of the running platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::LittleEndian;
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::BigEndian;

    /// Maps an "is big endian" flag to a byte order.
    pub fn from_big_endian(is_big_endian: bool) -> Self {
        if is_big_endian {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    #[inline]
    pub fn is_big_endian(self) -> bool {
        self == ByteOrder::BigEndian
    }

    #[inline]
    pub fn is_little_endian(self) -> bool {
        self == ByteOrder::LittleEndian
    }
}

impl From<bool> for ByteOrder {
    fn from(is_big_endian: bool) -> Self {
        Self::from_big_endian(is_big_endian)
    }
}

/// Returns `true` when the running platform is little-endian.
///
/// Useful for protocol negotiation; buffer operations never consult it.
///
/// # Example
///
/// ```
/// use byte_buffer::{is_little_endian, ByteOrder};
///
/// assert_eq!(is_little_endian(), ByteOrder::NATIVE == ByteOrder::LittleEndian);
/// ```
pub fn is_little_endian() -> bool {
    u16::from_ne_bytes([0x01, 0x00]) == 1
}
