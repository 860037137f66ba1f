//! Unsigned integer codec shared by the numeric accessors.
//!
//! Callers validate the byte range beforehand; these helpers index the slice
//! directly.

use crate::ByteOrder;

/// Decodes `count` bytes at `offset` as an unsigned integer.
///
/// Each byte is OR-ed in at its positional bit offset. Big-endian takes the
/// most significant byte from `offset`, little-endian the least significant.
#[inline]
pub(crate) fn read_uint(bytes: &[u8], offset: usize, count: usize, order: ByteOrder) -> u64 {
    let mut r = 0u64;
    for i in 0..count {
        let byte = match order {
            ByteOrder::BigEndian => bytes[offset + count - 1 - i],
            ByteOrder::LittleEndian => bytes[offset + i],
        };
        r |= (byte as u64) << (i * 8);
    }
    r
}

/// Encodes the low `count` bytes of `value` at `offset`.
#[inline]
pub(crate) fn write_uint(
    bytes: &mut [u8],
    offset: usize,
    count: usize,
    value: u64,
    order: ByteOrder,
) {
    for i in 0..count {
        let byte = (value >> (i * 8)) as u8;
        match order {
            ByteOrder::BigEndian => bytes[offset + count - 1 - i] = byte,
            ByteOrder::LittleEndian => bytes[offset + i] = byte,
        }
    }
}

/// Splits a double into its `(low, high)` 32-bit words.
#[inline]
pub(crate) fn split_f64(value: f64) -> (u32, u32) {
    let bits = value.to_bits();
    (bits as u32, (bits >> 32) as u32)
}

/// Joins `(low, high)` 32-bit words back into a double.
#[inline]
pub(crate) fn join_f64(low: u32, high: u32) -> f64 {
    f64::from_bits(((high as u64) << 32) | low as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_uint_orders() {
        let data = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(read_uint(&data, 0, 2, ByteOrder::BigEndian), 0x0102);
        assert_eq!(read_uint(&data, 0, 2, ByteOrder::LittleEndian), 0x0201);
        assert_eq!(read_uint(&data, 1, 3, ByteOrder::BigEndian), 0x020304);
        assert_eq!(read_uint(&data, 0, 4, ByteOrder::LittleEndian), 0x04030201);
    }

    #[test]
    fn test_read_uint_full_width() {
        let data = [0xFF; 8];
        assert_eq!(read_uint(&data, 0, 8, ByteOrder::BigEndian), u64::MAX);
    }

    #[test]
    fn test_write_uint_orders() {
        let mut data = [0u8; 6];
        write_uint(&mut data, 0, 2, 0x0102, ByteOrder::BigEndian);
        write_uint(&mut data, 2, 4, 0x0A0B0C0D, ByteOrder::LittleEndian);
        assert_eq!(data, [0x01, 0x02, 0x0D, 0x0C, 0x0B, 0x0A]);
    }

    #[test]
    fn test_write_uint_truncates_to_count() {
        let mut data = [0u8; 2];
        write_uint(&mut data, 0, 2, 0x01_0203, ByteOrder::BigEndian);
        assert_eq!(data, [0x02, 0x03]);
    }

    #[test]
    fn test_split_join_f64() {
        let (low, high) = split_f64(1.0);
        assert_eq!(low, 0);
        assert_eq!(high, 0x3FF0_0000);
        assert_eq!(join_f64(low, high), 1.0);
    }
}
