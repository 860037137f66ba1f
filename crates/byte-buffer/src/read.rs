//! Read accessors.
//!
//! `*_at` variants read at an explicit offset and never touch the cursor.
//! The others read at the cursor and advance it by the bytes consumed; on
//! error the cursor stays where it was.

use crate::codec::{join_f64, read_uint};
use crate::{ByteBuffer, ByteOrder, Result};

impl ByteBuffer {
    /// Decodes a `count`-byte unsigned integer at `offset`.
    fn read_int(&self, offset: usize, count: usize, order: ByteOrder) -> Result<u64> {
        self.check_range(offset, count)?;
        Ok(read_uint(&self.storage, offset, count, order))
    }

    /// Reads an unsigned byte.
    pub fn get(&mut self) -> Result<u8> {
        let val = self.get_at(self.position)?;
        self.advance(1);
        Ok(val)
    }

    /// Reads an unsigned byte at `index`.
    pub fn get_at(&self, index: usize) -> Result<u8> {
        self.check_range(index, 1)?;
        Ok(self.storage[index])
    }

    /// Reads an unsigned 16-bit integer.
    pub fn get_short(&mut self, order: ByteOrder) -> Result<u16> {
        let val = self.get_short_at(self.position, order)?;
        self.advance(2);
        Ok(val)
    }

    pub fn get_short_at(&self, index: usize, order: ByteOrder) -> Result<u16> {
        Ok(self.read_int(index, 2, order)? as u16)
    }

    /// Reads an unsigned 32-bit integer.
    pub fn get_int(&mut self, order: ByteOrder) -> Result<u32> {
        let val = self.get_int_at(self.position, order)?;
        self.advance(4);
        Ok(val)
    }

    pub fn get_int_at(&self, index: usize, order: ByteOrder) -> Result<u32> {
        Ok(self.read_int(index, 4, order)? as u32)
    }

    /// Reads an unsigned 64-bit integer.
    pub fn get_long(&mut self, order: ByteOrder) -> Result<u64> {
        let val = self.get_long_at(self.position, order)?;
        self.advance(8);
        Ok(val)
    }

    pub fn get_long_at(&self, index: usize, order: ByteOrder) -> Result<u64> {
        self.read_int(index, 8, order)
    }

    /// Reads an IEEE-754 single-precision float.
    pub fn get_float(&mut self, order: ByteOrder) -> Result<f32> {
        let val = self.get_float_at(self.position, order)?;
        self.advance(4);
        Ok(val)
    }

    pub fn get_float_at(&self, index: usize, order: ByteOrder) -> Result<f32> {
        Ok(f32::from_bits(self.get_int_at(index, order)?))
    }

    /// Reads an IEEE-754 double-precision float.
    pub fn get_double(&mut self, order: ByteOrder) -> Result<f64> {
        let val = self.get_double_at(self.position, order)?;
        self.advance(8);
        Ok(val)
    }

    /// Reads a double stored as two 32-bit words, low word first.
    ///
    /// Each word is decoded in `order`. The word order itself does not follow
    /// `order`; see [`put_double_at`](ByteBuffer::put_double_at).
    pub fn get_double_at(&self, index: usize, order: ByteOrder) -> Result<f64> {
        self.check_range(index, 8)?;
        let low = read_uint(&self.storage, index, 4, order) as u32;
        let high = read_uint(&self.storage, index + 4, 4, order) as u32;
        Ok(join_f64(low, high))
    }

    /// Reads `count` raw bytes.
    pub fn get_bytes(&mut self, count: usize) -> Result<&[u8]> {
        let start = self.position;
        self.check_range(start, count)?;
        self.advance(count);
        Ok(&self.storage[start..start + count])
    }

    /// Reads `count` raw bytes at `index`.
    pub fn get_bytes_at(&self, index: usize, count: usize) -> Result<&[u8]> {
        self.check_range(index, count)?;
        Ok(&self.storage[index..index + count])
    }

    /// Reads a token with a 16-bit length prefix.
    ///
    /// Advances the cursor by `2 + len`.
    pub fn get_token(&mut self, order: ByteOrder) -> Result<&[u8]> {
        let start = self.position;
        let len = self.token_span(start, 2, order)?;
        self.advance(2 + len);
        Ok(&self.storage[start + 2..start + 2 + len])
    }

    pub fn get_token_at(&self, index: usize, order: ByteOrder) -> Result<&[u8]> {
        let len = self.token_span(index, 2, order)?;
        Ok(&self.storage[index + 2..index + 2 + len])
    }

    /// Reads a token with an 8-bit length prefix.
    ///
    /// Advances the cursor by `1 + len`.
    pub fn get_token_byte(&mut self) -> Result<&[u8]> {
        let start = self.position;
        let len = self.token_span(start, 1, ByteOrder::BigEndian)?;
        self.advance(1 + len);
        Ok(&self.storage[start + 1..start + 1 + len])
    }

    pub fn get_token_byte_at(&self, index: usize) -> Result<&[u8]> {
        let len = self.token_span(index, 1, ByteOrder::BigEndian)?;
        Ok(&self.storage[index + 1..index + 1 + len])
    }

    /// Reads a token's length prefix and checks that the whole token fits.
    fn token_span(&self, index: usize, prefix: usize, order: ByteOrder) -> Result<usize> {
        let len = self.read_int(index, prefix, order)? as usize;
        self.check_range(index, prefix + len)?;
        Ok(len)
    }
}
