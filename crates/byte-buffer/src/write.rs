//! Write accessors.
//!
//! `*_at` variants write at an explicit offset and never touch the cursor.
//! The others write at the cursor and advance it by the bytes written. Values
//! are validated before the byte range, and nothing is written unless both
//! checks pass. Every writer returns the buffer for chaining.

use tracing::trace;

use crate::codec::{split_f64, write_uint};
use crate::{BufferError, ByteBuffer, ByteOrder, Result};

/// Checks that `value` lies in `0..=max` for a field of type `type_name`.
fn validate_uint(
    value: i128,
    max: u64,
    type_name: &'static str,
    notes: Option<&'static str>,
) -> Result<u64> {
    if (0..=max as i128).contains(&value) {
        Ok(value as u64)
    } else {
        trace!(value = %value, type_name, "rejected numeric value");
        Err(BufferError::InvalidValue {
            value: value.to_string(),
            type_name,
            notes,
        })
    }
}

fn validate_finite<F: std::fmt::Display>(
    value: F,
    is_finite: bool,
    type_name: &'static str,
) -> Result<()> {
    if is_finite {
        Ok(())
    } else {
        trace!(value = %value, type_name, "rejected non-finite value");
        Err(BufferError::InvalidValue {
            value: value.to_string(),
            type_name,
            notes: Some(" value must be finite"),
        })
    }
}

impl ByteBuffer {
    /// Validates and encodes an unsigned integer of `count` bytes at `offset`.
    fn put_uint_at(
        &mut self,
        offset: usize,
        count: usize,
        value: u64,
        order: ByteOrder,
    ) -> Result<()> {
        self.check_range(offset, count)?;
        write_uint(&mut self.storage, offset, count, value, order);
        Ok(())
    }

    /// Writes an unsigned byte (`0..=255`).
    pub fn put(&mut self, value: impl Into<i128>) -> Result<&mut Self> {
        self.put_at(self.position, value)?;
        self.advance(1);
        Ok(self)
    }

    pub fn put_at(&mut self, offset: usize, value: impl Into<i128>) -> Result<&mut Self> {
        let value = validate_uint(value.into(), u8::MAX as u64, "byte", None)?;
        self.check_range(offset, 1)?;
        self.storage[offset] = value as u8;
        Ok(self)
    }

    /// Writes an unsigned 16-bit integer (`0..=65535`).
    pub fn put_short(&mut self, value: impl Into<i128>, order: ByteOrder) -> Result<&mut Self> {
        self.put_short_at(self.position, value, order)?;
        self.advance(2);
        Ok(self)
    }

    pub fn put_short_at(
        &mut self,
        offset: usize,
        value: impl Into<i128>,
        order: ByteOrder,
    ) -> Result<&mut Self> {
        let value = validate_uint(value.into(), u16::MAX as u64, "short", None)?;
        self.put_uint_at(offset, 2, value, order)?;
        Ok(self)
    }

    /// Writes an unsigned 32-bit integer (`0..=4294967295`).
    pub fn put_int(&mut self, value: impl Into<i128>, order: ByteOrder) -> Result<&mut Self> {
        self.put_int_at(self.position, value, order)?;
        self.advance(4);
        Ok(self)
    }

    pub fn put_int_at(
        &mut self,
        offset: usize,
        value: impl Into<i128>,
        order: ByteOrder,
    ) -> Result<&mut Self> {
        let value = validate_uint(value.into(), u32::MAX as u64, "uint", None)?;
        self.put_uint_at(offset, 4, value, order)?;
        Ok(self)
    }

    /// Writes an unsigned 64-bit integer.
    pub fn put_long(&mut self, value: impl Into<i128>, order: ByteOrder) -> Result<&mut Self> {
        self.put_long_at(self.position, value, order)?;
        self.advance(8);
        Ok(self)
    }

    pub fn put_long_at(
        &mut self,
        offset: usize,
        value: impl Into<i128>,
        order: ByteOrder,
    ) -> Result<&mut Self> {
        let value = validate_uint(
            value.into(),
            u64::MAX,
            "long",
            Some(" value must fit in an unsigned 64-bit integer"),
        )?;
        self.put_uint_at(offset, 8, value, order)?;
        Ok(self)
    }

    /// Writes a finite IEEE-754 single-precision float.
    pub fn put_float(&mut self, value: f32, order: ByteOrder) -> Result<&mut Self> {
        self.put_float_at(self.position, value, order)?;
        self.advance(4);
        Ok(self)
    }

    pub fn put_float_at(
        &mut self,
        offset: usize,
        value: f32,
        order: ByteOrder,
    ) -> Result<&mut Self> {
        validate_finite(value, value.is_finite(), "float")?;
        self.put_uint_at(offset, 4, value.to_bits() as u64, order)?;
        Ok(self)
    }

    /// Writes a finite IEEE-754 double-precision float.
    pub fn put_double(&mut self, value: f64, order: ByteOrder) -> Result<&mut Self> {
        self.put_double_at(self.position, value, order)?;
        self.advance(8);
        Ok(self)
    }

    /// Writes a double as two 32-bit words.
    ///
    /// The low word goes to `offset` and the high word to `offset + 4`, each
    /// encoded in `order`. The word order is fixed whatever `order` says, so
    /// with [`ByteOrder::BigEndian`] the bytes differ from
    /// `f64::to_be_bytes`. Existing consumers of this layout depend on it.
    pub fn put_double_at(
        &mut self,
        offset: usize,
        value: f64,
        order: ByteOrder,
    ) -> Result<&mut Self> {
        validate_finite(value, value.is_finite(), "double")?;
        self.check_range(offset, 8)?;
        let (low, high) = split_f64(value);
        write_uint(&mut self.storage, offset, 4, low as u64, order);
        write_uint(&mut self.storage, offset + 4, 4, high as u64, order);
        Ok(self)
    }

    /// Writes raw bytes.
    pub fn put_bytes(&mut self, value: &[u8]) -> Result<&mut Self> {
        self.put_bytes_at(self.position, value)?;
        self.advance(value.len());
        Ok(self)
    }

    pub fn put_bytes_at(&mut self, offset: usize, value: &[u8]) -> Result<&mut Self> {
        self.check_range(offset, value.len())?;
        self.storage[offset..offset + value.len()].copy_from_slice(value);
        Ok(self)
    }

    /// Writes a token with a 16-bit length prefix.
    ///
    /// Advances the cursor by `2 + token.len()`.
    pub fn put_token(&mut self, token: &[u8], order: ByteOrder) -> Result<&mut Self> {
        self.put_token_at(self.position, token, order)?;
        self.advance(2 + token.len());
        Ok(self)
    }

    pub fn put_token_at(
        &mut self,
        offset: usize,
        token: &[u8],
        order: ByteOrder,
    ) -> Result<&mut Self> {
        let len = validate_uint(token.len() as i128, u16::MAX as u64, "short", None)?;
        self.check_range(offset, 2 + token.len())?;
        write_uint(&mut self.storage, offset, 2, len, order);
        self.storage[offset + 2..offset + 2 + token.len()].copy_from_slice(token);
        Ok(self)
    }

    /// Writes a token with an 8-bit length prefix.
    ///
    /// Advances the cursor by `1 + token.len()`.
    pub fn put_token_byte(&mut self, token: &[u8]) -> Result<&mut Self> {
        self.put_token_byte_at(self.position, token)?;
        self.advance(1 + token.len());
        Ok(self)
    }

    pub fn put_token_byte_at(&mut self, offset: usize, token: &[u8]) -> Result<&mut Self> {
        let len = validate_uint(token.len() as i128, u8::MAX as u64, "byte", None)?;
        self.check_range(offset, 1 + token.len())?;
        self.storage[offset] = len as u8;
        self.storage[offset + 1..offset + 1 + token.len()].copy_from_slice(token);
        Ok(self)
    }
}
