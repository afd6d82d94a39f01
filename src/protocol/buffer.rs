//! Buffer utilities for reading and writing fixed-width wire values.

use crate::error::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};

/// Byte order of multi-byte integers on the wire.
///
/// Fixed for the lifetime of a session; the network protocol is big-endian,
/// native client buffers use the platform order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the current platform.
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }
}

/// Check that `data` holds exactly `expected` bytes for `type_name`.
pub fn expect_len(data: &[u8], expected: usize, type_name: &'static str) -> Result<()> {
    if data.len() != expected {
        return Err(Error::DecodeLength {
            type_name,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// A cursor for reading fixed-width values from a column buffer.
pub struct ReadBuffer<'a> {
    data: &'a [u8],
    pos: usize,
    order: ByteOrder,
    type_name: &'static str,
}

impl<'a> ReadBuffer<'a> {
    /// Create a read buffer over `data`, which must be exactly `expected` bytes.
    pub fn exact(
        data: &'a [u8],
        expected: usize,
        order: ByteOrder,
        type_name: &'static str,
    ) -> Result<Self> {
        expect_len(data, expected, type_name)?;
        Ok(Self {
            data,
            pos: 0,
            order,
            type_name,
        })
    }

    /// Get the remaining bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        if self.remaining() < N {
            return Err(Error::DecodeLength {
                type_name: self.type_name,
                expected: self.pos + N,
                actual: self.data.len(),
            });
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(bytes)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    /// Read a u16 in session byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take::<2>()?;
        Ok(match self.order {
            ByteOrder::BigEndian => u16::from_be_bytes(b),
            ByteOrder::LittleEndian => u16::from_le_bytes(b),
        })
    }

    /// Read an i16 in session byte order.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Read an i32 in session byte order.
    pub fn read_i32(&mut self) -> Result<i32> {
        let b = self.take::<4>()?;
        Ok(match self.order {
            ByteOrder::BigEndian => i32::from_be_bytes(b),
            ByteOrder::LittleEndian => i32::from_le_bytes(b),
        })
    }

    /// Read an i64 in session byte order.
    pub fn read_i64(&mut self) -> Result<i64> {
        let b = self.take::<8>()?;
        Ok(match self.order {
            ByteOrder::BigEndian => i64::from_be_bytes(b),
            ByteOrder::LittleEndian => i64::from_le_bytes(b),
        })
    }
}

/// A buffer for building a column value in wire layout.
pub struct WriteBuffer {
    data: BytesMut,
    order: ByteOrder,
}

impl WriteBuffer {
    /// Create a new write buffer with the specified capacity.
    pub fn with_capacity(capacity: usize, order: ByteOrder) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
            order,
        }
    }

    /// Get the current length of the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Freeze the buffer into immutable bytes.
    pub fn freeze(self) -> Bytes {
        self.data.freeze()
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, val: u8) {
        self.data.put_u8(val);
    }

    /// Write a u16 in session byte order.
    pub fn write_u16(&mut self, val: u16) {
        match self.order {
            ByteOrder::BigEndian => self.data.put_u16(val),
            ByteOrder::LittleEndian => self.data.put_u16_le(val),
        }
    }

    /// Write an i16 in session byte order.
    pub fn write_i16(&mut self, val: i16) {
        self.write_u16(val as u16);
    }

    /// Write an i32 in session byte order.
    pub fn write_i32(&mut self, val: i32) {
        match self.order {
            ByteOrder::BigEndian => self.data.put_i32(val),
            ByteOrder::LittleEndian => self.data.put_i32_le(val),
        }
    }

    /// Write an i64 in session byte order.
    pub fn write_i64(&mut self, val: i64) {
        match self.order {
            ByteOrder::BigEndian => self.data.put_i64(val),
            ByteOrder::LittleEndian => self.data.put_i64_le(val),
        }
    }
}
