// src/field.rs
//! Fixed-width scalar fields in a caller-owned byte slice.
//!
//! This is the seam between the conversion functions and a binary protocol
//! codec: a value is converted to wire order and copied into exactly its own
//! span of the buffer, or copied out of that span and converted back. Buffer
//! growth and I/O stay with the codec.

use std::mem;
use std::ops::Range;

use crate::convert::WireInt;
use crate::error::{Result, WireError};

fn field_span(available: usize, offset: usize, needed: usize) -> Result<Range<usize>> {
    match offset.checked_add(needed) {
        Some(end) if end <= available => Ok(offset..end),
        _ => {
            log::debug!(
                "field of {} bytes at offset {} does not fit buffer of {} bytes",
                needed,
                offset,
                available
            );
            Err(WireError::BufferTooShort {
                offset,
                needed,
                available,
            })
        }
    }
}

/// Write `value` in wire order at `offset`.
///
/// Touches exactly `size_of::<T>()` bytes and returns the offset just past
/// them. On error the buffer is left unchanged.
pub fn write_int<T: WireInt>(buf: &mut [u8], offset: usize, value: T) -> Result<usize> {
    let span = field_span(buf.len(), offset, mem::size_of::<T>())?;
    let end = span.end;
    let wire = value.to_wire();
    buf[span].copy_from_slice(bytemuck::bytes_of(&wire));
    Ok(end)
}

/// Read a wire-order integer at `offset` and return it in host order.
pub fn read_int<T: WireInt>(buf: &[u8], offset: usize) -> Result<T> {
    let span = field_span(buf.len(), offset, mem::size_of::<T>())?;
    let mut wire = <T as bytemuck::Zeroable>::zeroed();
    bytemuck::bytes_of_mut(&mut wire).copy_from_slice(&buf[span]);
    Ok(wire.from_wire())
}

/// Sequential writer of wire scalars into a borrowed slice.
///
/// # Example
///
/// ```
/// use wire_endian::FieldWriter;
///
/// let mut buf = [0u8; 6];
/// let mut writer = FieldWriter::new(&mut buf);
/// writer.write_i16(12345).unwrap();
/// writer.write_i32(1234567890).unwrap();
///
/// assert_eq!(writer.position(), 6);
/// assert_eq!(buf, [0x30, 0x39, 0x49, 0x96, 0x02, 0xd2]);
/// ```
pub struct FieldWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> FieldWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        FieldWriter { buf, pos: 0 }
    }

    /// Bytes written so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes still available
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn write_byte(&mut self, byte: u8) -> Result<()> {
        let span = field_span(self.buf.len(), self.pos, 1)?;
        self.buf[span.start] = byte;
        self.pos = span.end;
        Ok(())
    }

    /// Write any wire integer, advancing past it
    pub fn write_int<T: WireInt>(&mut self, value: T) -> Result<()> {
        self.pos = write_int(self.buf, self.pos, value)?;
        Ok(())
    }

    /// Write a bool as a single `1` or `0` byte
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_byte(u8::from(value))
    }

    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_byte(value as u8)
    }

    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_int(value)
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_int(value)
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_int(value)
    }

    /// Write an f64 as its IEEE-754 bit pattern in wire order
    pub fn write_double(&mut self, value: f64) -> Result<()> {
        self.write_int(value.to_bits())
    }
}

/// Sequential reader of wire scalars from a borrowed slice.
pub struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        FieldReader { buf, pos: 0 }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn read_byte(&mut self) -> Result<u8> {
        let span = field_span(self.buf.len(), self.pos, 1)?;
        self.pos = span.end;
        Ok(self.buf[span.start])
    }

    /// Read any wire integer, advancing past it
    pub fn read_int<T: WireInt>(&mut self) -> Result<T> {
        let value = read_int(self.buf, self.pos)?;
        self.pos += mem::size_of::<T>();
        Ok(value)
    }

    /// Any non-zero byte reads as `true`
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_byte()? != 0)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_byte()? as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_int()
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_int()
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_int()
    }

    pub fn read_double(&mut self) -> Result<f64> {
        self.read_int::<u64>().map(f64::from_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_int_returns_next_offset() {
        let mut buf = [0u8; 8];
        let next = write_int(&mut buf, 2, 0x0102_0304u32).unwrap();
        assert_eq!(next, 6);
        assert_eq!(buf, [0, 0, 1, 2, 3, 4, 0, 0]);
    }

    #[test]
    fn test_read_int_at_offset() {
        let buf = [0xAA, 0x01, 0x02, 0xBB];
        assert_eq!(read_int::<u16>(&buf, 1).unwrap(), 0x0102);
        assert_eq!(read_int::<i16>(&buf, 0).unwrap(), 0xAA01u16 as i16);
    }

    #[test]
    fn test_out_of_range_is_reported() {
        let mut buf = [0u8; 3];
        let err = write_int(&mut buf, 0, 7u32).unwrap_err();
        assert_eq!(
            err,
            WireError::BufferTooShort {
                offset: 0,
                needed: 4,
                available: 3
            }
        );
        assert_eq!(buf, [0, 0, 0]);

        assert!(read_int::<u64>(&buf, usize::MAX).is_err());
    }

    #[test]
    fn test_writer_failure_keeps_position() {
        let mut buf = [0u8; 5];
        let mut writer = FieldWriter::new(&mut buf);
        writer.write_i32(-1).unwrap();
        assert!(writer.write_i16(1).is_err());
        assert_eq!(writer.position(), 4);
        assert_eq!(writer.remaining(), 1);
        writer.write_bool(true).unwrap();
        assert_eq!(writer.remaining(), 0);
    }

    #[test]
    fn test_reader_roundtrip_scalars() {
        let mut buf = [0u8; 24];
        {
            let mut writer = FieldWriter::new(&mut buf);
            writer.write_bool(true).unwrap();
            writer.write_i8(-5).unwrap();
            writer.write_i16(-300).unwrap();
            writer.write_i32(i32::MIN).unwrap();
            writer.write_i64(-1_234_567_890_123).unwrap();
            writer.write_double(-0.5).unwrap();
            assert_eq!(writer.position(), 24);
        }

        let mut reader = FieldReader::new(&buf);
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_i8().unwrap(), -5);
        assert_eq!(reader.read_i16().unwrap(), -300);
        assert_eq!(reader.read_i32().unwrap(), i32::MIN);
        assert_eq!(reader.read_i64().unwrap(), -1_234_567_890_123);
        assert_eq!(reader.read_double().unwrap(), -0.5);
        assert_eq!(reader.remaining(), 0);
        assert!(reader.read_i8().is_err());
    }

    #[test]
    fn test_nonzero_byte_reads_true() {
        let buf = [0x00, 0x02, 0xFF];
        let mut reader = FieldReader::new(&buf);
        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
    }
}
