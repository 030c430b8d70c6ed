use crate::error::Result;
use std::io::Write;

/// Bit-level writer over a byte sink.
///
/// Bits are packed MSB-first within each byte, matching [`BitReader`]'s read
/// order.
///
/// [`BitReader`]: crate::bits::BitReader
pub struct BitWriter<W: Write> {
    inner: W,
    /// Current byte being built, right-aligned
    current_byte: u8,
    /// Bits written to current byte (0-7)
    bits_in_byte: u8,
    /// Complete bytes handed to the inner writer
    bytes_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, current_byte: 0, bits_in_byte: 0, bytes_written: 0 }
    }

    /// Write the low `n` bits of `value` (n <= 32), MSB-first.
    pub fn write_bits(&mut self, value: u32, n: u8) -> Result<()> {
        debug_assert!(n <= 32, "cannot write more than 32 bits at once");

        let mut remaining = n;
        while remaining > 0 {
            let space = 8 - self.bits_in_byte;
            let to_write = remaining.min(space);

            let chunk = (value >> (remaining - to_write)) & ((1u32 << to_write) - 1);
            // u16 intermediate: to_write can be a full 8 when the byte is empty
            self.current_byte = ((u16::from(self.current_byte) << to_write) | chunk as u16) as u8;
            self.bits_in_byte += to_write;
            remaining -= to_write;

            if self.bits_in_byte == 8 {
                self.flush_byte()?;
            }
        }
        Ok(())
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u32, 1)
    }

    /// Output size in bytes so far, the pending partial byte included.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written + u64::from(self.bits_in_byte > 0)
    }

    /// Pad the trailing partial byte with zero bits, flush, and return the
    /// inner writer.
    pub fn finish(mut self) -> Result<W> {
        if self.bits_in_byte > 0 {
            self.current_byte <<= 8 - self.bits_in_byte;
            self.bits_in_byte = 8;
            self.flush_byte()?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn flush_byte(&mut self) -> Result<()> {
        self.inner.write_all(&[self.current_byte])?;
        self.current_byte = 0;
        self.bits_in_byte = 0;
        self.bytes_written += 1;
        Ok(())
    }
}
