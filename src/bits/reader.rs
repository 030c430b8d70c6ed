use crate::error::{Error, Result};
use std::io::{Read, Seek, SeekFrom};

/// Bit-level reader over a byte stream.
///
/// Bits are delivered MSB-first within each byte: the first bit read from a
/// byte is its high bit.
pub struct BitReader<R> {
    inner: R,
    /// Buffer holding up to 64 bits, right-aligned; the next bit to deliver
    /// is bit `bits_available - 1`.
    buffer: u64,
    /// Number of valid bits in buffer (0-64)
    bits_available: u8,
    /// Total bytes consumed from the inner reader
    bytes_read: u64,
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, buffer: 0, bits_available: 0, bytes_read: 0 }
    }

    /// Top up the buffer until `n` bits are available or the stream ends.
    ///
    /// Returns the number of bits available afterwards, which is less than
    /// `n` only at end of data.
    fn fill_buffer(&mut self, n: u8) -> Result<u8> {
        while self.bits_available < n {
            let mut byte = [0u8; 1];
            match self.inner.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    self.buffer = (self.buffer << 8) | u64::from(byte[0]);
                    self.bits_available += 8;
                    self.bytes_read += 1;
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                    // Retry on interrupt
                }
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Ok(self.bits_available)
    }

    /// Read `n` bits (n <= 32) MSB-first and return them as an unsigned
    /// integer.
    ///
    /// Returns `Ok(None)` when fewer than `n` bits remain in the stream.
    pub fn read_bits(&mut self, n: u8) -> Result<Option<u32>> {
        debug_assert!(n <= 32, "cannot read more than 32 bits at once");

        if n == 0 {
            return Ok(Some(0));
        }

        if self.fill_buffer(n)? < n {
            return Ok(None);
        }

        self.bits_available -= n;
        let mask = (1u64 << n) - 1;
        Ok(Some(((self.buffer >> self.bits_available) & mask) as u32))
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        Ok(self.read_bits(1)?.map(|b| b != 0))
    }

    /// Get total bytes consumed from the inner reader
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Get the inner reader (consumes self)
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> BitReader<R> {
    /// Rewind to the start of the underlying data and discard buffered bits.
    ///
    /// Required by the compressor, which scans its source twice.
    pub fn reset(&mut self) -> Result<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        self.buffer = 0;
        self.bits_available = 0;
        self.bytes_read = 0;
        Ok(())
    }
}
