use crate::codec::{Encode, FlateEncoder};
use std::io::Result;

use bytes::{BufMut, Bytes, BytesMut};
use flate2::{Compression, Crc, FlushCompress};

/// Gzip compressor: a raw deflate stream framed by a gzip header and a CRC-32/length trailer.
#[derive(Debug)]
pub struct GzipEncoder {
    inner: FlateEncoder,
    crc: Crc,
    level: Compression,
    header_written: bool,
}

impl GzipEncoder {
    /// `window_bits` must be in `9..=15`.
    pub fn new(level: Compression, window_bits: u8) -> Self {
        Self {
            inner: FlateEncoder::new(level, false, window_bits),
            crc: Crc::new(),
            level,
            header_written: false,
        }
    }

    fn header(&self) -> [u8; 10] {
        let level_byte = if self.level.level() >= Compression::best().level() {
            0x02
        } else if self.level.level() <= Compression::fast().level() {
            0x04
        } else {
            0x00
        };

        [0x1f, 0x8b, 0x08, 0, 0, 0, 0, 0, level_byte, 0xff]
    }

    fn start(&mut self) -> BytesMut {
        let mut output = BytesMut::new();
        if !self.header_written {
            output.extend_from_slice(&self.header());
            self.header_written = true;
        }
        output
    }
}

impl Encode for GzipEncoder {
    fn encode(&mut self, input: &[u8]) -> Result<Bytes> {
        let mut output = self.start();
        output.unsplit(self.inner.drain(input, FlushCompress::Sync)?);
        self.crc.update(input);
        Ok(output.freeze())
    }

    fn finish(&mut self) -> Result<Bytes> {
        let mut output = self.start();
        output.unsplit(self.inner.drain(&[], FlushCompress::Finish)?);
        output.put_u32_le(self.crc.sum());
        output.put_u32_le(self.crc.amount());
        Ok(output.freeze())
    }

    fn close(self) {
        self.inner.close();
    }
}
