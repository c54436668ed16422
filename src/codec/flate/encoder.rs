use crate::{codec::Encode, util::PartialBuffer};
use std::io::{Error, Result};

use bytes::{Bytes, BytesMut};
use flate2::{Compress, Compression, FlushCompress, Status};

const OUTPUT_BUFFER_SIZE: usize = 8_000;

/// Raw deflate or zlib-wrapped compressor over a [`flate2::Compress`] handle.
#[derive(Debug)]
pub struct FlateEncoder {
    compress: Compress,
}

impl FlateEncoder {
    /// `window_bits` must be in `9..=15`.
    pub fn new(level: Compression, zlib_header: bool, window_bits: u8) -> Self {
        Self {
            compress: Compress::new_with_window_bits(level, zlib_header, window_bits),
        }
    }

    fn do_encode(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
        flush: FlushCompress,
    ) -> Result<Status> {
        let prior_in = self.compress.total_in();
        let prior_out = self.compress.total_out();

        let status = self
            .compress
            .compress(input.unwritten(), output.unwritten_mut(), flush)?;

        input.advance((self.compress.total_in() - prior_in) as usize);
        output.advance((self.compress.total_out() - prior_out) as usize);

        Ok(status)
    }

    /// Feed all of `input` using `flush`, collecting every byte the compressor emits.
    ///
    /// With [`FlushCompress::Finish`] this only returns once the stream has ended.
    pub(crate) fn drain(&mut self, input: &[u8], flush: FlushCompress) -> Result<BytesMut> {
        let finishing = matches!(flush, FlushCompress::Finish);
        let mut input = PartialBuffer::new(input);
        let mut output = BytesMut::new();

        loop {
            let start = output.len();
            output.resize(start + OUTPUT_BUFFER_SIZE, 0);

            let (status, produced) = {
                let mut chunk = PartialBuffer::new(&mut output[start..]);
                let status = self.do_encode(&mut input, &mut chunk, flush)?;
                (status, chunk.written().len())
            };
            output.truncate(start + produced);

            match status {
                Status::StreamEnd => return Ok(output),
                Status::Ok if finishing => {}
                Status::Ok => {
                    // Output space left over after a flush means nothing more is pending.
                    if input.is_exhausted() && produced < OUTPUT_BUFFER_SIZE {
                        return Ok(output);
                    }
                }
                // No progress was possible, for a flush this just means there was nothing to do.
                Status::BufError if !finishing && input.is_exhausted() && produced == 0 => {
                    return Ok(output);
                }
                Status::BufError => return Err(Error::other("unexpected BufError")),
            }
        }
    }
}

impl Encode for FlateEncoder {
    fn encode(&mut self, input: &[u8]) -> Result<Bytes> {
        Ok(self.drain(input, FlushCompress::Sync)?.freeze())
    }

    fn finish(&mut self) -> Result<Bytes> {
        Ok(self.drain(&[], FlushCompress::Finish)?.freeze())
    }

    fn close(self) {
        tracing::trace!(
            total_in = self.compress.total_in(),
            total_out = self.compress.total_out(),
            "releasing flate compressor"
        );
    }
}
