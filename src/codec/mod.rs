//! Compressor strategies driven by [`Deflate`](crate::Deflate).

use std::io::Result;

use bytes::Bytes;

use crate::{
    encoding::{split_window_bits, Encoding, MAX_WINDOW_BITS},
    Error, Level,
};

mod flate;
mod gzip;

pub use self::{flate::FlateEncoder, gzip::GzipEncoder};

/// An incremental compressor.
///
/// Callers feed input with [`encode`](Encode::encode) any number of times, then call
/// [`finish`](Encode::finish) exactly once, then release the compressor with
/// [`close`](Encode::close). Calling `encode` after `finish` is a contract violation and may fail.
pub trait Encode {
    /// Compress `input` and force out every byte derivable so far, without ending the stream.
    ///
    /// The returned bytes may be empty.
    fn encode(&mut self, input: &[u8]) -> Result<Bytes>;

    /// Drain buffered data and append the format trailer, ending the stream.
    fn finish(&mut self) -> Result<Bytes>;

    /// Release the compressor's resources.
    fn close(self)
    where
        Self: Sized,
    {
    }
}

/// The compressor selected by a window parameter.
#[derive(Debug)]
pub enum Encoder {
    /// Raw deflate or zlib-wrapped output.
    Flate(FlateEncoder),
    /// Gzip output.
    Gzip(GzipEncoder),
}

impl Encoder {
    /// Build the compressor for `window_bits`, see [`Encoding::classify`] for how the format is
    /// chosen.
    pub fn new(window_bits: i32, level: Level) -> std::result::Result<Self, Error> {
        let (encoding, bits) = split_window_bits(window_bits)?;
        Ok(Self::build(encoding, bits, level))
    }

    /// Build the compressor for `encoding` with the largest window.
    pub fn from_encoding(encoding: Encoding, level: Level) -> Self {
        Self::build(encoding, MAX_WINDOW_BITS as u8, level)
    }

    fn build(encoding: Encoding, window_bits: u8, level: Level) -> Self {
        let level = level.into_flate2();

        match encoding {
            Encoding::Deflate => Self::Flate(FlateEncoder::new(level, false, window_bits)),
            Encoding::Compress => Self::Flate(FlateEncoder::new(level, true, window_bits)),
            Encoding::Gzip => Self::Gzip(GzipEncoder::new(level, window_bits)),
        }
    }
}

impl Encode for Encoder {
    fn encode(&mut self, input: &[u8]) -> Result<Bytes> {
        match self {
            Self::Flate(encoder) => encoder.encode(input),
            Self::Gzip(encoder) => encoder.encode(input),
        }
    }

    fn finish(&mut self) -> Result<Bytes> {
        match self {
            Self::Flate(encoder) => encoder.finish(),
            Self::Gzip(encoder) => encoder.finish(),
        }
    }

    fn close(self) {
        match self {
            Self::Flate(encoder) => encoder.close(),
            Self::Gzip(encoder) => encoder.close(),
        }
    }
}
