//! Streaming compression for pull-based HTTP message bodies.
//!
//! [`Deflate`] wraps any [`Body`](body::Body) and hands out the compressed form of its chunks as
//! they are pulled, sync-flushing after every chunk so that partial output reaches the client
//! without waiting for the whole body. When the wrapped body ends, one final chunk carries the
//! format trailer and the compressor is released.
//!
//! # Output formats
//!
//! The container format is selected by a zlib-style window parameter, see
//! [`Encoding::classify`]:
//!

//!  Window bits | [`Encoding`] | Output
//! -------------|--------------|-------
//!  `-15..=-8`  | `Deflate`    | raw deflate, `Content-Encoding: deflate`
//!  `8..=15`    | `Compress`   | zlib header and Adler-32 trailer
//!  `24..=31`   | `Gzip`       | gzip header and CRC-32/length trailer, `Content-Encoding: gzip`
//!

//! The magnitude of the window parameter is the window size in bits (`8` is raised to `9`), so the
//! output can be inflated by a decoder limited to that window.
//!
//! # Diagnostics
//!
//! Lifecycle events are reported through [`tracing`]: each compressed chunk at `TRACE`, finishing
//! and early termination at `DEBUG`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations
)]

pub mod body;
pub mod codec;
mod deflate;
mod encoding;
mod error;
mod util;
mod zstream;

pub use crate::{
    deflate::Deflate,
    encoding::{Encoding, DEFAULT_LEVEL, DEFLATE, GZIP, MAX_WINDOW_BITS},
    error::Error,
    zstream::ZStream,
};

/// Level of compression data should be compressed with.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Fastest quality of compression, usually produces bigger size.
    Fastest,
    /// Best quality of compression, usually produces the smallest size.
    Best,
    /// Default quality of compression defined by the backend, `6` for zlib.
    Default,
    /// Precise quality from `0` (stored, no compression) to `9`.
    /// Qualities are implicitly clamped to `9`.
    Precise(u32),
}

impl Default for Level {
    /// [`DEFAULT_LEVEL`], not the backend's own default.
    fn default() -> Self {
        Self::Precise(DEFAULT_LEVEL)
    }
}

impl Level {
    pub(crate) fn into_flate2(self) -> flate2::Compression {
        match self {
            Self::Fastest => flate2::Compression::fast(),
            Self::Best => flate2::Compression::best(),
            Self::Precise(quality) => flate2::Compression::new(std::cmp::min(quality, 9)),
            Self::Default => flate2::Compression::default(),
        }
    }
}
