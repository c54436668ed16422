use std::{fmt, str::FromStr};

use crate::Error;

/// Largest window size, in bits, supported by deflate.
pub const MAX_WINDOW_BITS: i32 = 15;

/// Window parameter producing a raw deflate stream with the largest window.
pub const DEFLATE: i32 = -MAX_WINDOW_BITS;

/// Window parameter producing a gzip stream with the largest window.
pub const GZIP: i32 = MAX_WINDOW_BITS | 16;

/// Compression level used when none is given.
pub const DEFAULT_LEVEL: u32 = 7;

/// The container format a window parameter selects.
///
/// An encoding is never stored alongside a stream, it is always recomputed from the window
/// parameter with [`Encoding::classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Raw deflate data without any framing, `Content-Encoding: deflate`.
    Deflate,
    /// Deflate data wrapped in a zlib header and Adler-32 trailer.
    Compress,
    /// Deflate data wrapped in a gzip header and CRC-32/length trailer, `Content-Encoding: gzip`.
    Gzip,
}

impl Encoding {
    /// Classify a window parameter by its sign and magnitude.
    ///
    /// Negative parameters of magnitude 8 or more select raw deflate, parameters of 16 or more
    /// select gzip, and everything in between selects the zlib wrapper.
    pub const fn classify(window_bits: i32) -> Self {
        if window_bits <= -8 {
            Self::Deflate
        } else if window_bits >= 16 {
            Self::Gzip
        } else {
            Self::Compress
        }
    }

    /// The content-coding token for this encoding.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deflate => "deflate",
            Self::Compress => "compress",
            Self::Gzip => "gzip",
        }
    }

    /// Look up an encoding by its content-coding token, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Deflate, Self::Compress, Self::Gzip]
            .iter()
            .copied()
            .find(|encoding| encoding.name().eq_ignore_ascii_case(name.trim()))
    }

    /// The canonical window parameter producing this encoding with the largest window.
    pub const fn window_bits(self) -> i32 {
        match self {
            Self::Deflate => DEFLATE,
            Self::Compress => MAX_WINDOW_BITS,
            Self::Gzip => GZIP,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownEncoding(s.to_owned()))
    }
}

/// Split a window parameter into its encoding and the window size in bits.
///
/// Only parameters a compressor can be configured with are accepted, `8` is raised to `9` as
/// zlib does.
pub(crate) fn split_window_bits(window_bits: i32) -> Result<(Encoding, u8), Error> {
    let bits = match window_bits {
        -15..=-8 => -window_bits,
        8..=15 => window_bits,
        24..=31 => window_bits - 16,
        _ => return Err(Error::InvalidWindowBits(window_bits)),
    };

    Ok((Encoding::classify(window_bits), bits.max(9) as u8))
}
