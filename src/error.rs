use std::io;

/// Errors raised while configuring a compressing body.
///
/// Failures while streaming are reported as [`std::io::Error`] instead, this type converts into
/// one with [`io::ErrorKind::InvalidInput`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The window parameter selects no supported format or window size.
    #[error(
        "invalid window bits {0}, expected -15..=-8 (deflate), 8..=15 (compress) or 24..=31 (gzip)"
    )]
    InvalidWindowBits(i32),

    /// The content-coding token names no encoding this crate produces.
    #[error("unknown content encoding {0:?}")]
    UnknownEncoding(String),
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, error)
    }
}
