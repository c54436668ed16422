use std::{
    fmt,
    io::{Error, Result},
    pin::Pin,
    task::{Context, Poll},
};

use bytes::Bytes;
use futures_core::ready;
use pin_project_lite::pin_project;

use crate::{
    body::Body,
    codec::{Encode, Encoder},
    Encoding, Level, ZStream, DEFAULT_LEVEL,
};

pin_project! {
    /// A body emitting the compressed form of another body.
    ///
    /// Every chunk pulled from the inner body is compressed with a sync flush and handed out
    /// straight away, so consumers see output as soon as the source produces it. Once the inner
    /// body ends, one final chunk carries whatever the compressor still buffered and the format
    /// trailer, then the compressor is released and the body yields `None` forever.
    ///
    /// ```
    /// use deflate_body::{body::{BodyExt, Buffered}, Deflate};
    ///
    /// # futures::executor::block_on(async {
    /// let body = Deflate::new(Buffered::new(vec!["hello ", "world"]));
    /// let compressed = body.join().await?;
    /// assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
    /// # std::io::Result::Ok(())
    /// # }).unwrap();
    /// ```
    #[derive(Debug)]
    pub struct Deflate<B, E: Encode> {
        #[pin]
        stream: ZStream<B, E>,
    }
}

impl<B: Body> Deflate<B, Encoder> {
    /// Gzip `body` at [`DEFAULT_LEVEL`].
    pub fn new(body: B) -> Self {
        Self::with_encoding(body, Encoding::Gzip, Level::Precise(DEFAULT_LEVEL))
    }

    /// Compress `body` into the format selected by `window_bits`.
    ///
    /// Accepted values are `-15..=-8` for raw deflate, `8..=15` for zlib and `24..=31` for gzip,
    /// see [`Encoding::classify`].
    pub fn with_window_bits(
        body: B,
        window_bits: i32,
        level: Level,
    ) -> std::result::Result<Self, crate::Error> {
        Ok(Self::with_encoder(body, Encoder::new(window_bits, level)?))
    }

    /// Compress `body` into `encoding` with the largest window.
    pub fn with_encoding(body: B, encoding: Encoding, level: Level) -> Self {
        Self::with_encoder(body, Encoder::from_encoding(encoding, level))
    }
}

impl<B: Body, E: Encode> Deflate<B, E> {
    /// Compress `body` with a caller-supplied compressor.
    pub fn with_encoder(body: B, encoder: E) -> Self {
        Self {
            stream: ZStream::new(body, encoder),
        }
    }

    /// Bytes pulled from the inner body so far.
    pub fn input_size(&self) -> u64 {
        self.stream.input_size()
    }

    /// Compressed bytes emitted so far, including the trailer once finished.
    pub fn output_size(&self) -> u64 {
        self.stream.output_size()
    }

    /// See [`ZStream::ratio`].
    pub fn ratio(&self) -> Option<f64> {
        self.stream.ratio()
    }

    /// Whether the compressor has been released, after which only `None` is produced.
    pub fn is_closed(&self) -> bool {
        self.stream.is_closed()
    }

    /// Acquires a reference to the inner body.
    pub fn get_ref(&self) -> &B {
        self.stream.get_ref()
    }

    /// Acquires a mutable reference to the inner body.
    ///
    /// Note that care must be taken to avoid tampering with the state of the body which may
    /// otherwise confuse this compressor.
    pub fn get_mut(&mut self) -> &mut B {
        self.stream.get_mut()
    }

    /// Acquires a pinned mutable reference to the inner body.
    pub fn get_pin_mut(self: Pin<&mut Self>) -> Pin<&mut B> {
        self.project().stream.get_pin_mut()
    }
}

impl<B: Body, E: Encode> Body for Deflate<B, E> {
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>> {
        let mut stream = self.project().stream;

        loop {
            if stream.is_closed() {
                return Poll::Ready(None);
            }

            let chunk = match ready!(stream.as_mut().poll_pull(cx)) {
                Some(Ok(chunk)) => chunk,
                Some(Err(error)) => {
                    stream.as_mut().close();
                    return Poll::Ready(Some(Err(error)));
                }
                None => {
                    return Poll::Ready(match stream.as_mut().finish() {
                        Ok(output) if output.is_empty() => None,
                        result => Some(result),
                    });
                }
            };

            // Nothing to compress, and a flush would only emit an empty block.
            if chunk.is_empty() {
                continue;
            }

            return Poll::Ready(Some(stream.as_mut().encode(&chunk)));
        }
    }

    fn terminate(self: Pin<&mut Self>, error: &Error) {
        self.project().stream.terminate(error)
    }
}

impl<B, E: Encode> fmt::Display for Deflate<B, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deflate {}", self.stream)
    }
}
