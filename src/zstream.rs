use std::{
    fmt,
    io::{Error, Result},
    pin::Pin,
    task::{Context, Poll},
};

use bytes::Bytes;
use pin_project_lite::pin_project;

use crate::{
    body::{Body, Wrapper},
    codec::Encode,
};

/// Exclusive owner of a compressor, releasing it exactly once.
///
/// `None` is the closed state. Dropping an open compressor releases it as well.
#[derive(Debug)]
struct Compressor<E: Encode>(Option<E>);

impl<E: Encode> Compressor<E> {
    fn get_mut(&mut self) -> Result<&mut E> {
        self.0
            .as_mut()
            .ok_or_else(|| Error::other("compressor used after it was closed"))
    }

    fn is_closed(&self) -> bool {
        self.0.is_none()
    }

    /// Returns whether this call performed the release.
    fn close(&mut self) -> bool {
        match self.0.take() {
            Some(encoder) => {
                encoder.close();
                true
            }
            None => false,
        }
    }
}

impl<E: Encode> Drop for Compressor<E> {
    fn drop(&mut self) {
        self.close();
    }
}

pin_project! {
    /// A body being passed through a compressor.
    ///
    /// Tracks how many bytes went into and came out of the compressor and owns the compressor
    /// itself, releasing it on whichever comes first of finishing, [`terminate`](Self::terminate)
    /// or being dropped.
    #[derive(Debug)]
    pub struct ZStream<B, E: Encode> {
        #[pin]
        inner: Wrapper<B>,
        compressor: Compressor<E>,
        input_size: u64,
        output_size: u64,
    }
}

impl<B, E: Encode> ZStream<B, E> {
    /// Pass `body` through `encoder`.
    pub fn new(body: B, encoder: E) -> Self {
        Self {
            inner: Wrapper::new(body),
            compressor: Compressor(Some(encoder)),
            input_size: 0,
            output_size: 0,
        }
    }

    /// Bytes pulled from the inner body so far.
    pub fn input_size(&self) -> u64 {
        self.input_size
    }

    /// Bytes emitted by the compressor so far, including the trailer once finished.
    pub fn output_size(&self) -> u64 {
        self.output_size
    }

    /// `output_size / input_size`, or `None` until some input has been consumed.
    pub fn ratio(&self) -> Option<f64> {
        if self.input_size == 0 {
            None
        } else {
            Some(self.output_size as f64 / self.input_size as f64)
        }
    }

    /// Whether the compressor has been released.
    pub fn is_closed(&self) -> bool {
        self.compressor.is_closed()
    }

    /// Acquires a reference to the inner body.
    pub fn get_ref(&self) -> &B {
        self.inner.get_ref()
    }

    /// Acquires a mutable reference to the inner body.
    pub fn get_mut(&mut self) -> &mut B {
        self.inner.get_mut()
    }

    /// Acquires a pinned mutable reference to the inner body.
    pub fn get_pin_mut(self: Pin<&mut Self>) -> Pin<&mut B> {
        self.project().inner.get_pin_mut()
    }

    /// Release the compressor and terminate the inner body.
    ///
    /// Releasing happens at most once, so this may be called repeatedly and after the stream
    /// has finished, the inner body sees every call.
    pub fn terminate(self: Pin<&mut Self>, error: &Error)
    where
        B: Body,
    {
        let this = self.project();
        if this.compressor.close() {
            tracing::debug!(%error, input_size = *this.input_size, "compressed body terminated");
        }
        this.inner.terminate(error);
    }

    pub(crate) fn poll_pull(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Bytes>>>
    where
        B: Body,
    {
        self.project().inner.poll_read(cx)
    }

    /// Feed `chunk` to the compressor, the compressor is released if this fails.
    pub(crate) fn encode(self: Pin<&mut Self>, chunk: &[u8]) -> Result<Bytes> {
        let this = self.project();
        let encoder = this.compressor.get_mut()?;

        *this.input_size += chunk.len() as u64;

        match encoder.encode(chunk) {
            Ok(output) => {
                *this.output_size += output.len() as u64;
                tracing::trace!(input = chunk.len(), output = output.len(), "compressed chunk");
                Ok(output)
            }
            Err(error) => {
                this.compressor.close();
                Err(error)
            }
        }
    }

    /// Finish the compressor and release it, whether or not finishing succeeds.
    pub(crate) fn finish(self: Pin<&mut Self>) -> Result<Bytes> {
        let this = self.project();
        let result = this.compressor.get_mut().and_then(|encoder| encoder.finish());
        this.compressor.close();

        let output = result?;
        *this.output_size += output.len() as u64;
        tracing::debug!(
            input_size = *this.input_size,
            output_size = *this.output_size,
            "compressed body finished"
        );

        Ok(output)
    }

    pub(crate) fn close(self: Pin<&mut Self>) {
        self.project().compressor.close();
    }
}

impl<B, E: Encode> fmt::Display for ZStream<B, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} bytes", self.input_size, self.output_size)?;
        match self.ratio() {
            Some(ratio) => write!(f, " ({:.2}%)", ratio * 100.0),
            None => f.write_str(" (n/a)"),
        }
    }
}
