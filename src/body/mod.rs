//! Pull-based HTTP message bodies.
//!
//! A [`Body`] is a lazily produced sequence of [`Bytes`] chunks. Consumers pull one chunk at a
//! time until the body signals its end with `None`, or give up early with
//! [`terminate`](Body::terminate).

use std::{
    io::{Error, Result},
    ops::DerefMut,
    pin::Pin,
    task::{Context, Poll},
};

use bytes::Bytes;

mod buffered;
mod future;
mod stream;
mod wrapper;

pub use self::{
    buffered::Buffered,
    future::{Join, Read},
    stream::{IntoStream, StreamBody},
    wrapper::Wrapper,
};

/// A lazy, single-pass sequence of byte chunks.
pub trait Body {
    /// Attempt to pull the next chunk.
    ///
    /// Returns `Poll::Ready(None)` once the body has ended. After that, or after an error, every
    /// further call should keep returning `Poll::Ready(None)`.
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>>;

    /// Stop producing chunks because the consumer failed or went away.
    ///
    /// Implementations must release any resources they hold and must tolerate being called more
    /// than once, including after the body has ended.
    fn terminate(self: Pin<&mut Self>, error: &Error);

    /// The total number of bytes this body will produce, if known up front.
    fn length(&self) -> Option<u64> {
        None
    }
}

impl<B: Body + Unpin + ?Sized> Body for &mut B {
    fn poll_read(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>> {
        B::poll_read(Pin::new(&mut **self), cx)
    }

    fn terminate(mut self: Pin<&mut Self>, error: &Error) {
        B::terminate(Pin::new(&mut **self), error)
    }

    fn length(&self) -> Option<u64> {
        B::length(&**self)
    }
}

impl<B: Body + Unpin + ?Sized> Body for Box<B> {
    fn poll_read(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>> {
        B::poll_read(Pin::new(&mut **self), cx)
    }

    fn terminate(mut self: Pin<&mut Self>, error: &Error) {
        B::terminate(Pin::new(&mut **self), error)
    }

    fn length(&self) -> Option<u64> {
        B::length(&**self)
    }
}

impl<P> Body for Pin<P>
where
    P: DerefMut + Unpin,
    P::Target: Body,
{
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>> {
        self.get_mut().as_mut().poll_read(cx)
    }

    fn terminate(self: Pin<&mut Self>, error: &Error) {
        self.get_mut().as_mut().terminate(error)
    }

    fn length(&self) -> Option<u64> {
        (**self).length()
    }
}

/// Convenience methods for [`Body`] implementations.
pub trait BodyExt: Body {
    /// Pull the next chunk, resolving to `None` once the body has ended.
    fn read(&mut self) -> Read<'_, Self>
    where
        Self: Unpin,
    {
        Read::new(self)
    }

    /// Pull every remaining chunk and concatenate them.
    fn join(self) -> Join<Self>
    where
        Self: Sized,
    {
        Join::new(self)
    }

    /// Adapt this body into a [`Stream`](futures_core::Stream) of chunks.
    fn into_stream(self) -> IntoStream<Self>
    where
        Self: Sized,
    {
        IntoStream::new(self)
    }

    /// [`Body::poll_read`] on an [`Unpin`] body.
    fn poll_read_unpin(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>>
    where
        Self: Unpin,
    {
        Pin::new(self).poll_read(cx)
    }

    /// [`Body::terminate`] on an [`Unpin`] body.
    fn terminate_unpin(&mut self, error: &Error)
    where
        Self: Unpin,
    {
        Pin::new(self).terminate(error)
    }
}

impl<B: Body + ?Sized> BodyExt for B {}
