use std::{
    io::{Error, Result},
    pin::Pin,
    task::{Context, Poll},
};

use bytes::Bytes;
use futures_core::stream::Stream;
use pin_project_lite::pin_project;

use super::Body;

pin_project! {
    /// A [`Body`] reading its chunks from a [`Stream`].
    ///
    /// Terminating the body drops the stream, releasing whatever it holds.
    #[derive(Debug)]
    pub struct StreamBody<S> {
        #[pin]
        stream: Option<S>,
    }
}

impl<S: Stream<Item = Result<Bytes>>> StreamBody<S> {
    /// Read chunks from `stream`.
    pub fn new(stream: S) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    /// Whether the body has ended, failed or been terminated.
    pub fn is_finished(&self) -> bool {
        self.stream.is_none()
    }
}

impl<S: Stream<Item = Result<Bytes>>> Body for StreamBody<S> {
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>> {
        let mut this = self.project();

        let item = match this.stream.as_mut().as_pin_mut() {
            Some(stream) => futures_core::ready!(stream.poll_next(cx)),
            None => return Poll::Ready(None),
        };

        if !matches!(item, Some(Ok(_))) {
            this.stream.set(None);
        }

        Poll::Ready(item)
    }

    fn terminate(self: Pin<&mut Self>, error: &Error) {
        let mut stream = self.project().stream;
        if stream.is_some() {
            tracing::trace!(%error, "dropping terminated stream body");
            stream.set(None);
        }
    }
}

pin_project! {
    /// Stream for [`BodyExt::into_stream`](super::BodyExt::into_stream).
    #[derive(Debug)]
    #[must_use = "streams do nothing unless polled"]
    pub struct IntoStream<B> {
        #[pin]
        body: B,
    }
}

impl<B: Body> IntoStream<B> {
    pub(super) fn new(body: B) -> Self {
        Self { body }
    }

    /// Acquires a reference to the underlying body.
    pub fn get_ref(&self) -> &B {
        &self.body
    }

    /// Acquires a pinned mutable reference to the underlying body.
    pub fn get_pin_mut(self: Pin<&mut Self>) -> Pin<&mut B> {
        self.project().body
    }

    /// Consumes this stream returning the underlying body.
    pub fn into_inner(self) -> B {
        self.body
    }
}

impl<B: Body> Stream for IntoStream<B> {
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>> {
        self.project().body.poll_read(cx)
    }
}
