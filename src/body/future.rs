use std::{
    future::Future,
    io::Result,
    pin::Pin,
    task::{Context, Poll},
};

use bytes::{Bytes, BytesMut};
use futures_core::ready;
use pin_project_lite::pin_project;

use super::Body;

/// Future for [`BodyExt::read`](super::BodyExt::read).
#[derive(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Read<'a, B: ?Sized> {
    body: &'a mut B,
}

impl<'a, B: Body + Unpin + ?Sized> Read<'a, B> {
    pub(super) fn new(body: &'a mut B) -> Self {
        Self { body }
    }
}

impl<B: Body + Unpin + ?Sized> Future for Read<'_, B> {
    type Output = Option<Result<Bytes>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut *self.body).poll_read(cx)
    }
}

pin_project! {
    /// Future for [`BodyExt::join`](super::BodyExt::join).
    #[derive(Debug)]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct Join<B> {
        #[pin]
        body: B,
        output: BytesMut,
    }
}

impl<B: Body> Join<B> {
    pub(super) fn new(body: B) -> Self {
        Self {
            body,
            output: BytesMut::new(),
        }
    }
}

impl<B: Body> Future for Join<B> {
    type Output = Result<Bytes>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match ready!(this.body.as_mut().poll_read(cx)) {
                Some(chunk) => this.output.extend_from_slice(&chunk?),
                None => return Poll::Ready(Ok(this.output.split().freeze())),
            }
        }
    }
}
