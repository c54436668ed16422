use bytes::Bytes;
use deflate_body::body::Body;
use std::{
    io::{Error, Result},
    pin::Pin,
    task::{Context, Poll},
};

pin_project_lite::pin_project! {
    /// Counts [`Body::terminate`] calls and asserts nothing is read afterwards.
    pub struct TrackTerminated<B> {
        #[pin]
        inner: B,
        terminated: usize,
    }
}

impl<B> TrackTerminated<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            terminated: 0,
        }
    }

    pub fn terminated(&self) -> usize {
        self.terminated
    }

    pub fn get_ref(&self) -> &B {
        &self.inner
    }
}

impl<B: Body> Body for TrackTerminated<B> {
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>> {
        let this = self.project();
        assert_eq!(*this.terminated, 0, "read after terminate");
        this.inner.poll_read(cx)
    }

    fn terminate(self: Pin<&mut Self>, error: &Error) {
        let this = self.project();
        *this.terminated += 1;
        this.inner.terminate(error)
    }

    fn length(&self) -> Option<u64> {
        self.inner.length()
    }
}
