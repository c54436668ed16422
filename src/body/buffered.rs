use std::{
    collections::VecDeque,
    io::{Error, Result},
    pin::Pin,
    task::{Context, Poll},
};

use bytes::Bytes;

use super::Body;

/// A [`Body`] over chunks already held in memory.
#[derive(Debug, Default, Clone)]
pub struct Buffered {
    chunks: VecDeque<Bytes>,
    terminated: bool,
}

impl Buffered {
    /// Yield `chunks` in order.
    ///
    /// Chunks are handed out as given, including empty ones.
    pub fn new<I>(chunks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
            terminated: false,
        }
    }

    /// Whether [`Body::terminate`] has been called.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl From<Bytes> for Buffered {
    fn from(chunk: Bytes) -> Self {
        Self::new(Some(chunk))
    }
}

impl From<Vec<u8>> for Buffered {
    fn from(chunk: Vec<u8>) -> Self {
        Self::new(Some(chunk))
    }
}

impl From<&'static str> for Buffered {
    fn from(chunk: &'static str) -> Self {
        Self::new(Some(chunk))
    }
}

impl Body for Buffered {
    fn poll_read(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>> {
        Poll::Ready(self.get_mut().chunks.pop_front().map(Ok))
    }

    fn terminate(self: Pin<&mut Self>, _error: &Error) {
        let this = self.get_mut();
        this.chunks.clear();
        this.terminated = true;
    }

    fn length(&self) -> Option<u64> {
        Some(self.chunks.iter().map(|chunk| chunk.len() as u64).sum())
    }
}
