use std::{
    io::{Error, Result},
    pin::Pin,
    task::{Context, Poll},
};

use bytes::Bytes;
use pin_project_lite::pin_project;

use super::Body;

pin_project! {
    /// A [`Body`] forwarding every call to the body it wraps.
    ///
    /// Decorators embed a `Wrapper` and override only the calls they care about.
    #[derive(Debug)]
    pub struct Wrapper<B> {
        #[pin]
        body: B,
    }
}

impl<B> Wrapper<B> {
    /// Wrap `body`.
    pub fn new(body: B) -> Self {
        Self { body }
    }

    /// Acquires a reference to the wrapped body.
    pub fn get_ref(&self) -> &B {
        &self.body
    }

    /// Acquires a mutable reference to the wrapped body.
    ///
    /// Note that care must be taken to avoid tampering with the state of the body which may
    /// otherwise confuse the decorator.
    pub fn get_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Acquires a pinned mutable reference to the wrapped body.
    pub fn get_pin_mut(self: Pin<&mut Self>) -> Pin<&mut B> {
        self.project().body
    }

    /// Consumes this wrapper returning the wrapped body.
    pub fn into_inner(self) -> B {
        self.body
    }
}

impl<B: Body> Body for Wrapper<B> {
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes>>> {
        self.project().body.poll_read(cx)
    }

    fn terminate(self: Pin<&mut Self>, error: &Error) {
        self.project().body.terminate(error)
    }

    fn length(&self) -> Option<u64> {
        self.body.length()
    }
}
