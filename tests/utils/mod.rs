#![allow(unused)] // Different tests use a different subset of functions

mod input_stream;
mod track_terminated;
#[macro_use]
mod test_cases;


pub use self::{input_stream::InputStream, track_terminated::TrackTerminated};
pub use deflate_body::Level;
pub use futures::{executor::block_on, pin_mut};
pub use std::iter::FromIterator;

pub mod impls {
    use bytes::Bytes;
    use deflate_body::body::{Body, BodyExt as _};
    use futures::{executor::block_on_stream, pin_mut};
    use std::io::Read;

    pub fn read_to_vec(mut read: impl Read) -> Vec<u8> {
        let mut output = vec![];
        read.read_to_end(&mut output).unwrap();
        output
    }

    /// Every chunk `body` yields, in order.
    pub fn to_chunks(body: impl Body) -> Vec<Bytes> {
        let stream = body.into_stream();
        pin_mut!(stream);
        block_on_stream(stream).map(Result::unwrap).collect()
    }

    pub fn to_vec(body: impl Body) -> Vec<u8> {
        to_chunks(body).concat()
    }

    /// Inflate with a decoder limited to a `window_bits` window, rejecting anything that reaches
    /// further back or declares a larger window in its zlib header.
    pub fn decompress_with_window_bits(
        bytes: &[u8],
        zlib_header: bool,
        window_bits: u8,
    ) -> Vec<u8> {
        use flate2::{Decompress, FlushDecompress, Status};

        let mut decompress = Decompress::new_with_window_bits(zlib_header, window_bits);
        let mut output = Vec::new();

        loop {
            output.reserve(32 * 1024);
            let (prior_in, prior_out) = (decompress.total_in(), decompress.total_out());

            let status = decompress
                .decompress_vec(&bytes[prior_in as usize..], &mut output, FlushDecompress::None)
                .unwrap();

            if let Status::StreamEnd = status {
                return output;
            }
            assert!(
                decompress.total_in() > prior_in || decompress.total_out() > prior_out,
                "truncated stream"
            );
        }
    }

    /// Chunks whose contents repeat further apart than the smallest window reaches.
    pub fn far_repeats() -> Vec<Vec<u8>> {
        let block: Vec<u8> = (0..1_024).map(|_| rand::random()).collect();
        vec![block.repeat(2), block.repeat(3)]
    }
}
