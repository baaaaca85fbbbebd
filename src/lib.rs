//! PackBits run length encoding, as used by MacPaint and TIFF.
//!
//! The encoded stream is a plain concatenation of chunks. Each chunk starts
//! with a header byte that says whether a run of literal bytes or a single
//! repeated byte follows. There is no stream header, length prefix or
//! checksum.
//!
//! The low level entry points work on caller owned, fixed size buffers and
//! never allocate: [`pack::pack`], [`unpack::unpack`] and
//! [`unpack::unpack_window`]. The [`Encoder`] and [`Decoder`] implementations
//! are the growable-output variants.
//!
//! Every call is a pure transform over the buffers it is handed. Concurrent
//! calls on disjoint buffers are fine; calls that write into the same or
//! overlapping destination are not supported.

pub mod error;
pub mod header;
pub mod pack;
pub mod sink;
pub mod unpack;

pub use error::PackError;
pub use pack::{pack, pack_to_vec, PackBitsEncoder};
pub use unpack::{
    unpack, unpack_to_vec, unpack_window, unpack_window_to_vec,
    PackBitsDecoder, SourceLimit, Unpacked,
};

/// A trait that defines the interface for encoding buffers.
pub trait Encoder<'a> {
    /// Creates a new Encoder that reads from 'input' and writes into 'output'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self;

    /// Encode the whole input buffer and return the number of bytes that were
    /// written into the output stream.
    #[must_use]
    fn encode(&mut self) -> usize;
}

/// A trait that defines the interface for decoding buffers.
pub trait Decoder<'a> {
    /// Creates a new Decoder that reads from 'input' and writes into 'output'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self;

    /// Try to decode the buffer 'input', and return the number of input bytes
    /// that were consumed followed by the number of bytes written, or None,
    /// if the input was invalid.
    #[must_use]
    fn decode(&mut self) -> Option<(usize, usize)>;
}
