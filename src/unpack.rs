//! The PackBits decoder.
//!
//! Decoding is a lot simpler than encoding. Read a header, copy or repeat the
//! run into the sink, and loop until either the source or the sink runs out.
//! There is no invalid stream: a run that would overrun either side is cut
//! short, and a repeat header with no byte after it is dropped.

use crate::header::Header;
use crate::sink::{Sink, SliceSink, VecSink, WindowSink};
use crate::Decoder;

/// How much of the source buffer the decoder may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLimit {
    /// Read at most this many bytes (never more than the buffer holds).
    Bounded(usize),
    /// Read as much as it takes to fill the destination. The number of
    /// source bytes used is returned in 'Unpacked::consumed', which lets a
    /// caller unpack a long stream in pieces. The pieces must line up with
    /// chunk boundaries of the packed stream.
    FillDestination,
}

impl SourceLimit {
    fn resolve(self, len: usize) -> usize {
        match self {
            SourceLimit::Bounded(n) => n.min(len),
            SourceLimit::FillDestination => len,
        }
    }
}

/// The result of a decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unpacked {
    /// Number of source bytes read.
    pub consumed: usize,
    /// Number of bytes stored in the destination.
    pub written: usize,
}

/// Decode chunks from 'input' into 'sink' and return the number of source
/// bytes consumed.
fn unpack_into<S: Sink>(
    input: &[u8],
    limit: SourceLimit,
    sink: &mut S,
) -> usize {
    let end = limit.resolve(input.len());
    let mut cursor = 0;

    while cursor < end && sink.remaining() != 0 {
        let hdr = Header::from(input[cursor]);
        cursor += 1;

        match hdr {
            Header::Literal(len) => {
                let count = len.min(sink.remaining()).min(end - cursor);
                if count != 0 {
                    sink.copy(&input[cursor..cursor + count]);
                    cursor += count;
                }
            }
            Header::Repeat(len) => {
                let count = len.min(sink.remaining());
                if count != 0 && cursor < end {
                    sink.fill(input[cursor], count);
                    cursor += 1;
                }
            }
            Header::Nop => {}
        }
    }
    cursor
}

/// Unpack 'input' into 'output'. Stops when the source is exhausted or
/// 'output' is full, whichever comes first, so 'written' never exceeds
/// 'output.len()'.
pub fn unpack(
    input: &[u8],
    limit: SourceLimit,
    output: &mut [u8],
) -> Unpacked {
    let mut sink = SliceSink::new(output);
    let consumed = unpack_into(input, limit, &mut sink);
    Unpacked {
        consumed,
        written: sink.written(),
    }
}

/// Unpack only the window [start, start + output.len()) of the decoded
/// stream into 'output', and return the number of bytes written. All chunks
/// before the window are still walked, but their bytes are discarded, so
/// 'output' only needs to be as large as the window.
pub fn unpack_window(
    input: &[u8],
    limit: SourceLimit,
    start: usize,
    output: &mut [u8],
) -> usize {
    let mut sink = WindowSink::new(output, start);
    unpack_into(input, limit, &mut sink);
    sink.written()
}

/// Unpack at most 'capacity' bytes of 'input' into a new buffer.
pub fn unpack_to_vec(input: &[u8], capacity: usize) -> Vec<u8> {
    let mut output = vec![0; capacity];
    let limit = SourceLimit::Bounded(input.len());
    let unpacked = unpack(input, limit, &mut output);
    output.truncate(unpacked.written);
    output
}

/// Unpack the window [start, start + len) of the decoded stream into a new
/// buffer. The result is shorter than 'len' if the stream ends first.
pub fn unpack_window_to_vec(
    input: &[u8],
    start: usize,
    len: usize,
) -> Vec<u8> {
    let mut output = vec![0; len];
    let limit = SourceLimit::Bounded(input.len());
    let written = unpack_window(input, limit, start, &mut output);
    output.truncate(written);
    output
}

/// A PackBits decoder that appends the whole decoded stream to a growable
/// output.
pub struct PackBitsDecoder<'a> {
    /// The packed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
}

impl<'a> PackBitsDecoder<'a> {
    fn decode_impl(&mut self) -> Option<(usize, usize)> {
        let mut sink = VecSink::new(self.output);
        let limit = SourceLimit::Bounded(self.input.len());
        let consumed = unpack_into(self.input, limit, &mut sink);
        Some((consumed, sink.written()))
    }
}

impl<'a> Decoder<'a> for PackBitsDecoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self {
        Self { input, output }
    }

    fn decode(&mut self) -> Option<(usize, usize)> {
        self.decode_impl()
    }
}
