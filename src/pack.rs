//! The PackBits encoder.
//!
//! This is a single forward pass with no backtracking. Bytes that were
//! scanned but not yet written are the "pending" region. The encoder breaks
//! a literal region for a run only when the run reaches 'MIN_RUN' bytes,
//! unless the run starts the pending region, in which case it is always
//! taken. This is a greedy heuristic and not an optimal encoding, but the
//! output is bit compatible with other PackBits writers that follow it.
//!
//! Data with no runs at all (e.g. an incrementing counter) costs one extra
//! header byte per 128 source bytes. See 'max_packed_len'.

use crate::error::PackError;
use crate::header::{
    encode_literal, encode_repeat, max_packed_len, MAX_LITERAL, MAX_RUN,
    MIN_RUN,
};
use crate::Encoder;

/// Writes chunks into a fixed size destination and refuses to write a chunk
/// that does not fit.
struct ChunkWriter<'a> {
    output: &'a mut [u8],
    written: usize,
}

impl<'a> ChunkWriter<'a> {
    fn new(output: &'a mut [u8]) -> Self {
        Self { output, written: 0 }
    }

    /// Make sure that 'len' more bytes fit in the destination.
    fn reserve(&self, len: usize) -> Result<(), PackError> {
        let required = self.written + len;
        if required > self.output.len() {
            return Err(PackError::DestinationTooSmall {
                required,
                capacity: self.output.len(),
            });
        }
        Ok(())
    }

    fn literal(&mut self, literals: &[u8]) -> Result<(), PackError> {
        let len = literals.len();
        self.reserve(1 + len)?;
        self.output[self.written] = encode_literal(len);
        self.output[self.written + 1..self.written + 1 + len]
            .copy_from_slice(literals);
        self.written += 1 + len;
        Ok(())
    }

    fn repeat(&mut self, val: u8, len: usize) -> Result<(), PackError> {
        self.reserve(2)?;
        self.output[self.written] = encode_repeat(len);
        self.output[self.written + 1] = val;
        self.written += 2;
        Ok(())
    }
}

/// Pack 'input' into 'output' and return the number of bytes written.
/// Fails as soon as a chunk does not fit in 'output', in which case the
/// content of 'output' is incomplete. An 'output' of at least
/// 'max_packed_len(input.len())' bytes always succeeds.
pub fn pack(input: &[u8], output: &mut [u8]) -> Result<usize, PackError> {
    let mut writer = ChunkWriter::new(output);

    // Prime the encoder with the first byte.
    let (&first, rest) = match input.split_first() {
        Some(parts) => parts,
        None => return Ok(0),
    };

    let mut in_run = false;
    // Index of the first pending byte.
    let mut pending_start = 0;
    // Number of bytes looked at but not yet written.
    let mut pending = 1;
    // Distance into the pending bytes where a run could start.
    let mut run_start = 0;
    let mut prev = first;

    for (i, &curr) in rest.iter().enumerate() {
        let pos = i + 1;
        pending += 1;

        if in_run {
            if curr != prev || pending > MAX_RUN {
                // End of the run, or the run is as long as a chunk allows.
                writer.repeat(prev, pending - 1)?;
                pending_start = pos;
                pending = 1;
                run_start = 0;
                in_run = false;
            }
        } else if pending > MAX_LITERAL {
            // Write a full literal chunk and keep the last byte pending.
            let end = pending_start + MAX_LITERAL;
            writer.literal(&input[pending_start..end])?;
            pending_start = end;
            pending -= MAX_LITERAL;
            run_start = pending - 1;
        } else if curr == prev {
            if pending - run_start >= MIN_RUN || run_start == 0 {
                // This run is worth a chunk of its own. Flush the literals
                // that come before it.
                if run_start != 0 {
                    let end = pending_start + run_start;
                    writer.literal(&input[pending_start..end])?;
                    pending_start = end;
                }
                pending -= run_start;
                in_run = true;
            }
        } else {
            run_start = pending - 1;
        }
        prev = curr;
    }

    // Write the remainder.
    if in_run {
        writer.repeat(prev, pending)?;
    } else {
        writer.literal(&input[pending_start..pending_start + pending])?;
    }
    Ok(writer.written)
}

/// Pack 'input' into a newly allocated buffer.
pub fn pack_to_vec(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    let _ = PackBitsEncoder::new(input, &mut output).encode();
    output
}

/// A PackBits encoder that appends to a growable output stream.
pub struct PackBitsEncoder<'a> {
    /// The uncompressed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
}

impl<'a> PackBitsEncoder<'a> {
    fn encode_impl(&mut self) -> usize {
        let start = self.output.len();
        self.output.resize(start + max_packed_len(self.input.len()), 0);
        // The worst case size always fits, so packing can't fail.
        let written = match pack(self.input, &mut self.output[start..]) {
            Ok(written) => written,
            Err(_) => unreachable!("Buffer is sized for the worst case"),
        };
        self.output.truncate(start + written);
        written
    }
}

impl<'a> Encoder<'a> for PackBitsEncoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self {
        Self { input, output }
    }

    fn encode(&mut self) -> usize {
        self.encode_impl()
    }
}
