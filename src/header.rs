//! The header byte that starts every chunk.
//!
//! Header = 0..127     (1 + n) literal bytes follow.
//! Header = 129..255   (257 - n) copies of the one byte that follows.
//! Header = 128        No operation, nothing follows.

/// Minimum run of a repeated byte worth breaking a literal chunk for.
pub const MIN_RUN: usize = 3;
/// Maximum number of copies in a repeat chunk.
pub const MAX_RUN: usize = 128;
/// Maximum number of bytes in a literal chunk.
pub const MAX_LITERAL: usize = 128;

/// The header value that carries no payload and produces no output.
pub const NOP: u8 = 128;

/// The decoded meaning of a header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// This many literal bytes follow the header.
    Literal(usize),
    /// The byte after the header is repeated this many times.
    Repeat(usize),
    /// Zero-length chunk. The encoder never emits it.
    Nop,
}

impl Header {
    /// Returns the number of output bytes the chunk stands for.
    pub fn len(&self) -> usize {
        match self {
            Header::Literal(n) | Header::Repeat(n) => *n,
            Header::Nop => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of payload bytes that follow the header.
    pub fn payload_len(&self) -> usize {
        match self {
            Header::Literal(n) => *n,
            Header::Repeat(_) => 1,
            Header::Nop => 0,
        }
    }
}

impl From<u8> for Header {
    fn from(hdr: u8) -> Self {
        match hdr {
            0..=127 => Header::Literal(hdr as usize + 1),
            128 => Header::Nop,
            129..=255 => Header::Repeat(257 - hdr as usize),
        }
    }
}

impl From<Header> for u8 {
    fn from(header: Header) -> Self {
        match header {
            Header::Literal(n) => encode_literal(n),
            Header::Repeat(n) => encode_repeat(n),
            Header::Nop => NOP,
        }
    }
}

/// Returns the header of a literal chunk of 'n' bytes (1..=128).
pub fn encode_literal(n: usize) -> u8 {
    debug_assert!((1..=MAX_LITERAL).contains(&n), "Invalid literal length");
    (n - 1) as u8
}

/// Returns the header of a repeat chunk of 'n' copies (2..=128). This is
/// the two's complement of 'n - 1', computed modulo 256.
pub fn encode_repeat(n: usize) -> u8 {
    debug_assert!((2..=MAX_RUN).contains(&n), "Invalid run length");
    ((256 - (n - 1)) % 256) as u8
}

/// Returns the size of a destination buffer that is large enough to pack
/// 'len' bytes of any content: one header byte per 128 source bytes.
pub fn max_packed_len(len: usize) -> usize {
    len + (len + MAX_LITERAL - 1) / MAX_LITERAL
}
