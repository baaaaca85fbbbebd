//! Destinations for decoded bytes.
//!
//! The decoder walks the chunks and hands every decoded run to a 'Sink'. The
//! sink decides where the bytes land. Each sink tracks the logical position
//! in the decoded stream, which is the number of decoded bytes it has been
//! handed so far.

/// A destination for decoded runs.
pub trait Sink {
    /// Returns the number of logical bytes that the sink can still accept.
    /// The decoder clamps every run to this number and stops at zero.
    fn remaining(&self) -> usize;

    /// Accept a run of literal bytes.
    fn copy(&mut self, bytes: &[u8]);

    /// Accept 'count' copies of 'val'.
    fn fill(&mut self, val: u8, count: usize);

    /// Returns the number of bytes that were stored.
    fn written(&self) -> usize;
}

/// Writes decoded bytes into a fixed size buffer, from its start.
pub struct SliceSink<'a> {
    output: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(output: &'a mut [u8]) -> Self {
        Self { output, pos: 0 }
    }
}

impl<'a> Sink for SliceSink<'a> {
    fn remaining(&self) -> usize {
        self.output.len() - self.pos
    }

    fn copy(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.output[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    fn fill(&mut self, val: u8, count: usize) {
        let end = self.pos + count;
        self.output[self.pos..end].fill(val);
        self.pos = end;
    }

    fn written(&self) -> usize {
        self.pos
    }
}

/// Stores only the decoded bytes whose logical offset falls inside the
/// window [start, start + output.len()). Everything before the window is
/// counted and dropped.
pub struct WindowSink<'a> {
    output: &'a mut [u8],
    /// Logical offset of the first byte of the window.
    start: usize,
    /// Logical offset of the next decoded byte.
    pos: usize,
}

impl<'a> WindowSink<'a> {
    pub fn new(output: &'a mut [u8], start: usize) -> Self {
        Self {
            output,
            start,
            pos: 0,
        }
    }

    fn window_end(&self) -> usize {
        self.start.saturating_add(self.output.len())
    }

    /// Returns the part of the logical range [pos, pos + len) that overlaps
    /// the window, as offsets into the run.
    fn overlap(&self, len: usize) -> Option<(usize, usize)> {
        let lo = self.pos.max(self.start);
        let hi = (self.pos + len).min(self.window_end());
        if lo >= hi {
            return None;
        }
        Some((lo - self.pos, hi - self.pos))
    }
}

impl<'a> Sink for WindowSink<'a> {
    fn remaining(&self) -> usize {
        if self.output.is_empty() {
            return 0;
        }
        self.window_end().saturating_sub(self.pos)
    }

    fn copy(&mut self, bytes: &[u8]) {
        if let Some((from, to)) = self.overlap(bytes.len()) {
            let dest = self.pos + from - self.start;
            self.output[dest..dest + (to - from)]
                .copy_from_slice(&bytes[from..to]);
        }
        self.pos += bytes.len();
    }

    fn fill(&mut self, val: u8, count: usize) {
        if let Some((from, to)) = self.overlap(count) {
            let dest = self.pos + from - self.start;
            self.output[dest..dest + (to - from)].fill(val);
        }
        self.pos += count;
    }

    fn written(&self) -> usize {
        self.pos.saturating_sub(self.start).min(self.output.len())
    }
}

/// Appends decoded bytes to a growable stream, without a size limit.
pub struct VecSink<'a> {
    output: &'a mut Vec<u8>,
    written: usize,
}

impl<'a> VecSink<'a> {
    pub fn new(output: &'a mut Vec<u8>) -> Self {
        Self { output, written: 0 }
    }
}

impl<'a> Sink for VecSink<'a> {
    fn remaining(&self) -> usize {
        usize::MAX - self.written
    }

    fn copy(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
        self.written += bytes.len();
    }

    fn fill(&mut self, val: u8, count: usize) {
        self.output.resize(self.output.len() + count, val);
        self.written += count;
    }

    fn written(&self) -> usize {
        self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_sink() {
        let mut buf = [0u8; 6];
        let mut sink = SliceSink::new(&mut buf);
        assert_eq!(sink.remaining(), 6);
        sink.copy(&[1, 2]);
        sink.fill(9, 3);
        assert_eq!(sink.remaining(), 1);
        assert_eq!(sink.written(), 5);
        assert_eq!(buf, [1, 2, 9, 9, 9, 0]);
    }

    #[test]
    fn test_window_sink_drops_bytes_outside_window() {
        // Logical stream: 0 1 2 3 4 5 6 6 6 6. Window is [3, 8).
        let mut buf = [0u8; 5];
        let mut sink = WindowSink::new(&mut buf, 3);
        assert_eq!(sink.remaining(), 8);
        sink.copy(&[0, 1]);
        assert_eq!(sink.written(), 0);
        sink.copy(&[2, 3, 4, 5]);
        assert_eq!(sink.written(), 3);
        sink.fill(6, 2);
        assert_eq!(sink.remaining(), 0);
        assert_eq!(sink.written(), 5);
        assert_eq!(buf, [3, 4, 5, 6, 6]);
    }

    #[test]
    fn test_window_sink_run_covers_window() {
        let mut buf = [0u8; 3];
        let mut sink = WindowSink::new(&mut buf, 10);
        sink.fill(7, 20);
        assert_eq!(sink.written(), 3);
        assert_eq!(buf, [7, 7, 7]);
    }

    #[test]
    fn test_window_sink_empty_window() {
        let mut buf = [0u8; 0];
        let sink = WindowSink::new(&mut buf, 100);
        assert_eq!(sink.remaining(), 0);
        assert_eq!(sink.written(), 0);
    }

    #[test]
    fn test_vec_sink() {
        let mut out = vec![42];
        let mut sink = VecSink::new(&mut out);
        sink.fill(1, 2);
        sink.copy(&[3]);
        assert_eq!(sink.written(), 3);
        assert_eq!(out, [42, 1, 1, 3]);
    }
}
