//! Bounded iteration over self-describing variable-length records.
//!
//! The system process snapshot is a byte buffer of records that each start
//! with a 32-bit offset to the next record; zero marks the last one. The
//! buffer comes from a system call but its declared offsets are still treated
//! as untrusted: an offset that runs past the buffer, or one too small to
//! contain another header, drops that record and ends the walk instead of
//! reading out of bounds.

const HEADER_LEN: usize = 4;

/// Iterator over next-offset-chained records in `buf`.
///
/// Yields one byte slice per record. Every step advances by at least
/// `HEADER_LEN`, so the walk terminates even on a corrupted chain.
pub struct RecordWalker<'a> {
    buf: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> RecordWalker<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for RecordWalker<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.done || self.pos + HEADER_LEN > self.buf.len() {
            return None;
        }

        let header: [u8; HEADER_LEN] = self.buf[self.pos..self.pos + HEADER_LEN]
            .try_into()
            .ok()?;
        let offset = u32::from_le_bytes(header) as usize;

        if offset == 0 {
            // Declared terminator; the record runs to the end of the buffer.
            self.done = true;
            return Some(&self.buf[self.pos..]);
        }

        let next = self.pos + offset;
        if offset < HEADER_LEN || next > self.buf.len() {
            // Corrupted chain; the malformed record is dropped, not yielded,
            // so no consumer parses fields out of a truncated tail.
            self.done = true;
            return None;
        }

        let record = &self.buf[self.pos..next];
        self.pos = next;
        Some(record)
    }
}
