//! UTF-16 helpers for the fixed-width name buffers on the wire.
//!
//! Module names come out of the target's loader list as counted UTF-16
//! strings and travel in NUL-terminated fixed buffers. Matching is
//! case-insensitive in the ASCII range, which is how the loader itself
//! compares DLL names.

/// Length of a NUL-terminated buffer, in UTF-16 units, excluding the NUL.
/// A buffer with no NUL counts in full.
pub fn len(buf: &[u16]) -> usize {
    buf.iter().position(|&c| c == 0).unwrap_or(buf.len())
}

fn fold(c: u16) -> u16 {
    if (b'A' as u16..=b'Z' as u16).contains(&c) {
        c + 32
    } else {
        c
    }
}

/// Case-insensitive equality of two NUL-terminated UTF-16 buffers.
pub fn eq_ignore_case(a: &[u16], b: &[u16]) -> bool {
    let (a, b) = (&a[..len(a)], &b[..len(b)]);
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| fold(x) == fold(y))
}

/// Encodes `s` into a fixed UTF-16 buffer, NUL-terminated, truncating to
/// `out.len() - 1` units. Returns the number of units written.
pub fn encode(s: &str, out: &mut [u16]) -> usize {
    let mut written = 0;
    for unit in s.encode_utf16() {
        if written + 1 >= out.len() {
            break;
        }
        out[written] = unit;
        written += 1;
    }
    if !out.is_empty() {
        out[written] = 0;
    }
    written
}
