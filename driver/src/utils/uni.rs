use alloc::vec::Vec;
use wdk_sys::UNICODE_STRING;

/// A wrapper around a `Vec<u16>` representing a Unicode string.
#[derive(Default)]
pub struct OwnedUnicodeString {
    /// The internal buffer holding the wide (UTF-16) string, including the
    /// null terminator.
    buffer: Vec<u16>,
    /// The buffer address must stay valid for the lifetime of any
    /// `UNICODE_STRING` handed out.
    _phantompinned: core::marker::PhantomPinned,
}

impl OwnedUnicodeString {
    /// Converts into a `UNICODE_STRING` that can be passed to kernel APIs.
    pub fn to_unicode(&self) -> UNICODE_STRING {
        // Length excludes the null terminator, MaximumLength includes it.
        UNICODE_STRING {
            Length: ((self.buffer.len() * size_of::<u16>()) - 2) as u16,
            MaximumLength: (self.buffer.len() * size_of::<u16>()) as u16,
            Buffer: self.buffer.as_ptr() as *mut u16,
        }
    }
}

/// Converts a Rust `&str` to an `OwnedUnicodeString`.
pub fn str_to_unicode(str: &str) -> OwnedUnicodeString {
    let mut wide_string: Vec<u16> = str.encode_utf16().collect();
    wide_string.push(0);

    OwnedUnicodeString {
        buffer: wide_string,
        _phantompinned: core::marker::PhantomPinned,
    }
}
