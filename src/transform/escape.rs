use std::fmt::Write;

/// Every byte as `\xHH`, two lowercase hex digits
pub fn hex_escape(input: &[u8]) -> Vec<u8> {
    prefixed_hex_pairs(input, b"\\x")
}

/// Every byte as `\O` in unpadded octal
pub fn octal_escape(input: &[u8]) -> Vec<u8> {
    let mut out = String::with_capacity(input.len() * 4);
    for &byte in input {
        // Writing to a String cannot fail
        let _ = write!(out, "\\{:o}", byte);
    }
    out.into_bytes()
}

/// Every byte as `\uHHHH`
///
/// This escapes raw byte values, not code points: a multi-byte UTF-8
/// character yields one `\u00HH` per byte.
pub fn unicode_escape(input: &[u8]) -> Vec<u8> {
    prefixed_hex_pairs(input, b"\\u00")
}

fn prefixed_hex_pairs(input: &[u8], prefix: &[u8]) -> Vec<u8> {
    let digits = hex::encode(input);
    let mut out = Vec::with_capacity(input.len() * (prefix.len() + 2));
    for pair in digits.as_bytes().chunks(2) {
        out.extend_from_slice(prefix);
        out.extend_from_slice(pair);
    }
    out
}
