use std::fmt::Write;

/// Escape the five HTML-significant characters, leaving other bytes as-is
pub fn html_escape(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for &byte in input {
        match byte {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            b'"' => out.extend_from_slice(b"&quot;"),
            b'\'' => out.extend_from_slice(b"&#x27;"),
            _ => out.push(byte),
        }
    }
    out
}

/// Every byte as a hex character reference `&#xHH;` (lowercase, unpadded)
pub fn html_hex_encode(input: &[u8]) -> Vec<u8> {
    let mut out = String::with_capacity(input.len() * 6);
    for &byte in input {
        let _ = write!(out, "&#x{:x};", byte);
    }
    out.into_bytes()
}

/// Every byte as a decimal character reference `&#DD;`
pub fn html_dec_encode(input: &[u8]) -> Vec<u8> {
    let mut out = String::with_capacity(input.len() * 6);
    for &byte in input {
        let _ = write!(out, "&#{};", byte);
    }
    out.into_bytes()
}
