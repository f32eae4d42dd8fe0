use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes to be percent-encoded: everything except ASCII alphanumerics and `-_.~`.
const URL_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode `input` as `%XX` (uppercase hex) outside the unreserved set
pub fn url_encode(input: &[u8]) -> Vec<u8> {
    percent_encode(input, URL_SET).to_string().into_bytes()
}

/// Percent-encode twice; a literal `%` from the first pass becomes `%25`
pub fn double_url_encode(input: &[u8]) -> Vec<u8> {
    url_encode(&url_encode(input))
}
