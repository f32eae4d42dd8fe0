/// ROT13 over ASCII letters; all other bytes pass through
pub fn rot13(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .map(|&byte| match byte {
            b'A'..=b'Z' => (byte - b'A' + 13) % 26 + b'A',
            b'a'..=b'z' => (byte - b'a' + 13) % 26 + b'a',
            _ => byte,
        })
        .collect()
}

/// Lowercase bytes at even positions and uppercase bytes at odd positions
///
/// ASCII case rules only. Non-letters are unchanged but still count as a
/// position.
pub fn mixed_case(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .enumerate()
        .map(|(i, byte)| {
            if i % 2 == 0 {
                byte.to_ascii_lowercase()
            } else {
                byte.to_ascii_uppercase()
            }
        })
        .collect()
}
