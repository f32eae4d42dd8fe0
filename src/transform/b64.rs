use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Standard base64 (RFC 4648 alphabet, `=` padded)
pub fn base64_encode(input: &[u8]) -> Vec<u8> {
    STANDARD.encode(input).into_bytes()
}
