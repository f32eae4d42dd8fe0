use crate::error::Result;
use crate::transform::encode_all;
use serde::Serialize;

/// One row of the JSON all-methods listing
#[derive(Debug, Clone, Serialize)]
pub struct EncodedRow {
    pub method: &'static str,
    pub output: String,
}

/// Encode `payload` with every method, as JSON-ready rows
///
/// JSON strings must be UTF-8, so pass-through transforms (html, rot13,
/// mixed_case) show invalid bytes of a non-UTF-8 payload as U+FFFD here.
/// The text table from [`show_all`] keeps the raw bytes.
pub fn encode_rows(payload: &[u8]) -> Vec<EncodedRow> {
    encode_all(payload)
        .into_iter()
        .map(|(method, output)| EncodedRow {
            method: method.name(),
            output: String::from_utf8_lossy(&output).into_owned(),
        })
        .collect()
}

/// Plain text table, one `method: output` line per method, bytes unchanged
pub fn show_all(payload: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    for (method, encoded) in encode_all(payload) {
        output.extend_from_slice(format!("{:<11} ", format!("{}:", method)).as_bytes());
        output.extend_from_slice(&encoded);
        output.push(b'\n');
    }
    output
}

/// JSON array of `{ "method", "output" }` objects
pub fn show_all_json(payload: &[u8]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&encode_rows(payload))?)
}
