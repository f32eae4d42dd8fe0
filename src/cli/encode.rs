use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::method::Method;
use log::debug;
use std::io::Read;

/// Options for the encode command
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub method: Method,
    pub copy: bool,
}

/// Resolve the payload: the argument if given, otherwise all of `reader`
///
/// The argument is taken verbatim. From `reader`, one trailing line ending
/// is dropped, the way a single-line text field would never contain it.
pub fn read_payload<R: Read>(arg: Option<String>, mut reader: R) -> Result<Vec<u8>> {
    match arg {
        Some(s) => Ok(s.into_bytes()),
        None => {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf)?;
            if buf.ends_with(b"\n") {
                buf.pop();
                if buf.ends_with(b"\r") {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}

/// Encode a payload and optionally hand the result to the clipboard
pub fn encode_payload(
    payload: &[u8],
    options: &EncodeOptions,
    clipboard: &mut dyn Clipboard,
) -> Result<Vec<u8>> {
    debug!("encode: {} bytes, method {}", payload.len(), options.method);
    let output = options.method.apply(payload);
    if options.copy {
        clipboard.set_contents(&output)?;
    }
    Ok(output)
}
