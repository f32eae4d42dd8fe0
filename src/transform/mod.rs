pub mod b64;
pub mod escape;
pub mod html;
pub mod text;
pub mod url;

pub use b64::*;
pub use escape::*;
pub use html::*;
pub use text::*;
pub use url::*;

use crate::error::Result;
use crate::method::Method;
use log::{debug, warn};

/// Legacy result returned by [`encode`] for an unrecognized method identifier
pub const UNKNOWN_METHOD_MESSAGE: &str = "Unknown encoding method.";

/// Encode `input` with the method named `method`
///
/// Unknown identifiers yield `Encod3rError::UnknownMethod`.
pub fn try_encode(input: &[u8], method: &str) -> Result<Vec<u8>> {
    let method: Method = method.parse()?;
    debug!("encoding {} bytes with {}", input.len(), method);
    Ok(method.apply(input))
}

/// Encode `input` with the method named `method`
///
/// An unknown identifier is not an error here: the output is the literal
/// [`UNKNOWN_METHOD_MESSAGE`]. Use [`try_encode`] to tell the two apart.
pub fn encode(input: &[u8], method: &str) -> Vec<u8> {
    match method.parse::<Method>() {
        Ok(method) => {
            debug!("encoding {} bytes with {}", input.len(), method);
            method.apply(input)
        }
        Err(_) => {
            warn!("unknown encoding method {:?}", method);
            UNKNOWN_METHOD_MESSAGE.as_bytes().to_vec()
        }
    }
}

/// Text wrapper around [`encode`]
///
/// Every transform maps UTF-8 to UTF-8 (escapes are ASCII and the
/// case/entity transforms only rewrite ASCII bytes).
pub fn encode_str(input: &str, method: &str) -> String {
    String::from_utf8_lossy(&encode(input.as_bytes(), method)).into_owned()
}

/// Encode `input` with every method, in listing order
pub fn encode_all(input: &[u8]) -> Vec<(Method, Vec<u8>)> {
    Method::ALL
        .into_iter()
        .map(|method| (method, method.apply(input)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Encod3rError;

    #[test]
    fn test_encode_known_method() {
        assert_eq!(encode(b"a b", "url"), b"a%20b");
        assert_eq!(encode(b"foo", "base64"), b"Zm9v");
    }

    #[test]
    fn test_encode_unknown_method_returns_sentinel() {
        assert_eq!(encode(b"anything", "not_a_method"), UNKNOWN_METHOD_MESSAGE.as_bytes());
        assert_eq!(encode(b"", "URL"), UNKNOWN_METHOD_MESSAGE.as_bytes());
    }

    #[test]
    fn test_try_encode_distinguishes_unknown() {
        assert!(matches!(
            try_encode(b"x", "nope"),
            Err(Encod3rError::UnknownMethod(ref name)) if name == "nope"
        ));
        // A real result equal to the sentinel text is still a success
        let sentinel = UNKNOWN_METHOD_MESSAGE.as_bytes();
        assert_eq!(try_encode(sentinel, "mixed_case").unwrap().len(), sentinel.len());
    }

    #[test]
    fn test_empty_input_every_method() {
        for method in Method::ALL {
            assert!(encode(b"", method.name()).is_empty(), "{} not empty", method);
        }
    }

    #[test]
    fn test_encode_str() {
        assert_eq!(encode_str("<b>", "html"), "&lt;b&gt;");
        assert_eq!(encode_str("é", "url"), "%C3%A9");
        assert_eq!(encode_str("Hello", "rot13"), "Uryyb");
        assert_eq!(encode_str("x", "bogus"), UNKNOWN_METHOD_MESSAGE);
    }

    #[test]
    fn test_encode_all_order() {
        let results = encode_all(b"A");
        let methods: Vec<Method> = results.iter().map(|(m, _)| *m).collect();
        assert_eq!(methods, Method::ALL.to_vec());
        assert_eq!(results[5].1, b"QQ==");
    }
}
