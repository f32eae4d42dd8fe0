//! Encod3r - Payload Encoding Transforms
//!
//! A small library of deterministic, single-pass byte transforms commonly
//! used to encode test payloads, plus a name-keyed dispatcher.
//!
//! ## Methods
//!
//! ```text
//! url  double_url  html  html_hex  html_dec  base64  hex  octal  rot13  mixed_case  unicode
//! ```
//!
//! - **url / double_url**: percent-encoding outside `A-Z a-z 0-9 - _ . ~`
//! - **html**: named entities for `& < > " '`
//! - **html_hex / html_dec**: every byte as a numeric character reference
//! - **base64**: RFC 4648 standard alphabet, padded
//! - **hex / octal / unicode**: every byte as `\xHH`, `\O`, `\u00HH`
//! - **rot13 / mixed_case**: ASCII letter rotation and alternating case
//!
//! Every transform works on bytes, not code points.
//!
//! ## Example
//!
//! ```
//! use encod3r::{encode, try_encode, Method};
//!
//! assert_eq!(encode(b"a b", "url"), b"a%20b");
//! assert_eq!(Method::Base64.apply(b"foo"), b"Zm9v");
//!
//! // Legacy behavior: unknown methods yield a sentinel string
//! assert_eq!(encode(b"x", "nope"), b"Unknown encoding method.");
//! assert!(try_encode(b"x", "nope").is_err());
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod method;
pub mod transform;

pub use clipboard::{Clipboard, CommandClipboard};
pub use config::Config;
pub use error::{Encod3rError, Result};
pub use method::Method;
pub use transform::{encode, encode_all, encode_str, try_encode, UNKNOWN_METHOD_MESSAGE};
