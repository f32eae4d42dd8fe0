use crate::error::{Encod3rError, Result};
use crate::transform;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding method options
///
/// Declaration order is the listing order used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[default]
    Url,
    DoubleUrl,
    Html,
    HtmlHex,
    HtmlDec,
    Base64,
    Hex,
    Octal,
    Rot13,
    MixedCase,
    Unicode,
}

impl Method {
    pub const ALL: [Method; 11] = [
        Method::Url,
        Method::DoubleUrl,
        Method::Html,
        Method::HtmlHex,
        Method::HtmlDec,
        Method::Base64,
        Method::Hex,
        Method::Octal,
        Method::Rot13,
        Method::MixedCase,
        Method::Unicode,
    ];

    /// External identifier of the method
    pub fn name(self) -> &'static str {
        match self {
            Method::Url => "url",
            Method::DoubleUrl => "double_url",
            Method::Html => "html",
            Method::HtmlHex => "html_hex",
            Method::HtmlDec => "html_dec",
            Method::Base64 => "base64",
            Method::Hex => "hex",
            Method::Octal => "octal",
            Method::Rot13 => "rot13",
            Method::MixedCase => "mixed_case",
            Method::Unicode => "unicode",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Method::Url => "Percent-encode everything except A-Z a-z 0-9 - _ . ~",
            Method::DoubleUrl => "Percent-encode twice",
            Method::Html => "Escape & < > \" ' as HTML entities",
            Method::HtmlHex => "Every byte as &#xHH;",
            Method::HtmlDec => "Every byte as &#DD;",
            Method::Base64 => "Standard base64 with = padding",
            Method::Hex => "Every byte as \\xHH",
            Method::Octal => "Every byte as \\OOO (unpadded)",
            Method::Rot13 => "Rotate ASCII letters by 13",
            Method::MixedCase => "Lowercase even positions, uppercase odd positions",
            Method::Unicode => "Every byte as \\u00HH",
        }
    }

    /// Apply this method to `input`, returning a freshly allocated output
    pub fn apply(self, input: &[u8]) -> Vec<u8> {
        match self {
            Method::Url => transform::url_encode(input),
            Method::DoubleUrl => transform::double_url_encode(input),
            Method::Html => transform::html_escape(input),
            Method::HtmlHex => transform::html_hex_encode(input),
            Method::HtmlDec => transform::html_dec_encode(input),
            Method::Base64 => transform::base64_encode(input),
            Method::Hex => transform::hex_escape(input),
            Method::Octal => transform::octal_escape(input),
            Method::Rot13 => transform::rot13(input),
            Method::MixedCase => transform::mixed_case(input),
            Method::Unicode => transform::unicode_escape(input),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Method {
    type Err = Encod3rError;

    /// Exact, case-sensitive match on the external identifier.
    fn from_str(s: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| Encod3rError::UnknownMethod(s.to_string()))
    }
}
