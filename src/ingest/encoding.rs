//! Strict decoding of uploaded bytes.
//!
//! Decoding never substitutes replacement characters: bytes that are not
//! valid in the declared encoding fail with [`JtError::Decode`] so the caller
//! can retry with another choice.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use encoding_rs::WINDOWS_1252;
use serde::{Deserialize, Serialize};

use crate::error::{JtError, Result};

/// Character encodings an upload may be declared as.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
pub enum EncodingChoice {
    #[default]
    #[serde(rename = "utf-8")]
    #[value(name = "utf-8")]
    Utf8,
    #[serde(rename = "latin-1")]
    #[value(name = "latin-1")]
    Latin1,
    #[serde(rename = "iso-8859-1")]
    #[value(name = "iso-8859-1")]
    Iso8859_1,
    #[serde(rename = "cp1252")]
    #[value(name = "cp1252")]
    Cp1252,
    #[serde(rename = "windows-1252")]
    #[value(name = "windows-1252")]
    Windows1252,
}

impl EncodingChoice {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
            Self::Iso8859_1 => "iso-8859-1",
            Self::Cp1252 => "cp1252",
            Self::Windows1252 => "windows-1252",
        }
    }
}

impl fmt::Display for EncodingChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EncodingChoice {
    type Err = JtError;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| JtError::InvalidInput(format!("unsupported encoding: {s}")))
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Bytes with no assigned character in Windows-1252.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Decode `bytes` as `encoding`, failing on any invalid byte sequence.
pub fn decode(bytes: &[u8], encoding: EncodingChoice) -> Result<String> {
    match encoding {
        EncodingChoice::Utf8 => {
            let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            std::str::from_utf8(body)
                .map(str::to_owned)
                .map_err(|err| JtError::Decode {
                    encoding: encoding.label().to_string(),
                    offset: err.valid_up_to() + (bytes.len() - body.len()),
                })
        }
        // Every byte is a Latin-1 code point.
        EncodingChoice::Latin1 | EncodingChoice::Iso8859_1 => {
            Ok(bytes.iter().copied().map(char::from).collect())
        }
        EncodingChoice::Cp1252 | EncodingChoice::Windows1252 => {
            if let Some(offset) = bytes.iter().position(|b| CP1252_UNDEFINED.contains(b)) {
                return Err(JtError::Decode {
                    encoding: encoding.label().to_string(),
                    offset,
                });
            }
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            Ok(text.into_owned())
        }
    }
}
