//! Repair of byte-smuggled text in Messenger exports.
//!
//! The export writes every UTF-8 byte of non-ASCII text as its own `\u00XX`
//! escape, so after JSON parsing "ł" arrives as the two characters "Å‚".
//! Recoding maps each character back to the byte it stands for and decodes the
//! resulting byte string under the target encoding.

use serde_json::{Map, Value};

use crate::error::{RecodeError, RecodeErrorKind};

/// Encoding the smuggled bytes are decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TargetEncoding {
    #[default]
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[value(name = "latin1", alias = "iso-8859-1")]
    Latin1,
}

impl TargetEncoding {
    pub fn name(self) -> &'static str {
        match self {
            TargetEncoding::Utf8 => "UTF-8",
            TargetEncoding::Latin1 => "ISO-8859-1",
        }
    }

    fn decode(self, bytes: Vec<u8>) -> Result<String, RecodeError> {
        match self {
            TargetEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| {
                RecodeError::new(RecodeErrorKind::InvalidSequence {
                    encoding: self.name(),
                    valid_up_to: e.utf8_error().valid_up_to(),
                })
            }),
            TargetEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

/// Recode every string in `value`, object keys included. Shape and non-string
/// scalars are preserved.
///
/// # Errors
///
/// Returns a [`RecodeError`] located at the first offending string when a
/// character lies above U+00FF or the bytes are invalid under `encoding`.
pub fn recode(value: Value, encoding: TargetEncoding) -> Result<Value, RecodeError> {
    match value {
        Value::String(s) => recode_str(&s, encoding).map(Value::String),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| recode(item, encoding).map_err(|e| e.within(&format!("[{i}]"))))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut recoded = Map::new();
            for (key, item) in map {
                let new_key =
                    recode_str(&key, encoding).map_err(|e| e.within(&format!(".{key}")))?;
                let new_item =
                    recode(item, encoding).map_err(|e| e.within(&format!(".{new_key}")))?;
                recoded.insert(new_key, new_item);
            }
            Ok(Value::Object(recoded))
        }
        scalar => Ok(scalar),
    }
}

/// Recode a single string: code point -> byte, then decode.
pub fn recode_str(s: &str, encoding: TargetEncoding) -> Result<String, RecodeError> {
    // ASCII maps to itself under both encodings
    if s.is_ascii() {
        return Ok(s.to_owned());
    }

    let mut bytes = Vec::with_capacity(s.len());
    for (offset, ch) in s.chars().enumerate() {
        let byte = u8::try_from(ch).map_err(|_| {
            RecodeError::new(RecodeErrorKind::CodePointOutOfRange { ch, offset })
        })?;
        bytes.push(byte);
    }

    encoding.decode(bytes)
}
