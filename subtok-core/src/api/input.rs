//! Text sources accepted by [`Tokenizer::process`](crate::Tokenizer::process)

use crate::error::{Error, Result};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the text to tokenize comes from
///
/// Every source must decode as UTF-8; anything else is an
/// [`Error::Infrastructure`].
pub enum Input {
    Text(String),
    File(PathBuf),
    Bytes(Vec<u8>),
    Reader(Box<dyn Read + Send + Sync>),
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Short description of the source for log lines
    pub fn describe(&self) -> String {
        match self {
            Input::Text(_) => "text".to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Bytes(_) => "bytes".to_string(),
            Input::Reader(_) => "reader".to_string(),
        }
    }

    /// Decode the whole source into one string
    pub(crate) fn into_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Bytes(bytes) => decode(bytes),
            Input::File(path) => {
                let bytes = std::fs::read(&path).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read file {}: {e}", path.display()))
                })?;
                decode(bytes)
            }
            Input::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|e| Error::Infrastructure(format!("Failed to read input: {e}")))?;
                decode(bytes)
            }
        }
    }
}

fn decode(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::Infrastructure(format!("Input is not UTF-8: {e}")))
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

// Content stays out of debug output; only sizes are shown
impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => write!(f, "Input::Text {{ length: {} }}", text.len()),
            Input::File(path) => write!(f, "Input::File({})", path.display()),
            Input::Bytes(bytes) => write!(f, "Input::Bytes {{ length: {} }}", bytes.len()),
            Input::Reader(_) => f.write_str("Input::Reader"),
        }
    }
}
