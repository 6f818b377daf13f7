#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parser options, validated once before any scanning starts.
///
/// With the `serde` feature these resolve from untyped option bags the way
/// callers hand them over: unknown names are ignored and missing names take
/// the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Field delimiter (default: `,`)
    pub delimiter: char,
    /// Treat the first row as column labels (default: true)
    pub has_header: bool,
    /// Drop blank physical lines instead of producing empty rows (default: true)
    pub skip_empty_lines: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            skip_empty_lines: true,
        }
    }
}

impl Options {
    /// Set the field delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the first row contains headers (builder pattern)
    pub fn has_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Set whether blank lines are dropped (builder pattern)
    pub fn skip_empty_lines(mut self, skip: bool) -> Self {
        self.skip_empty_lines = skip;
        self
    }

    // The scanner walks bytes, so the delimiter must stay a single byte.
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }
        match self.delimiter {
            '"' => Err(Error::Config(
                "delimiter must not be the quote character".to_string(),
            )),
            '\n' | '\r' => Err(Error::Config(
                "delimiter must not be a line terminator".to_string(),
            )),
            _ => Ok(()),
        }
    }

    pub(crate) fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}
