//! Decoding pipeline: scanner → row assembly → header split → record mapping.

pub(crate) mod header;
pub(crate) mod records;
pub(crate) mod rows;
pub(crate) mod scanner;

use crate::error::Result;
use crate::options::Options;
use scanner::Scanner;

/// Scan and assemble one input into rows; the header row, if any, is still
/// the first row here.
pub(crate) fn parse_rows(input: &str, options: &Options) -> Result<Vec<Vec<String>>> {
    let tokens = Scanner::new(input, options.delimiter_byte());
    rows::assemble(tokens, options.skip_empty_lines)
}
