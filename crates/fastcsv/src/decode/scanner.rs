use crate::error::{Error, Result};

/// What closed a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Terminator {
    /// The delimiter; more fields follow on this row.
    Field,
    /// A line terminator (`\n` or `\r\n`).
    Row,
    /// End of input.
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldToken {
    pub value: String,
    /// The field began with an opening quote. A quoted empty field is not a
    /// blank line, so the assembler needs this bit for the empty-line policy.
    pub quoted: bool,
    pub terminator: Terminator,
}

/// Single-pass field scanner over one complete input buffer.
///
/// States: unquoted accumulation, quoted accumulation, and quote-after-quote
/// resolution (`""` collapses to one literal quote, anything else closes the
/// quoted section). A quoted field may span physical lines. `\r\n` and bare
/// `\n` are one row terminator; a `\r` not followed by `\n` is a literal
/// character in unquoted fields.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    delimiter: u8,
    // A delimiter closed the previous field, so one more field is owed even
    // if the input ends here ("a," is two fields).
    after_delimiter: bool,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, delimiter: u8) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            delimiter,
            after_delimiter: false,
            failed: false,
        }
    }

    fn scan_field(&mut self) -> Result<FieldToken> {
        let mut value = String::new();
        let mut quoted = false;

        if self.input.as_bytes()[self.pos] == b'"' {
            quoted = true;
            let open_line = self.line;
            let open_offset = self.pos;
            self.pos += 1;
            self.read_quoted(&mut value, open_line, open_offset)?;
        }
        // Everything up to the next delimiter or line terminator. For a
        // quoted field this is normally empty; a non-empty tail here is the
        // lenient handling of characters trailing a closing quote, appended
        // literally.
        let terminator = self.read_unquoted(&mut value);
        self.after_delimiter = terminator == Terminator::Field;
        Ok(FieldToken {
            value,
            quoted,
            terminator,
        })
    }

    fn read_quoted(&mut self, value: &mut String, open_line: usize, open_offset: usize) -> Result<()> {
        loop {
            let start = self.pos;
            let Some(rel) = find_quote(&self.input.as_bytes()[start..]) else {
                return Err(Error::UnterminatedQuote {
                    line: open_line,
                    offset: open_offset,
                });
            };
            let idx = start + rel;
            let span = &self.input[start..idx];
            self.line += span.bytes().filter(|&b| b == b'\n').count();
            value.push_str(span);
            self.pos = idx + 1;
            if self.input.as_bytes().get(self.pos) == Some(&b'"') {
                // Doubled quote: one literal quote, still inside the field.
                value.push('"');
                self.pos += 1;
            } else {
                return Ok(());
            }
        }
    }

    fn read_unquoted(&mut self, value: &mut String) -> Terminator {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        match find_delimiter_or_newline(&bytes[start..], self.delimiter) {
            None => {
                value.push_str(&self.input[start..]);
                self.pos = bytes.len();
                Terminator::Eof
            }
            Some(rel) if bytes[start + rel] == self.delimiter => {
                value.push_str(&self.input[start..start + rel]);
                self.pos = start + rel + 1;
                Terminator::Field
            }
            Some(rel) => {
                // Newline. A '\r' directly before it belongs to the
                // terminator, not the field.
                let idx = start + rel;
                let mut end = idx;
                if end > start && bytes[end - 1] == b'\r' {
                    end -= 1;
                }
                value.push_str(&self.input[start..end]);
                self.pos = idx + 1;
                self.line += 1;
                Terminator::Row
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<FieldToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if self.pos >= self.input.len() {
            if self.after_delimiter {
                self.after_delimiter = false;
                return Some(Ok(FieldToken {
                    value: String::new(),
                    quoted: false,
                    terminator: Terminator::Eof,
                }));
            }
            return None;
        }
        match self.scan_field() {
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_quote(haystack: &[u8]) -> Option<usize> {
    memchr::memchr(b'"', haystack)
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_quote(haystack: &[u8]) -> Option<usize> {
    haystack.iter().position(|&b| b == b'"')
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_delimiter_or_newline(haystack: &[u8], delimiter: u8) -> Option<usize> {
    memchr::memchr2(delimiter, b'\n', haystack)
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_delimiter_or_newline(haystack: &[u8], delimiter: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == delimiter || b == b'\n')
}
