use crate::decode::{self, header, records};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::{Record, Records};

/// Reusable parser instance.
///
/// Carries validated options plus a snapshot of the headers and ragged-row
/// count from the most recently completed parse. Each parse is an
/// independent, stateless pass over its input; a failed parse leaves the
/// previous snapshot intact.
///
/// # Examples
///
/// ```
/// use fastcsv::{CsvParser, Options};
///
/// let mut parser = CsvParser::new(Options::default()).unwrap();
/// let records = parser.parse_to_records("name,age\nJohn,25").unwrap();
/// assert_eq!(parser.headers(), ["name", "age"]);
/// assert_eq!(records[0]["age"], "25");
/// ```
pub struct CsvParser {
    options: Options,
    headers: Vec<String>,
    ragged_rows: usize,
}

impl CsvParser {
    /// Create a parser, rejecting invalid configuration before any parsing.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            headers: Vec::new(),
            ragged_rows: 0,
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse into rows of fields.
    ///
    /// When `has_header` is set the first row is captured as headers and
    /// excluded from the returned data rows.
    pub fn parse(&mut self, input: &str) -> Result<Vec<Vec<String>>> {
        let rows = decode::parse_rows(input, &self.options)?;
        let (headers, data) = header::split(rows, self.options.has_header);
        self.headers = headers;
        Ok(data)
    }

    /// Parse into label→value records; requires `has_header`.
    pub fn parse_to_records(&mut self, input: &str) -> Result<Vec<Record>> {
        if !self.options.has_header {
            return Err(Error::NoHeader);
        }
        let data = self.parse(input)?;
        let (recs, ragged_rows) = records::to_records(&self.headers, data);
        self.ragged_rows = ragged_rows;
        Ok(recs)
    }

    /// Header labels from the most recently completed parse.
    ///
    /// Empty before the first parse and when `has_header` is off.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Ragged-row count from the most recent record mapping.
    pub fn ragged_rows(&self) -> usize {
        self.ragged_rows
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            options: Options::default(),
            headers: Vec::new(),
            ragged_rows: 0,
        }
    }
}

/// Parse into rows of fields with default-or-given options (quick-call form).
pub fn parse(input: &str, options: &Options) -> Result<Vec<Vec<String>>> {
    let mut parser = CsvParser::new(*options)?;
    parser.parse(input)
}

/// Parse into records, returning headers and the ragged-row count alongside
/// the mappings (quick-call form).
pub fn parse_to_records(input: &str, options: &Options) -> Result<Records> {
    let mut parser = CsvParser::new(*options)?;
    let records = parser.parse_to_records(input)?;
    Ok(Records {
        headers: parser.headers.clone(),
        records,
        ragged_rows: parser.ragged_rows,
    })
}
