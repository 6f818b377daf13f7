#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;

mod decode;
mod parser;

pub use crate::decode::records::{Record, Records};
pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::parser::{CsvParser, parse, parse_to_records};
