use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unterminated quoted field opened at line {line}, byte {offset}")]
    UnterminatedQuote { line: usize, offset: usize },

    #[error("record mapping requires a header row")]
    NoHeader,
}

pub type Result<T> = core::result::Result<T, Error>;
