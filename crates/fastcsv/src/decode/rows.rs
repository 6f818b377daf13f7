use super::scanner::{FieldToken, Terminator};
use crate::error::Result;

/// Group the token stream into rows.
///
/// With `skip_empty_lines` a row that is exactly one unquoted empty field (a
/// blank physical line) is dropped; `,,` and `""` rows are kept. A scan error
/// propagates and no rows are returned.
pub(crate) fn assemble<I>(tokens: I, skip_empty_lines: bool) -> Result<Vec<Vec<String>>>
where
    I: Iterator<Item = Result<FieldToken>>,
{
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut saw_quoted = false;

    for token in tokens {
        let FieldToken {
            value,
            quoted,
            terminator,
        } = token?;
        saw_quoted |= quoted;
        current.push(value);
        if terminator == Terminator::Field {
            continue;
        }
        let blank = skip_empty_lines && !saw_quoted && current.len() == 1 && current[0].is_empty();
        if blank {
            current.clear();
        } else {
            rows.push(core::mem::take(&mut current));
        }
        saw_quoted = false;
    }
    Ok(rows)
}
