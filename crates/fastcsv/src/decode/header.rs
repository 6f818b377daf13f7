/// Split the header row off the assembled rows.
///
/// Labels are taken verbatim, duplicates preserved positionally. Zero rows
/// with `has_header` set yields empty headers and no data rows.
pub(crate) fn split(mut rows: Vec<Vec<String>>, has_header: bool) -> (Vec<String>, Vec<Vec<String>>) {
    if !has_header || rows.is_empty() {
        return (Vec::new(), rows);
    }
    let headers = rows.remove(0);
    (headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn first_row_becomes_headers() {
        let (headers, data) = split(owned(&[&["name", "age"], &["John", "25"]]), true);
        assert_eq!(headers, vec!["name", "age"]);
        assert_eq!(data, owned(&[&["John", "25"]]));
    }

    #[test]
    fn no_header_passes_rows_through() {
        let (headers, data) = split(owned(&[&["a", "b"]]), false);
        assert!(headers.is_empty());
        assert_eq!(data, owned(&[&["a", "b"]]));
    }

    #[test]
    fn zero_rows_yield_empty_headers() {
        let (headers, data) = split(Vec::new(), true);
        assert!(headers.is_empty());
        assert!(data.is_empty());
    }
}
