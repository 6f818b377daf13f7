use indexmap::IndexMap;

/// Label→value mapping for one data row, in header order.
///
/// Duplicate header labels collapse to one key; the rightmost occurrence's
/// value wins.
pub type Record = IndexMap<String, String>;

/// Output of a record-mapping parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Records {
    /// Header labels of this parse, in source order (duplicates included).
    pub headers: Vec<String>,
    /// One record per data row.
    pub records: Vec<Record>,
    /// Rows whose field count differed from the header width. Shorter rows
    /// were padded with empty values, longer rows had trailing fields
    /// dropped; neither is an error.
    pub ragged_rows: usize,
}

impl Records {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl IntoIterator for Records {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Zip headers with each data row positionally.
pub(crate) fn to_records(headers: &[String], rows: Vec<Vec<String>>) -> (Vec<Record>, usize) {
    let mut ragged_rows = 0;
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        if row.len() != headers.len() {
            ragged_rows += 1;
        }
        let mut fields = row.into_iter();
        let mut record = Record::with_capacity(headers.len());
        for label in headers {
            record.insert(label.clone(), fields.next().unwrap_or_default());
        }
        records.push(record);
    }
    (records, ragged_rows)
}
