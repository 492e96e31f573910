//! Row model and row reading
//!
//! RFC 4180 compliant parsing via the csv crate, normalized to a fixed column
//! count: short records are padded with `None` (the explicit missing marker,
//! distinct from an empty string) and extra fields are dropped. The reader is
//! a plain iterator with no rewind contract; callers that need a second pass
//! (type inference before rendering) construct a fresh reader over the same
//! text.

use super::dialect::Dialect;

/// A single field value. `None` marks a missing field, which renderers emit
/// as their target's null literal; `Some("")` is an ordinary empty string.
pub type Field = Option<String>;

/// An ordered sequence of fields, positionally aligned with the header set.
pub type Row = Vec<Field>;

/// Build a csv reader honoring the dialect's delimiter, quote, and escape.
fn reader_for<'a>(text: &'a str, dialect: &Dialect) -> csv::Reader<&'a [u8]> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(dialect.delimiter as u8)
        .quote(dialect.quote as u8)
        .has_headers(false)
        .flexible(true);
    if let Some(escape) = dialect.escape {
        builder.escape(Some(escape as u8));
    }
    builder.from_reader(text.as_bytes())
}

/// Parse up to `limit` raw records from `text` without padding.
///
/// Used by header resolution, which needs the first few records verbatim
/// before a column count exists. Unparseable records are skipped.
pub fn read_records(text: &str, dialect: &Dialect, limit: usize) -> Vec<Vec<String>> {
    reader_for(text, dialect)
        .into_records()
        .filter_map(|result| match result {
            Ok(record) => Some(record.iter().map(str::to_string).collect()),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unparseable record");
                None
            }
        })
        .take(limit)
        .collect()
}

/// Iterator of normalized rows over a block of delimited text.
pub struct RowReader<'a> {
    records: csv::StringRecordsIntoIter<&'a [u8]>,
    column_count: usize,
}

impl<'a> RowReader<'a> {
    /// Create a reader over `text`. When `has_header` is set the first
    /// record is consumed and discarded.
    pub fn new(text: &'a str, dialect: &Dialect, column_count: usize, has_header: bool) -> Self {
        let mut records = reader_for(text, dialect).into_records();
        if has_header {
            let _ = records.next();
        }
        Self {
            records,
            column_count,
        }
    }
}

impl Iterator for RowReader<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        loop {
            match self.records.next()? {
                Ok(record) => {
                    let mut row: Row = record
                        .iter()
                        .take(self.column_count)
                        .map(|f| Some(f.to_string()))
                        .collect();
                    row.resize(self.column_count, None);
                    return Some(row);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unparseable record");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str, has_header: bool) -> Vec<Row> {
        RowReader::new(text, &Dialect::default(), 3, has_header).collect()
    }

    #[test]
    fn test_reads_simple_rows() {
        let got = rows("a,b,c\n1,2,3", false);
        assert_eq!(got.len(), 2);
        assert_eq!(got[1], vec![Some("1".into()), Some("2".into()), Some("3".into())]);
    }

    #[test]
    fn test_skips_header_record() {
        let got = rows("a,b,c\n1,2,3", true);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0][0], Some("1".to_string()));
    }

    #[test]
    fn test_short_row_padded_with_none() {
        let got = rows("1,2", false);
        assert_eq!(got[0], vec![Some("1".into()), Some("2".into()), None]);
    }

    #[test]
    fn test_long_row_truncated() {
        let got = rows("1,2,3,4,5", false);
        assert_eq!(got[0].len(), 3);
        assert_eq!(got[0][2], Some("3".to_string()));
    }

    #[test]
    fn test_empty_field_is_not_none() {
        let got = rows("1,,3", false);
        assert_eq!(got[0][1], Some(String::new()));
    }

    #[test]
    fn test_quoted_fields() {
        let got = rows("\"x,y\",2,3", false);
        assert_eq!(got[0][0], Some("x,y".to_string()));
    }

    #[test]
    fn test_custom_quote_character() {
        let dialect = Dialect {
            delimiter: ';',
            quote: '\'',
            ..Dialect::default()
        };
        let got: Vec<Row> = RowReader::new("'a;b';c", &dialect, 2, false).collect();
        assert_eq!(got[0], vec![Some("a;b".into()), Some("c".into())]);
    }

    #[test]
    fn test_read_records_limit() {
        let recs = read_records("a,b\n1,2\n3,4", &Dialect::default(), 2);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0], vec!["a", "b"]);
    }
}
