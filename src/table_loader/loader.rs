use csv::{ReaderBuilder, StringRecordsIntoIter};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::TableLoaderError;
use super::row::Row;

//─────────────────────────────────────────────────────────────────────────────

/// Lazily yields the rows of a delimited tabular source, one per record.
pub struct TableReader<R: Read> {
    source: String,
    records: StringRecordsIntoIter<R>,
}

impl<R: Read> TableReader<R> {
    /// Wraps any byte source. `source` names it in error messages.
    pub fn new(source: impl Into<String>, input: R) -> Self {
        // Rows may differ in width; there is no header line.
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        Self {
            source: source.into(),
            records: reader.into_records(),
        }
    }
}

impl<R: Read> Iterator for TableReader<R> {
    type Item = Result<Row, TableLoaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map(|record| Row::from(&record))
                .map_err(|e| TableLoaderError::Record(self.source.clone(), e)),
        )
    }
}

/// Opens a tabular file for row-by-row reading.
pub fn open_table(file_path: &Path) -> Result<TableReader<File>, TableLoaderError> {
    let name = file_path.display().to_string();
    let file = File::open(file_path).map_err(|e| TableLoaderError::Open(name.clone(), e))?;
    Ok(TableReader::new(name, file))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Row> {
        TableReader::new("inline", text.as_bytes())
            .collect::<Result<_, _>>()
            .expect("inline input parses")
    }

    #[test]
    fn accepts_ragged_rows() {
        let parsed = rows("a,b,c\n ,d\ne\n");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].cells().len(), 3);
        assert_eq!(parsed[1].cells(), &[" ".to_string(), "d".to_string()]);
        assert_eq!(parsed[2].cells().len(), 1);
    }

    #[test]
    fn quoted_cells_keep_delimiters() {
        let parsed = rows("\"x, y\",z\n");
        assert_eq!(parsed[0].cells(), &["x, y".to_string(), "z".to_string()]);
    }

    #[test]
    fn invalid_utf8_is_a_record_error() {
        let bytes: &[u8] = b"ok\n\xff\xfe,bad\n";
        let results: Vec<_> = TableReader::new("bytes", bytes).collect();
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(TableLoaderError::Record(ref source, _)) if source == "bytes"
        ));
    }

    #[test]
    fn opens_a_file_row_by_row() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tree.csv");
        std::fs::write(&path, "Title\n\na,b\n").expect("write fixture");
        let parsed: Vec<Row> = open_table(&path)
            .expect("file opens")
            .collect::<Result<_, _>>()
            .expect("file parses");
        assert_eq!(parsed, vec![Row::new(["Title"]), Row::new(["a", "b"])]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let result = open_table(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(TableLoaderError::Open(_, _))));
    }
}
