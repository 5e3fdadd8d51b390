//! Data sources.
//!
//! A [`Source`] yields a header followed by rows of raw string fields. The
//! engine reads rows one at a time and never needs the whole table in
//! memory, so file-backed sources stream from disk.

use crate::ValidationError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tabval_core::ConfigError;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Row iterator produced by an opened source.
pub type Rows<'a> = Box<dyn Iterator<Item = Result<Vec<String>, ValidationError>> + 'a>;

/// An opened source: its header plus a stream of rows.
pub struct Table<'a> {
    /// Column names in source order
    pub header: Vec<String>,
    /// Data rows, header excluded
    pub rows: Rows<'a>,
}

/// Something that can be opened as a table of string fields.
pub trait Source {
    /// Human-readable name used in reports and logs.
    fn describe(&self) -> String;

    /// Opens the source, reading its header.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Io` or `ValidationError::Csv` if the source
    /// cannot be opened or its header cannot be parsed.
    fn open(&self) -> Result<Table<'_>, ValidationError>;
}

/// Converts a delimiter character to the single byte the CSV reader needs.
///
/// # Errors
///
/// Returns `ConfigError::InvalidParameter` for non-ASCII delimiters.
pub fn delimiter_byte(delimiter: char) -> Result<u8, ConfigError> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            ConfigError::invalid_parameter(
                "delimiter",
                format!("'{}' is not a single-byte ASCII character", delimiter),
            )
        })
}

/// Reads the header and wraps the remaining records as a row stream.
fn read_table<'a, R: Read + 'a>(
    reader: R,
    delimiter: u8,
    source_name: String,
) -> Result<Table<'a>, ValidationError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = reader
        .headers()
        .map_err(|e| ValidationError::csv(&source_name, e))?
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            if idx == 0 {
                column.trim_start_matches('\u{feff}').to_string()
            } else {
                column.to_string()
            }
        })
        .collect::<Vec<_>>();

    // A lone empty header field means the input had no header line at all.
    let header = if header.len() == 1 && header[0].is_empty() {
        Vec::new()
    } else {
        header
    };

    let rows = reader.into_records().map(move |record| {
        record
            .map(|record| record.iter().map(String::from).collect())
            .map_err(|e| ValidationError::csv(&source_name, e))
    });

    Ok(Table {
        header,
        rows: Box::new(rows),
    })
}

/// A delimited text file on disk.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
    delimiter: u8,
}

impl CsvFile {
    /// Creates a new comma-delimited file source.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for CsvFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Table<'_>, ValidationError> {
        let file = File::open(&self.path).map_err(|e| ValidationError::io(self.describe(), e))?;
        read_table(file, self.delimiter, self.describe())
    }
}

/// Delimited text held in memory.
#[derive(Debug, Clone)]
pub struct CsvString {
    content: String,
    delimiter: u8,
}

impl CsvString {
    /// Creates a new comma-delimited in-memory source.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Source for CsvString {
    fn describe(&self) -> String {
        "<string>".to_string()
    }

    fn open(&self) -> Result<Table<'_>, ValidationError> {
        read_table(self.content.as_bytes(), self.delimiter, self.describe())
    }
}

/// Rows already split into fields.
///
/// # Example
///
/// ```rust
/// use tabval_validator::{DataSet, Source};
///
/// let dataset = DataSet::new(["id", "name"])
///     .row(["1", "Alice"])
///     .row(["2", "Bob"]);
///
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.header(), &["id".to_string(), "name".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Creates an empty dataset with the given header.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn row<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(values);
        self
    }

    /// Appends a row in place.
    pub fn push<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
    }

    /// Returns the header.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Source for DataSet {
    fn describe(&self) -> String {
        format!("<dataset: {} rows>", self.rows.len())
    }

    fn open(&self) -> Result<Table<'_>, ValidationError> {
        Ok(Table {
            header: self.header.clone(),
            rows: Box::new(self.rows.iter().cloned().map(Ok)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn collect(table: Table<'_>) -> (Vec<String>, Vec<Vec<String>>) {
        let rows = table.rows.collect::<Result<Vec<_>, _>>().unwrap();
        (table.header, rows)
    }

    #[test]
    fn test_csv_string_keeps_fields_verbatim() {
        let source = CsvString::new("a,b\n 1 ,\"x, y\"\n,\n");
        let (header, rows) = collect(source.open().unwrap());

        assert_eq!(header, vec!["a", "b"]);
        assert_eq!(
            rows,
            vec![
                vec![" 1 ".to_string(), "x, y".to_string()],
                vec![String::new(), String::new()],
            ]
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let source = CsvString::new("a|b\n1|2\n").with_delimiter(b'|');
        let (header, rows) = collect(source.open().unwrap());

        assert_eq!(header, vec!["a", "b"]);
        assert_eq!(rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let (header, rows) = collect(CsvString::new("").open().unwrap());
        assert!(header.is_empty());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let (header, _) = collect(CsvString::new("\u{feff}id,name\n").open().unwrap());
        assert_eq!(header, vec!["id", "name"]);
    }

    #[test]
    fn test_ragged_rows_are_passed_through() {
        let (_, rows) = collect(CsvString::new("a,b\n1\n").open().unwrap());
        assert_eq!(rows, vec![vec!["1".to_string()]]);
    }

    #[test]
    fn test_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id;name").unwrap();
        writeln!(file, "1;Alice").unwrap();
        file.flush().unwrap();

        let source = CsvFile::new(file.path()).with_delimiter(b';');
        assert_eq!(source.describe(), file.path().display().to_string());

        let (header, rows) = collect(source.open().unwrap());
        assert_eq!(header, vec!["id", "name"]);
        assert_eq!(rows, vec![vec!["1".to_string(), "Alice".to_string()]]);
    }

    #[test]
    fn test_missing_file() {
        let source = CsvFile::new("/nonexistent/data.csv");
        let result = source.open();
        assert!(matches!(result, Err(ValidationError::Io { .. })));
    }

    #[test]
    fn test_dataset_source() {
        let dataset = DataSet::new(["x"]).row(["1"]).row(["2"]);
        assert_eq!(dataset.describe(), "<dataset: 2 rows>");

        let (header, rows) = collect(dataset.open().unwrap());
        assert_eq!(header, vec!["x"]);
        assert_eq!(rows, dataset.rows());
    }

    #[test]
    fn test_dataset_push() {
        let mut dataset = DataSet::new(["x", "y"]);
        assert!(dataset.is_empty());

        dataset.push(["1", "2"]);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rows(), &[vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn test_delimiter_byte() {
        assert_eq!(delimiter_byte(';').unwrap(), b';');
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
        assert!(delimiter_byte('§').is_err());
    }
}
