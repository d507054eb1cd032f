use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for reading tabular input.
/// Wraps whatever the underlying file and CSV primitives report; rows are
/// never validated beyond that.
#[derive(Error, Debug)]
pub enum TableLoaderError {
    /// Error when opening the input file.
    #[error("Failed to open file '{0}': {1}")]
    Open(String, std::io::Error),

    /// Error when a record cannot be read (I/O failure, invalid UTF-8, ...).
    #[error("Failed to read a row from '{0}': {1}")]
    Record(String, csv::Error),
}
