use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("need an argument of input file.")]
    Usage,
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Table loading error: {0}")]
    TableLoad(#[from] crate::table_loader::TableLoaderError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}
