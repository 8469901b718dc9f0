use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid project root: {0}")]
    InvalidRoot(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
