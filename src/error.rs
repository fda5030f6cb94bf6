use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganPipeError {
    /// Malformed LBA token in a trace or layout file.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid layout packing request.
    #[error("layout error: {0}")]
    Layout(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
