use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("parse error: {0}")]
    Parse(#[from] confdiff_parse::ParseError),

    #[error("format error: {0}")]
    Format(#[from] confdiff_format::FormatError),
}

pub type DiffResult<T> = Result<T, DiffError>;
