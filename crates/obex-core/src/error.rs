use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(#[from] crate::network::ClientError),

    #[error("Text extraction error: {0}")]
    Extract(#[from] crate::pdftotext::ExtractError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
