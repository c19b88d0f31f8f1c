use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("pdftotext not found on PATH: {0}")]
    BinaryNotFound(#[from] which::Error),
    #[error("pdftotext exited with {status}: {stderr}")]
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Runs the poppler `pdftotext` tool against a downloaded bulletin.
///
/// The bulletins are laid-out tables; without `-layout`, pdftotext
/// emits one table cell per line, which is exactly the stream the
/// parser consumes.
pub struct PdfTextExtractor {
    binary: PathBuf,
}

impl PdfTextExtractor {
    /// Locate `pdftotext` on PATH.
    pub fn locate() -> ExtractResult<Self> {
        Ok(Self {
            binary: which::which("pdftotext")?,
        })
    }

    /// Use an explicit binary instead of searching PATH.
    #[must_use]
    pub fn with_binary(binary: PathBuf) -> Self {
        Self { binary }
    }

    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Convert a PDF to text and return its contents.
    pub fn extract(&self, pdf: &Path) -> ExtractResult<String> {
        let workdir = tempfile::tempdir()?;
        let text_path = workdir.path().join("bulletin.txt");

        // -nopgbrk: form-feed page markers would land inside table
        // cells and break the blank-line column walk.
        let output = Command::new(&self.binary)
            .arg("-nopgbrk")
            .arg(pdf)
            .arg(&text_path)
            .output()?;

        if !output.status.success() {
            return Err(ExtractError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let bytes = std::fs::read(&text_path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
