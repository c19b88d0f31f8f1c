use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::country::CountryTable;
use crate::network::{BulletinClient, Fetch, FetchConfig};
use crate::parse::BulletinParser;
use crate::pdftotext::PdfTextExtractor;
use crate::record::OutbreakRecord;
use crate::Result;

/// Where a bulletin comes from: a URL to download, a local PDF, or
/// already-extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    Url(String),
    Pdf(PathBuf),
    Text(PathBuf),
}

impl ReportSource {
    /// Resolve a command-line report argument.
    #[must_use]
    pub fn resolve(report: &str) -> Self {
        if report.starts_with("http://") || report.starts_with("https://") {
            return Self::Url(report.to_string());
        }

        let path = PathBuf::from(report);
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf {
            Self::Pdf(path)
        } else {
            Self::Text(path)
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunStats {
    pub records: usize,
    pub stray_tokens: usize,
    pub duration_ms: u64,
}

pub struct PipelineOutput {
    pub records: Vec<OutbreakRecord>,
    pub stats: RunStats,
}

/// One-pass orchestration: resolve the source to text, parse the text
/// to records.
pub struct Pipeline {
    countries: CountryTable,
    fetcher: Box<dyn Fetch>,
    pdftotext: Option<PathBuf>,
}

impl Pipeline {
    pub fn new() -> Result<Self> {
        Ok(Self {
            countries: CountryTable::afro(),
            fetcher: Box::new(BulletinClient::new(FetchConfig::default())?),
            pdftotext: None,
        })
    }

    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Box<dyn Fetch>) -> Self {
        self.fetcher = fetcher;
        self
    }

    #[must_use]
    pub fn with_pdftotext(mut self, binary: PathBuf) -> Self {
        self.pdftotext = Some(binary);
        self
    }

    pub async fn run(&self, source: &ReportSource) -> Result<PipelineOutput> {
        let start = Instant::now();

        let text = self.resolve_text(source).await?;
        let output = BulletinParser::new(&self.countries).parse(&text);

        let stats = RunStats {
            records: output.records.len(),
            stray_tokens: output.stray_tokens,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        tracing::info!(
            records = stats.records,
            duration_ms = stats.duration_ms,
            "parsed bulletin"
        );

        Ok(PipelineOutput {
            records: output.records,
            stats,
        })
    }

    async fn resolve_text(&self, source: &ReportSource) -> Result<String> {
        match source {
            ReportSource::Url(url) => {
                tracing::info!(%url, "downloading bulletin");
                let bytes = self.fetcher.fetch(url).await?;

                let workdir = tempfile::tempdir()?;
                let pdf_path = workdir.path().join("bulletin.pdf");
                tokio::fs::write(&pdf_path, &bytes).await?;

                Ok(self.extractor()?.extract(&pdf_path)?)
            }
            ReportSource::Pdf(path) => Ok(self.extractor()?.extract(path)?),
            ReportSource::Text(path) => {
                let bytes = tokio::fs::read(path).await?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }

    /// The extractor is only located when a PDF actually needs
    /// converting, so text-only runs work without poppler installed.
    fn extractor(&self) -> Result<PdfTextExtractor> {
        match &self.pdftotext {
            Some(binary) => Ok(PdfTextExtractor::with_binary(binary.clone())),
            None => Ok(PdfTextExtractor::locate()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{ClientError, ClientResult};
    use crate::Error;
    use std::io::Write;

    #[test]
    fn test_source_resolution() {
        assert_eq!(
            ReportSource::resolve("https://www.afro.who.int/bulletin.pdf"),
            ReportSource::Url("https://www.afro.who.int/bulletin.pdf".into())
        );
        assert_eq!(
            ReportSource::resolve("bulletin.pdf"),
            ReportSource::Pdf(PathBuf::from("bulletin.pdf"))
        );
        assert_eq!(
            ReportSource::resolve("bulletin.PDF"),
            ReportSource::Pdf(PathBuf::from("bulletin.PDF"))
        );
        assert_eq!(
            ReportSource::resolve("bulletin.txt"),
            ReportSource::Text(PathBuf::from("bulletin.txt"))
        );
        assert_eq!(
            ReportSource::resolve("extracted"),
            ReportSource::Text(PathBuf::from("extracted"))
        );
    }

    #[tokio::test]
    async fn test_run_over_extracted_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "All events currently being monitored by WHO AFRO:\n\n\
             Kenya\n\nCholera\n\nG1\n\n10-Jan-21\n\n5-Jan-21\n\n21-Mar-21\n\n\
             100\n\n90\n\n2\n\n2.0%\n\nCases were reported from two counties.\n"
        )
        .unwrap();

        let pipeline = Pipeline::new().unwrap();
        let output = pipeline
            .run(&ReportSource::Text(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(output.stats.records, 1);
        assert_eq!(output.records[0].country, "Kenya");
        assert_eq!(output.records[0].iso3.as_deref(), Some("KEN"));
    }

    #[tokio::test]
    async fn test_missing_text_file_is_an_io_error() {
        let pipeline = Pipeline::new().unwrap();
        let result = pipeline
            .run(&ReportSource::Text(PathBuf::from("/no/such/bulletin.txt")))
            .await;

        assert!(matches!(result, Err(Error::Io(_))));
    }

    struct FailingFetch;

    #[async_trait::async_trait]
    impl Fetch for FailingFetch {
        async fn fetch(&self, url: &str) -> ClientResult<Vec<u8>> {
            Err(ClientError::InvalidUrl(url.to_string()))
        }
    }

    #[tokio::test]
    async fn test_fetch_errors_surface() {
        let pipeline = Pipeline::new().unwrap().with_fetcher(Box::new(FailingFetch));
        let result = pipeline
            .run(&ReportSource::Url("https://example.com/b.pdf".into()))
            .await;

        assert!(matches!(result, Err(Error::Fetch(_))));
    }
}
