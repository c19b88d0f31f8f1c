#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod country;
pub mod error;
pub mod network;
pub mod parse;
pub mod pdftotext;
pub mod pipeline;
pub mod record;
pub mod report;

pub use country::{Country, CountryTable};
pub use error::{Error, Result};
pub use network::{BulletinClient, ClientError, Fetch, FetchConfig};
pub use parse::{parse_bulletin, BulletinParser, ParseOutput};
pub use pdftotext::{ExtractError, PdfTextExtractor};
pub use pipeline::{Pipeline, PipelineOutput, ReportSource, RunStats};
pub use record::OutbreakRecord;
