use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use obex_core::report::{write_csv, write_json};
use obex_core::{OutbreakRecord, Pipeline, ReportSource};

use super::Format;

pub async fn run(
    report: &str,
    output: Option<&Path>,
    format: Format,
    pdftotext: Option<PathBuf>,
) -> Result<()> {
    let source = ReportSource::resolve(report);

    let mut pipeline = Pipeline::new()?;
    if let Some(binary) = pdftotext {
        pipeline = pipeline.with_pdftotext(binary);
    }

    let run = pipeline
        .run(&source)
        .await
        .with_context(|| format!("failed to extract report '{report}'"))?;

    eprintln!(
        "Extracted {} records in {} ms",
        run.stats.records, run.stats.duration_ms
    );

    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            write_records(&run.records, file, format)?;
        }
        None => write_records(&run.records, io::stdout().lock(), format)?,
    }

    Ok(())
}

fn write_records<W: Write>(records: &[OutbreakRecord], writer: W, format: Format) -> Result<()> {
    match format {
        Format::Csv => write_csv(records, writer)?,
        Format::Json => write_json(records, writer)?,
    }
    Ok(())
}
