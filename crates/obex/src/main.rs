use anyhow::Result;
use clap::Parser;

use obex::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    dispatch(cli.command).await
}

async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Extract {
            report,
            output,
            format,
            pdftotext,
        } => obex::cli::extract::run(&report, output.as_deref(), format, pdftotext).await,
        Commands::Countries => obex::cli::countries::run(),
    }
}
