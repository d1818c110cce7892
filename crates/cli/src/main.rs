//! # animdna: 80s Animation Prompts From a PDF
//!
//! Thin entry point for the `animdna` command-line interface. All logic lives
//! in the `animdna_cli` library crate.

use animdna_cli::{run, Cli};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the rendered output.
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("animdna=warn".parse()?)
                .add_directive("animdna_pdf=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("[animdna error] {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
