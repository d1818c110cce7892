//! # `animdna-cli` Library Crate
//!
//! Runs the extraction and enhancement pipeline against a file on disk and
//! renders the result as the export document, JSON, or bare extracted text.

use animdna::{render_export, EnhancerSettings, PromptEnhancer, RngChoices, SelectionMode};
use animdna_pdf::{process_document, process_document_with, DocumentPrompts, TextExtractor};
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

// --- CLI Argument Structs ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the PDF to read.
    pub input: PathBuf,
    /// Write the result here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// What to render.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Export)]
    pub format: OutputFormat,
    /// How descriptor phrases are picked.
    #[arg(long, value_enum, env = "ANIMDNA_ENHANCER__SELECTION", default_value_t = Selection::Random)]
    pub selection: Selection,
    /// Seed for reproducible phrase picks. Overrides `--selection`.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Distinct phrases taken from each descriptor category.
    #[arg(long, default_value_t = 1)]
    pub phrases: usize,
    /// Text inserted before each appended phrase.
    #[arg(long, default_value = ", ")]
    pub separator: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The plain-text export document.
    Export,
    /// The enhanced prompts as pretty JSON.
    Json,
    /// Only the extracted text.
    Text,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Random,
    Deterministic,
}

impl From<Selection> for SelectionMode {
    fn from(value: Selection) -> Self {
        match value {
            Selection::Random => SelectionMode::Random,
            Selection::Deterministic => SelectionMode::Deterministic,
        }
    }
}

impl Cli {
    /// Enhancer settings assembled from the flags.
    pub fn enhancer_settings(&self) -> EnhancerSettings {
        EnhancerSettings {
            selection: self.selection.into(),
            phrases_per_category: self.phrases,
            separator: self.separator.clone(),
        }
    }
}

// --- Public Entrypoint ---

/// Reads the input file, renders it, and writes the result.
pub async fn run(cli: Cli) -> Result<()> {
    let bytes = tokio::fs::read(&cli.input)
        .await
        .with_context(|| format!("Failed to read input file '{}'", cli.input.display()))?;
    if bytes.is_empty() {
        bail!("Input file '{}' is empty", cli.input.display());
    }

    let rendered = render(&cli, &bytes)?;

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, &rendered)
                .await
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            info!("Wrote {} bytes to '{}'.", rendered.len(), path.display());
        }
        None => {
            if rendered.ends_with('\n') {
                print!("{rendered}");
            } else {
                println!("{rendered}");
            }
        }
    }

    Ok(())
}

/// Renders `bytes` in the format selected by `cli`.
pub fn render(cli: &Cli, bytes: &[u8]) -> Result<String> {
    let extractor = TextExtractor::new()?;

    if cli.format == OutputFormat::Text {
        let extraction = extractor.extract(bytes)?;
        info!(heuristic = extraction.heuristic, "Extracted text.");
        return Ok(extraction.text);
    }

    let result = run_pipeline(cli, bytes, &extractor)?;
    match cli.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.prompts)?),
        _ => Ok(render_export(&result.prompts)),
    }
}

fn run_pipeline(cli: &Cli, bytes: &[u8], extractor: &TextExtractor) -> Result<DocumentPrompts> {
    let enhancer = PromptEnhancer::new(cli.enhancer_settings())
        .context("Invalid enhancer options")?;

    let result = match cli.seed {
        Some(seed) => {
            let mut choices = RngChoices::seeded(seed);
            process_document_with(bytes, extractor, &enhancer, &mut choices)?
        }
        None => process_document(bytes, extractor, &enhancer)?,
    };
    Ok(result)
}
