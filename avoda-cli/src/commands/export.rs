//! `avoda export` — render one PDF page per worker.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use avoda_core::{store, WorkerName};
use avoda_pdf::Exporter;

/// Arguments for `avoda export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output path for the PDF document.
    #[arg(long, short = 'o', default_value = "programs.pdf")]
    pub out: PathBuf,

    /// Custom TTF/OTF font file for all drawn text.
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Overlay an unsaved program draft for one worker: <name>=<file>.
    /// The roster file is left untouched; only the exported snapshot sees it.
    #[arg(long, value_name = "NAME=FILE")]
    pub draft: Option<String>,
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        let mut roster = store::load_roster().context("failed to load the roster")?;
        if roster.is_empty() {
            println!("No workers on the roster — nothing to export.");
            println!("Run: avoda add <name>");
            return Ok(());
        }

        // Resolve the snapshot before rendering: a pending draft is merged
        // here so the exporter only ever sees final program text.
        if let Some(draft) = &self.draft {
            let (name, path) = parse_draft(draft)?;
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read draft file '{}'", path.display()))?;
            roster
                .set_program(&name, text)
                .with_context(|| format!("cannot apply draft for '{name}'"))?;
        }

        let exporter = match &self.font {
            Some(path) => Exporter::with_font_file(path),
            None => Exporter::new(),
        }
        .context("failed to register the PDF font")?;

        let bytes = exporter.export(&roster).context("failed to render the PDF")?;
        std::fs::write(&self.out, &bytes)
            .with_context(|| format!("cannot write '{}'", self.out.display()))?;

        println!(
            "✓ Exported {} page(s) to {} ({} bytes)",
            roster.len(),
            self.out.display(),
            bytes.len()
        );
        Ok(())
    }
}

fn parse_draft(raw: &str) -> Result<(WorkerName, PathBuf)> {
    let (name, path) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("--draft expects <name>=<file>, got '{raw}'"))?;
    if name.is_empty() || path.is_empty() {
        return Err(anyhow!("--draft expects <name>=<file>, got '{raw}'"));
    }
    Ok((WorkerName::from(name), PathBuf::from(path)))
}
