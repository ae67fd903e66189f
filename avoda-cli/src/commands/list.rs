//! `avoda list` — roster overview.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use avoda_core::store;
use avoda_pdf::layout::program_lines;

const SUMMARY_MAX_CHARS: usize = 40;

/// Arguments for `avoda list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct WorkerJson {
    name: String,
    program: String,
    program_lines: usize,
}

#[derive(Tabled)]
struct WorkerRow {
    #[tabled(rename = "worker")]
    worker: String,
    #[tabled(rename = "lines")]
    lines: usize,
    #[tabled(rename = "program")]
    program: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let roster = store::load_roster().context("failed to load the roster")?;

        if self.json {
            let workers: Vec<WorkerJson> = roster
                .iter()
                .map(|(name, program)| WorkerJson {
                    name: name.to_string(),
                    program: program.to_string(),
                    program_lines: program_lines(program).len(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&workers)?);
            return Ok(());
        }

        if roster.is_empty() {
            println!("No workers on the roster.");
            println!("Run: avoda add <name>");
            return Ok(());
        }

        let rows: Vec<WorkerRow> = roster
            .iter()
            .map(|(name, program)| {
                let lines = program_lines(program);
                WorkerRow {
                    worker: name.to_string(),
                    lines: lines.len(),
                    program: summary(lines.first().copied()),
                }
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

/// First program line, truncated for the table; dimmed marker when empty.
fn summary(first_line: Option<&str>) -> String {
    match first_line {
        Some(line) if line.chars().count() > SUMMARY_MAX_CHARS => {
            let head: String = line.chars().take(SUMMARY_MAX_CHARS).collect();
            format!("{head}…")
        }
        Some(line) => line.to_string(),
        None => "(no program)".dimmed().to_string(),
    }
}
