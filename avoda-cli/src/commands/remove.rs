//! `avoda remove <name>`

use anyhow::{Context, Result};
use clap::Args;

use avoda_core::{store, WorkerName};

/// Remove a worker from the roster.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Worker name to remove.
    pub name: String,
}

impl RemoveArgs {
    pub fn run(self) -> Result<()> {
        let name = WorkerName::from(self.name);
        let (roster, removed) =
            store::remove_worker(&name).context("failed to update the roster")?;
        if removed {
            println!("✓ Removed '{name}' ({} worker(s) left)", roster.len());
        } else {
            println!("⚠ No worker named '{name}'");
        }
        Ok(())
    }
}
