//! `avoda add <name>`

use anyhow::{Context, Result};
use clap::Args;

use avoda_core::{store, RosterError, WorkerName};

/// Add a worker to the roster.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Worker name (unique, non-empty).
    pub name: String,
}

impl AddArgs {
    pub fn run(self) -> Result<()> {
        let name = WorkerName::from(self.name);
        match store::add_worker(name.clone()) {
            Ok(roster) => {
                println!("✓ Added '{name}' ({} worker(s) on the roster)", roster.len());
                Ok(())
            }
            // Validation problems are warnings, not failures.
            Err(e @ (RosterError::EmptyName | RosterError::DuplicateName { .. })) => {
                println!("⚠ {e}");
                Ok(())
            }
            Err(e) => Err(e).context("failed to update the roster"),
        }
    }
}
