//! `avoda program show <name>` and `avoda program set <name>`

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use avoda_core::{store, WorkerName};

/// Show or set a worker's daily program.
#[derive(Subcommand, Debug)]
pub enum ProgramCommand {
    /// Print a worker's program text.
    Show(ShowArgs),

    /// Replace a worker's program text.
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Worker name.
    pub name: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Worker name.
    pub name: String,

    /// Program text (newline-separated task lines).
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the program text from a file ('-' reads stdin).
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub fn run(cmd: ProgramCommand) -> Result<()> {
    match cmd {
        ProgramCommand::Show(args) => show(args),
        ProgramCommand::Set(args) => set(args),
    }
}

fn show(args: ShowArgs) -> Result<()> {
    let roster = store::load_roster().context("failed to load the roster")?;
    if roster.is_empty() {
        println!("No workers on the roster. Run: avoda add <name>");
        return Ok(());
    }

    let name = WorkerName::from(args.name);
    match roster.program(&name) {
        Some("") => println!("'{name}' has no program yet."),
        Some(program) => println!("{program}"),
        None => println!("⚠ No worker named '{name}'"),
    }
    Ok(())
}

fn set(args: SetArgs) -> Result<()> {
    let roster = store::load_roster().context("failed to load the roster")?;
    if roster.is_empty() {
        println!("No workers on the roster. Run: avoda add <name>");
        return Ok(());
    }

    let text = read_program_text(&args)?;
    let name = WorkerName::from(args.name);
    store::set_program(&name, &text)
        .with_context(|| format!("failed to save the program for '{name}'"))?;

    let drawn = text.lines().filter(|l| !l.trim().is_empty()).count();
    println!("✓ Saved program for '{name}' ({drawn} line(s))");
    Ok(())
}

fn read_program_text(args: &SetArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &args.file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read program file '{}'", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read program text from stdin")?;
            Ok(buf)
        }
    }
}
