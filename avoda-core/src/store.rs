//! Roster persistence under `~/.avoda/`.
//!
//! # Storage layout
//!
//! ```text
//! ~/.avoda/
//!   workers.json   (whole roster as a flat name → program object — mode 0600)
//! ```
//!
//! The roster is small and rewritten wholesale on every mutation; there is no
//! locking (single-user tool, concurrent external writers unsupported).
//!
//! # API pattern
//!
//! Every function has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use crate::error::RosterError;
use crate::types::{Roster, WorkerName};

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.avoda/`
///
/// Creates the directory (mode `0700`) if it does not yet exist.
pub fn data_dir_at(home: &Path) -> Result<PathBuf, RosterError> {
    let dir = home.join(".avoda");
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
        set_dir_permissions(&dir)?;
    }
    Ok(dir)
}

/// `<home>/.avoda/workers.json` — pure, no I/O.
pub fn roster_path_at(home: &Path) -> PathBuf {
    home.join(".avoda").join("workers.json")
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load the roster from `<home>/.avoda/workers.json`.
///
/// A missing file is an empty roster, not an error. Malformed content is
/// `RosterError::Parse` (with path + position context) — propagated, never
/// silently recovered.
pub fn load_roster_at(home: &Path) -> Result<Roster, RosterError> {
    let path = roster_path_at(home);
    if !path.exists() {
        return Ok(Roster::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    serde_json::from_str(&contents).map_err(|e| RosterError::Parse { path, source: e })
}

/// `load_roster_at` convenience wrapper.
pub fn load_roster() -> Result<Roster, RosterError> {
    load_roster_at(&home()?)
}

// ---------------------------------------------------------------------------
// 3. Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically save the roster to `<home>/.avoda/workers.json`.
///
/// Write flow: serialize → `.json.tmp` sibling → `chmod 0600` → `rename`.
/// `.tmp` is always in the same directory as the target (same filesystem).
pub fn save_roster_at(home: &Path, roster: &Roster) -> Result<(), RosterError> {
    data_dir_at(home)?; // create dir + 0700 if absent
    let path = roster_path_at(home);
    let tmp_path = path.with_file_name("workers.json.tmp");

    let json = serde_json::to_string_pretty(roster)?;
    std::fs::write(&tmp_path, json)?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(())
}

/// `save_roster_at` convenience wrapper.
pub fn save_roster(roster: &Roster) -> Result<(), RosterError> {
    save_roster_at(&home()?, roster)
}

// ---------------------------------------------------------------------------
// 4. Mutations (load → mutate → persist)
// ---------------------------------------------------------------------------

/// Add `name` with an empty program and persist.
///
/// Validation failures (`EmptyName`, `DuplicateName`) leave the file
/// untouched. Returns the updated roster.
pub fn add_worker_at(home: &Path, name: WorkerName) -> Result<Roster, RosterError> {
    let mut roster = load_roster_at(home)?;
    roster.add(name)?;
    save_roster_at(home, &roster)?;
    Ok(roster)
}

/// `add_worker_at` convenience wrapper.
pub fn add_worker(name: WorkerName) -> Result<Roster, RosterError> {
    add_worker_at(&home()?, name)
}

/// Remove `name` if present and persist. The boolean reports whether an
/// entry existed; an absent name is not an error.
pub fn remove_worker_at(home: &Path, name: &WorkerName) -> Result<(Roster, bool), RosterError> {
    let mut roster = load_roster_at(home)?;
    let removed = roster.remove(name);
    if removed {
        save_roster_at(home, &roster)?;
    }
    Ok((roster, removed))
}

/// `remove_worker_at` convenience wrapper.
pub fn remove_worker(name: &WorkerName) -> Result<(Roster, bool), RosterError> {
    remove_worker_at(&home()?, name)
}

/// Overwrite the program text for an existing worker and persist.
///
/// Returns `RosterError::UnknownWorker` if `name` is not on the roster.
pub fn set_program_at(home: &Path, name: &WorkerName, text: &str) -> Result<Roster, RosterError> {
    let mut roster = load_roster_at(home)?;
    roster.set_program(name, text)?;
    save_roster_at(home, &roster)?;
    Ok(roster)
}

/// `set_program_at` convenience wrapper.
pub fn set_program(name: &WorkerName, text: &str) -> Result<Roster, RosterError> {
    set_program_at(&home()?, name, text)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, RosterError> {
    dirs::home_dir().ok_or(RosterError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), RosterError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), RosterError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), RosterError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), RosterError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
