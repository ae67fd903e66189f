//! Domain types for the avoda roster.
//!
//! The roster serializes as a flat JSON object (`{"<name>": "<program>", …}`)
//! — string keys, string values, nothing else — so the on-disk file stays
//! hand-editable. In memory it keeps insertion order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RosterError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed worker name — the unique roster key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerName(pub String);

impl fmt::Display for WorkerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for WorkerName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkerName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// Insertion-ordered mapping from worker name to free-text daily program.
///
/// Invariants: names are unique and non-empty (after trimming). Both are
/// enforced by [`Roster::add`]; the other mutators cannot violate them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(WorkerName, String)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &WorkerName) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Program text for `name`, if the worker exists.
    pub fn program(&self, name: &WorkerName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_str())
    }

    /// `(name, program)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&WorkerName, &str)> {
        self.entries.iter().map(|(n, p)| (n, p.as_str()))
    }

    /// Worker names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &WorkerName> {
        self.entries.iter().map(|(n, _)| n)
    }

    /// Insert `name` with an empty program.
    ///
    /// Returns [`RosterError::EmptyName`] for blank names and
    /// [`RosterError::DuplicateName`] if the name is already present; the
    /// roster is unchanged in both cases.
    pub fn add(&mut self, name: WorkerName) -> Result<(), RosterError> {
        if name.0.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(&name) {
            return Err(RosterError::DuplicateName { name });
        }
        self.entries.push((name, String::new()));
        Ok(())
    }

    /// Remove `name` if present. Returns whether an entry was removed —
    /// removing an absent name is not an error.
    pub fn remove(&mut self, name: &WorkerName) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(n, _)| n != name);
        before != self.entries.len()
    }

    /// Overwrite the program text for an existing worker.
    pub fn set_program(
        &mut self,
        name: &WorkerName,
        text: impl Into<String>,
    ) -> Result<(), RosterError> {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, program)) => {
                *program = text.into();
                Ok(())
            }
            None => Err(RosterError::UnknownWorker { name: name.clone() }),
        }
    }

    /// Upsert without validation — deserialization only (a hand-edited file
    /// with duplicate keys resolves to last-entry-wins).
    fn put(&mut self, name: WorkerName, program: String) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, p)) => *p = program,
            None => self.entries.push((name, program)),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde — flat object, insertion order preserved
// ---------------------------------------------------------------------------

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, program) in &self.entries {
            map.serialize_entry(&name.0, program)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of worker name to program text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Roster, A::Error> {
                let mut roster = Roster::default();
                while let Some((name, program)) = access.next_entry::<String, String>()? {
                    roster.put(WorkerName(name), program);
                }
                Ok(roster)
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(WorkerName::from("Dana").to_string(), "Dana");
    }

    #[test]
    fn add_inserts_with_empty_program() {
        let mut roster = Roster::new();
        roster.add(WorkerName::from("Dana")).expect("add");
        assert_eq!(roster.program(&WorkerName::from("Dana")), Some(""));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn add_rejects_empty_and_whitespace_names() {
        let mut roster = Roster::new();
        assert!(matches!(
            roster.add(WorkerName::from("")),
            Err(RosterError::EmptyName)
        ));
        assert!(matches!(
            roster.add(WorkerName::from("   ")),
            Err(RosterError::EmptyName)
        ));
        assert!(roster.is_empty());
    }

    #[test]
    fn add_rejects_duplicate_and_keeps_single_entry() {
        let mut roster = Roster::new();
        roster.add(WorkerName::from("Ana")).expect("first add");
        let err = roster.add(WorkerName::from("Ana")).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateName { .. }));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn remove_after_add_restores_original() {
        let mut roster = Roster::new();
        roster.add(WorkerName::from("Ana")).expect("add Ana");
        let snapshot = roster.clone();

        roster.add(WorkerName::from("X")).expect("add X");
        assert!(roster.remove(&WorkerName::from("X")));
        assert_eq!(roster, snapshot);
    }

    #[test]
    fn remove_absent_name_is_a_noop() {
        let mut roster = Roster::new();
        assert!(!roster.remove(&WorkerName::from("ghost")));
    }

    #[test]
    fn set_program_is_idempotent() {
        let mut roster = Roster::new();
        let dana = WorkerName::from("Dana");
        roster.add(dana.clone()).expect("add");

        roster.set_program(&dana, "Line1\nLine2").expect("first set");
        let once = roster.clone();
        roster.set_program(&dana, "Line1\nLine2").expect("second set");
        assert_eq!(roster, once);
    }

    #[test]
    fn set_program_unknown_worker_errors() {
        let mut roster = Roster::new();
        let err = roster
            .set_program(&WorkerName::from("ghost"), "x")
            .unwrap_err();
        assert!(matches!(err, RosterError::UnknownWorker { .. }));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut roster = Roster::new();
        for name in ["Ana", "Ben", "Dana"] {
            roster.add(WorkerName::from(name)).expect("add");
        }
        let names: Vec<String> = roster.names().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["Ana", "Ben", "Dana"]);
    }

    #[test]
    fn serializes_as_flat_string_map() {
        let mut roster = Roster::new();
        roster.add(WorkerName::from("Dana")).expect("add");
        roster
            .set_program(&WorkerName::from("Dana"), "Line1")
            .expect("set");

        let json = serde_json::to_string(&roster).expect("serialize");
        assert_eq!(json, r#"{"Dana":"Line1"}"#);
    }

    #[test]
    fn serde_roundtrip_preserves_order() {
        let mut roster = Roster::new();
        for name in ["Ben", "Ana"] {
            roster.add(WorkerName::from(name)).expect("add");
        }
        let json = serde_json::to_string(&roster).expect("serialize");
        let back: Roster = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, roster);
        let names: Vec<String> = back.names().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["Ben", "Ana"]);
    }

    #[test]
    fn duplicate_keys_in_file_resolve_last_wins() {
        let roster: Roster =
            serde_json::from_str(r#"{"Dana":"old","Dana":"new"}"#).expect("deserialize");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.program(&WorkerName::from("Dana")), Some("new"));
    }
}
