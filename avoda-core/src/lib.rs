//! Avoda core library — domain types, roster persistence, errors.
//!
//! Public API surface:
//! - [`types`] — [`WorkerName`] and the insertion-ordered [`Roster`]
//! - [`error`] — [`RosterError`]
//! - [`store`] — load / save / add / remove / set-program

pub mod error;
pub mod store;
pub mod types;

pub use error::RosterError;
pub use types::{Roster, WorkerName};
