//! # avoda-pdf
//!
//! Renders a worker roster into a multi-page PDF — one A4 page per worker,
//! with every drawn string reshaped for right-to-left (Hebrew/Arabic)
//! display.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use avoda_core::Roster;
//! use avoda_pdf::Exporter;
//!
//! fn export_roster(roster: &Roster) {
//!     if let Ok(exporter) = Exporter::new() {
//!         if let Ok(bytes) = exporter.export(roster) {
//!             println!("{} bytes of PDF", bytes.len());
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod exporter;
pub mod layout;
mod metrics;
pub mod shape;

pub use error::ExportError;
pub use exporter::{plan_pages, Exporter, WorkerPage};
pub use shape::reshape;
