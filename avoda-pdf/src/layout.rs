//! Fixed page geometry for the program sheets.
//!
//! All coordinates are PDF points measured from the bottom-left corner of a
//! 595×842 pt page (ISO A4). printpdf takes millimetres, so [`mm`] converts
//! at the standard 72 pt/inch.

use printpdf::{Mm, Pt};

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;

pub const TITLE_Y: f32 = 800.0;
pub const TITLE_SIZE: f32 = 16.0;

pub const NAME_Y: f32 = 760.0;
pub const NAME_SIZE: f32 = 14.0;

pub const BODY_TOP_Y: f32 = 730.0;
pub const BODY_SIZE: f32 = 12.0;
pub const LINE_HEIGHT: f32 = 20.0;

pub const LEFT_EDGE: f32 = 50.0;
pub const RIGHT_EDGE: f32 = 545.0;
pub const CENTER_X: f32 = PAGE_WIDTH / 2.0;

pub const RULE_Y: f32 = 80.0;
pub const RULE_THICKNESS: f32 = 0.5;

pub const FOOTER_Y: f32 = 65.0;
pub const FOOTER_SIZE: f32 = 8.0;
pub const FOOTER_GRAY: f32 = 0.4;

/// Sheet title, drawn centered at the top of every page ("daily task
/// assignment project").
pub const TITLE: &str = "פרויקט חלוקת משימות יומי";

/// Prefix for the worker-name line ("worker name").
pub const NAME_PREFIX: &str = "שם העובד";

/// Attribution line under the separator rule.
pub const FOOTER: &str = "© 2025 Avoda";

/// Convert a coordinate in PDF points to printpdf millimetres.
pub fn mm(pt: f32) -> Mm {
    Mm::from(Pt(pt))
}

/// Non-blank program lines in document order. Blank (or whitespace-only)
/// lines are dropped entirely — they consume no vertical space on the page.
pub fn program_lines(program: &str) -> Vec<&str> {
    program.lines().filter(|l| !l.trim().is_empty()).collect()
}
