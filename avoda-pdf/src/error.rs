//! Error types for avoda-pdf.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from PDF export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A caller-supplied font file could not be read.
    #[error("cannot read font file {path}: {source}")]
    FontUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Font bytes are not a parseable TTF/OTF face — fatal, nothing can be
    /// drawn without the body font.
    #[error("font is not a usable TTF/OTF face: {source}")]
    FontParse {
        #[source]
        source: ttf_parser::FaceParsingError,
    },

    /// PDF backend error (font embedding, document serialization).
    #[error("pdf backend error: {0}")]
    Pdf(#[from] printpdf::Error),

    /// Export of an empty roster — callers are expected to guard first.
    #[error("roster has no workers; nothing to export")]
    EmptyRoster,
}
