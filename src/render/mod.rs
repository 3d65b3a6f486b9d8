pub mod pdf;

use std::path::{Path, PathBuf};

use crate::config::DOCUMENT_EXTENSION;

pub use pdf::PdfRenderer;

/// Resolves the deterministic document location for an invoice identifier.
pub fn resolve_document_path(invoices_dir: &Path, id: &str) -> PathBuf {
    invoices_dir.join(format!("{id}.{DOCUMENT_EXTENSION}"))
}
