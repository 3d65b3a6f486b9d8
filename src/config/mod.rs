use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::InvoiceError;

/// File name of the persisted invoice table.
pub const DATA_FILE: &str = "invoice-data.csv";
/// Directory receiving rendered invoice documents.
pub const INVOICE_DIR: &str = "invoices";
/// Extension of rendered invoice documents.
pub const DOCUMENT_EXTENSION: &str = "pdf";
/// Tax applied to every invoice, in percent.
pub const TAX_PERCENT: u32 = 18;
/// Calendar days between invoice date and due date.
pub const DUE_DAYS: i64 = 7;
/// Status stamped on every freshly created invoice.
pub const INITIAL_STATUS: &str = "Sent";

/// Resolves the fixed store and document locations under a base directory.
///
/// The file names themselves are constants; only the base directory varies,
/// so tests can point the whole workflow at a scratch folder.
#[derive(Debug, Clone)]
pub struct Paths {
    base: PathBuf,
}

impl Paths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Paths rooted at the process working directory, the default layout.
    pub fn current_dir() -> Result<Self, InvoiceError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn data_file(&self) -> PathBuf {
        self.base.join(DATA_FILE)
    }

    pub fn invoices_dir(&self) -> PathBuf {
        self.base.join(INVOICE_DIR)
    }

    /// Creates the base and invoices directories up front.
    pub fn ensure(&self) -> Result<(), InvoiceError> {
        ensure_dir(&self.base)?;
        ensure_dir(&self.invoices_dir())
    }
}

pub(crate) fn ensure_dir(path: &Path) -> Result<(), InvoiceError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn paths_resolve_under_base_dir() {
        let paths = Paths::new("/tmp/billing");
        assert_eq!(paths.data_file(), PathBuf::from("/tmp/billing/invoice-data.csv"));
        assert_eq!(paths.invoices_dir(), PathBuf::from("/tmp/billing/invoices"));
    }

    #[test]
    fn ensure_creates_invoices_dir() {
        let temp = TempDir::new().expect("temp dir");
        let paths = Paths::new(temp.path().join("app"));
        paths.ensure().expect("ensure dirs");
        assert!(paths.invoices_dir().is_dir());
    }
}
