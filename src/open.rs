use std::path::Path;

use crate::errors::InvoiceError;

/// Capability for handing a rendered document to the host viewer.
///
/// Injected into the service so tests can observe open requests without
/// launching anything.
pub trait DocumentOpener: Send + Sync {
    fn open(&self, path: &Path) -> Result<(), InvoiceError>;
}

/// Opens documents with the platform's default viewer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl DocumentOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), InvoiceError> {
        opener::open(path).map_err(|err| InvoiceError::Open(err.to_string()))
    }
}
