use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    config::Paths,
    errors::InvoiceError,
    ledger::{next_id, InvoiceInput, InvoiceRecord, Ledger},
    open::DocumentOpener,
    render::PdfRenderer,
    storage::LedgerStore,
    time::Clock,
};

/// Drives the invoicing workflow: creation, listing, and retrieval.
///
/// Owns the in-memory ledger; the persisted table is rewritten in full after
/// every successful append.
pub struct InvoiceService {
    ledger: Ledger,
    store: Box<dyn LedgerStore>,
    renderer: PdfRenderer,
    opener: Box<dyn DocumentOpener>,
    clock: Box<dyn Clock>,
}

impl InvoiceService {
    /// Loads (or initializes) the persisted ledger and wires up collaborators.
    pub fn open(
        paths: &Paths,
        store: Box<dyn LedgerStore>,
        opener: Box<dyn DocumentOpener>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, InvoiceError> {
        paths.ensure()?;
        let ledger = store.load()?;
        info!(records = ledger.len(), "invoice ledger loaded");
        Ok(Self {
            ledger,
            store,
            renderer: PdfRenderer::new(paths.invoices_dir()),
            opener,
            clock,
        })
    }

    /// Assigns the next identifier, appends the record, persists the table,
    /// and renders its document.
    ///
    /// A failed render is surfaced as an error but does not roll back the
    /// append: the ledger stays the source of truth and the document can be
    /// regenerated later.
    pub fn create_and_persist(&mut self, input: InvoiceInput) -> Result<InvoiceRecord, InvoiceError> {
        let id = next_id(&self.ledger)?;
        let record = InvoiceRecord::new(
            id,
            input.client_name,
            input.service,
            input.rate,
            input.quantity,
            self.clock.today(),
        );
        self.ledger.append(record.clone());
        self.store.save(&self.ledger)?;
        info!(id = %record.id, total = record.total, "invoice persisted");

        if let Err(err) = self.renderer.render(&record) {
            warn!(id = %record.id, error = %err, "invoice persisted but document render failed");
            return Err(err);
        }
        Ok(record)
    }

    /// All known invoice identifiers, in creation order.
    pub fn list_ids(&self) -> Vec<String> {
        self.ledger.ids()
    }

    /// Deterministic path of the rendered document for `id`.
    pub fn resolve_document_path(&self, id: &str) -> PathBuf {
        self.renderer.document_path(id)
    }

    /// Opens a rendered document with the configured opener.
    pub fn open_document(&self, path: &Path) -> Result<(), InvoiceError> {
        if !path.exists() {
            return Err(InvoiceError::NotFound(path.display().to_string()));
        }
        self.opener.open(path)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
