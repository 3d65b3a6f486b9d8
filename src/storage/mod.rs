pub mod csv_backend;

use crate::{errors::InvoiceError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, InvoiceError>;

/// Abstraction over persistence backends capable of storing the invoice table.
pub trait LedgerStore: Send + Sync {
    /// Loads the persisted ledger, establishing an empty table on first run.
    fn load(&self) -> Result<Ledger>;

    /// Rewrites the entire persisted table from the in-memory ledger.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

pub use csv_backend::CsvStorage;
