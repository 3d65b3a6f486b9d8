use thiserror::Error;

/// Error type covering every failure mode of the invoicing workflow.
#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ledger file is corrupt: {0}")]
    CorruptStore(String),
    #[error("Could not persist ledger: {0}")]
    Persist(String),
    #[error("Malformed invoice id `{0}`")]
    MalformedId(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Could not render document: {0}")]
    Render(String),
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Could not open document: {0}")]
    Open(String),
    #[error("Interaction error: {0}")]
    Interaction(#[from] dialoguer::Error),
}
