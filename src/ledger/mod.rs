//! Invoice domain models, numbering, and input validation.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod numbering;
pub mod record;
pub mod validate;

pub use ledger::Ledger;
pub use numbering::{format_id, next_id};
pub use record::{compute_total, InvoiceRecord, DATE_FORMAT};
pub use validate::InvoiceInput;
