use super::record::InvoiceRecord;

/// Append-only collection of invoice records, in creation order.
///
/// Records are never mutated or removed once appended; the persisted table
/// is rewritten in full from this collection after every change.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<InvoiceRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<InvoiceRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: InvoiceRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[InvoiceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All non-blank invoice identifiers, in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| !record.id.trim().is_empty())
            .map(|record| record.id.clone())
            .collect()
    }

    /// The most recently assigned identifier, skipping blank-id rows.
    pub fn last_assigned_id(&self) -> Option<&str> {
        self.records
            .iter()
            .rev()
            .map(|record| record.id.as_str())
            .find(|id| !id.trim().is_empty())
    }
}
