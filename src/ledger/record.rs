use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{DUE_DAYS, INITIAL_STATUS, TAX_PERCENT};

/// Date format used in the persisted table and rendered documents.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Column headers of the persisted invoice table, in order.
pub const COLUMNS: [&str; 10] = [
    "Invoice ID",
    "Client Name",
    "Service",
    "Rate (Rs.)",
    "Quantity",
    "Tax (%)",
    "Total (Rs.)",
    "Invoice Date",
    "Due Date",
    "Status",
];

/// One row of the ledger, representing one billable engagement.
///
/// Serde renames map fields onto the exact persisted column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    #[serde(rename = "Invoice ID")]
    pub id: String,
    #[serde(rename = "Client Name")]
    pub client_name: String,
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "Rate (Rs.)")]
    pub rate: f64,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Tax (%)")]
    pub tax_percent: u32,
    #[serde(rename = "Total (Rs.)")]
    pub total: f64,
    #[serde(rename = "Invoice Date")]
    pub invoice_date: String,
    #[serde(rename = "Due Date")]
    pub due_date: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl InvoiceRecord {
    /// Builds a record for a validated engagement, deriving total and dates.
    pub fn new(
        id: impl Into<String>,
        client_name: impl Into<String>,
        service: impl Into<String>,
        rate: f64,
        quantity: u32,
        today: NaiveDate,
    ) -> Self {
        let due = today + Duration::days(DUE_DAYS);
        Self {
            id: id.into(),
            client_name: client_name.into(),
            service: service.into(),
            rate,
            quantity,
            tax_percent: TAX_PERCENT,
            total: compute_total(rate, quantity),
            invoice_date: today.format(DATE_FORMAT).to_string(),
            due_date: due.format(DATE_FORMAT).to_string(),
            status: INITIAL_STATUS.to_string(),
        }
    }
}

/// Total due after tax, rounded to two decimal places.
pub fn compute_total(rate: f64, quantity: u32) -> f64 {
    let gross = rate * quantity as f64 * (1.0 + TAX_PERCENT as f64 / 100.0);
    (gross * 100.0).round() / 100.0
}
