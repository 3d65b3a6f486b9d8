use super::Ledger;
use crate::errors::InvoiceError;

const ID_PREFIX: &str = "INV";

/// Derives the next invoice identifier from the last assigned one.
///
/// Trusts the last non-blank row only, matching the historical assignment
/// policy; it does not scan the whole table for the maximum suffix.
pub fn next_id(ledger: &Ledger) -> Result<String, InvoiceError> {
    let last = match ledger.last_assigned_id() {
        Some(id) => id,
        None => return Ok(format_id(1)),
    };
    let digits = last
        .strip_prefix(ID_PREFIX)
        .ok_or_else(|| InvoiceError::MalformedId(last.to_string()))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvoiceError::MalformedId(last.to_string()));
    }
    let number: u64 = digits
        .parse()
        .map_err(|_| InvoiceError::MalformedId(last.to_string()))?;
    Ok(format_id(number + 1))
}

/// Formats a counter as `INV` plus at least three digits.
pub fn format_id(number: u64) -> String {
    format!("{ID_PREFIX}{number:03}")
}
