use crate::errors::InvoiceError;

/// Validated form input for a new invoice.
///
/// Construction is the only mutation gate: nothing touches the ledger until
/// the raw fields have passed through [`InvoiceInput::parse`] or
/// [`InvoiceInput::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInput {
    pub client_name: String,
    pub service: String,
    pub rate: f64,
    pub quantity: u32,
}

impl InvoiceInput {
    /// Validates raw form fields as entered by the user.
    pub fn parse(
        client_name: &str,
        service: &str,
        rate: &str,
        quantity: &str,
    ) -> Result<Self, InvoiceError> {
        let rate = non_negative_decimal("Rate", rate)?;
        let quantity = non_negative_integer("Quantity", quantity)?;
        Self::new(client_name, service, rate, quantity)
    }

    /// Validates already-typed values.
    pub fn new(
        client_name: impl Into<String>,
        service: impl Into<String>,
        rate: f64,
        quantity: u32,
    ) -> Result<Self, InvoiceError> {
        let client_name = required("Client Name", client_name.into())?;
        let service = required("Service", service.into())?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(InvoiceError::Validation(
                "Rate must be a non-negative number".into(),
            ));
        }
        Ok(Self {
            client_name,
            service,
            rate,
            quantity,
        })
    }
}

fn required(field: &str, value: String) -> Result<String, InvoiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(InvoiceError::Validation(format!("{field} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}

fn non_negative_decimal(field: &str, value: &str) -> Result<f64, InvoiceError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| InvoiceError::Validation(format!("{field} must be a number")))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(InvoiceError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(parsed)
}

fn non_negative_integer(field: &str, value: &str) -> Result<u32, InvoiceError> {
    value
        .trim()
        .parse()
        .map_err(|_| InvoiceError::Validation(format!("{field} must be a whole number")))
}
