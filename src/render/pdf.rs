use std::{
    fs,
    path::{Path, PathBuf},
};

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::{errors::InvoiceError, ledger::InvoiceRecord};

use super::resolve_document_path;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 20.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const LINE_STEP_MM: f32 = 10.0;

/// Renders one fixed-layout, single-page PDF per invoice record.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    invoices_dir: PathBuf,
}

impl PdfRenderer {
    pub fn new(invoices_dir: impl Into<PathBuf>) -> Self {
        Self {
            invoices_dir: invoices_dir.into(),
        }
    }

    /// Deterministic location of the document for `id`.
    pub fn document_path(&self, id: &str) -> PathBuf {
        resolve_document_path(&self.invoices_dir, id)
    }

    /// Writes `<invoices>/<id>.pdf`: a bold title line followed by one body
    /// line per field, in fixed order.
    pub fn render(&self, record: &InvoiceRecord) -> Result<PathBuf, InvoiceError> {
        let path = self.document_path(&record.id);
        let title = format!("Invoice - {}", record.id);

        let (doc, page, layer) = PdfDocument::new(
            &title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| InvoiceError::Render(err.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| InvoiceError::Render(err.to_string()))?;

        let mut y: f32 = 270.0;
        layer.use_text(&title, TITLE_SIZE, Mm(title_x(&title)), Mm(y), &font_bold);
        y -= 15.0;

        let lines = [
            format!("Client Name: {}", record.client_name),
            format!("Service Provided: {}", record.service),
            format!("Rate: Rs. {}", record.rate),
            format!("Quantity: {}", record.quantity),
            format!("Tax: {}%", record.tax_percent),
            format!("Total Amount: Rs. {}", record.total),
            format!("Invoice Date: {}", record.invoice_date),
            format!("Due Date: {}", record.due_date),
            format!("Status: {}", record.status),
        ];
        for line in &lines {
            layer.use_text(line, BODY_SIZE, Mm(MARGIN_LEFT_MM), Mm(y), &font);
            y -= LINE_STEP_MM;
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|err| InvoiceError::Render(err.to_string()))?;
        write_document(&path, &bytes)?;
        tracing::debug!(path = %path.display(), "invoice document rendered");
        Ok(path)
    }
}

fn write_document(path: &Path, bytes: &[u8]) -> Result<(), InvoiceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| InvoiceError::Render(err.to_string()))?;
    }
    fs::write(path, bytes).map_err(|err| InvoiceError::Render(err.to_string()))
}

// Rough centering for a Helvetica headline; close enough for a fixed layout.
fn title_x(title: &str) -> f32 {
    let approx_width = title.len() as f32 * TITLE_SIZE * 0.18;
    ((PAGE_WIDTH_MM - approx_width) / 2.0).max(MARGIN_LEFT_MM)
}
