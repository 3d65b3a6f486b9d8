//! Interactive surface: a create-invoice form and an open-invoice selector.
//!
//! Every action runs to completion before the next prompt; service errors
//! are reported and the loop continues.

pub mod output;

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::{
    config::Paths,
    errors::InvoiceError,
    ledger::InvoiceInput,
    open::SystemOpener,
    service::InvoiceService,
    storage::CsvStorage,
    time::SystemClock,
};

const MENU_ITEMS: [&str; 3] = ["Create invoice", "Open invoice", "Quit"];

/// Runs the interactive invoice shell until the user quits.
pub fn run() -> Result<(), InvoiceError> {
    let paths = Paths::current_dir()?;
    let store = CsvStorage::new(paths.data_file());
    let mut service = InvoiceService::open(
        &paths,
        Box::new(store),
        Box::new(SystemOpener),
        Box::new(SystemClock),
    )?;
    let theme = ColorfulTheme::default();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Invoice Manager")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;
        match choice {
            0 => create_invoice(&mut service, &theme)?,
            1 => open_invoice(&service, &theme)?,
            _ => break,
        }
    }
    Ok(())
}

fn create_invoice(
    service: &mut InvoiceService,
    theme: &ColorfulTheme,
) -> Result<(), InvoiceError> {
    let input = match prompt_input(theme)? {
        Ok(input) => input,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };
    match service.create_and_persist(input) {
        Ok(record) => output::success(format!("Invoice {} created and saved!", record.id)),
        Err(err) => output::error(err),
    }
    Ok(())
}

fn prompt_input(
    theme: &ColorfulTheme,
) -> Result<Result<InvoiceInput, InvoiceError>, InvoiceError> {
    let name = prompt_field(theme, "Client Name")?;
    let service = prompt_field(theme, "Service")?;
    let rate = prompt_field(theme, "Rate (Rs.)")?;
    let quantity = prompt_field(theme, "Quantity")?;
    Ok(InvoiceInput::parse(&name, &service, &rate, &quantity))
}

fn prompt_field(theme: &ColorfulTheme, prompt: &str) -> Result<String, InvoiceError> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

fn open_invoice(service: &InvoiceService, theme: &ColorfulTheme) -> Result<(), InvoiceError> {
    let ids = service.list_ids();
    if ids.is_empty() {
        output::warning("No invoices have been created yet.");
        return Ok(());
    }
    let selection = Select::with_theme(theme)
        .with_prompt("Select Invoice ID")
        .items(&ids)
        .default(0)
        .interact()?;
    let path = service.resolve_document_path(&ids[selection]);
    match service.open_document(&path) {
        Ok(()) => output::info(format!("Opened {}", path.display())),
        Err(err) => output::error(err),
    }
    Ok(())
}
