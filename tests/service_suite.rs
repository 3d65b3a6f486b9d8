mod common;

use std::fs;

use common::TestEnv;
use invoice_core::{errors::InvoiceError, ledger::InvoiceInput};

fn acme_input() -> InvoiceInput {
    InvoiceInput::new("Acme", "Consulting", 100.0, 5).expect("valid input")
}

#[test]
fn first_invoice_end_to_end() {
    let env = TestEnv::new();
    let mut service = env.service();

    let record = service.create_and_persist(acme_input()).expect("create invoice");
    assert_eq!(record.id, "INV001");
    assert_eq!(record.total, 590.0);
    assert_eq!(record.status, "Sent");
    assert_eq!(record.invoice_date, "26-02-2026");
    assert_eq!(record.due_date, "05-03-2026");

    let document = service.resolve_document_path(&record.id);
    assert!(document.exists(), "document rendered at resolved path");
    assert_eq!(service.list_ids(), vec!["INV001"]);
}

#[test]
fn identifiers_are_assigned_sequentially() {
    let env = TestEnv::new();
    let mut service = env.service();
    for _ in 0..5 {
        service.create_and_persist(acme_input()).expect("create invoice");
    }
    assert_eq!(
        service.list_ids(),
        vec!["INV001", "INV002", "INV003", "INV004", "INV005"]
    );
}

#[test]
fn invalid_input_never_reaches_the_ledger() {
    let env = TestEnv::new();
    let service = env.service();

    for (name, svc, rate, quantity) in [
        ("", "Consulting", "100", "5"),
        ("Acme", "", "100", "5"),
        ("Acme", "Consulting", "a lot", "5"),
        ("Acme", "Consulting", "100", "few"),
    ] {
        let err = InvoiceInput::parse(name, svc, rate, quantity).unwrap_err();
        assert!(matches!(err, InvoiceError::Validation(_)));
    }

    assert!(service.list_ids().is_empty());
    assert!(service.ledger().is_empty());
    let table = fs::read_to_string(env.paths.data_file()).expect("read table");
    assert_eq!(table.lines().count(), 1, "header row only, no mutation");
    let rendered = fs::read_dir(env.paths.invoices_dir())
        .expect("list invoices dir")
        .count();
    assert_eq!(rendered, 0, "no document produced");
}

#[test]
fn render_failure_keeps_the_persisted_row() {
    let env = TestEnv::new();
    let mut service = env.service();

    // A directory squatting on the document path forces the render to fail.
    let blocked = service.resolve_document_path("INV001");
    fs::create_dir_all(&blocked).expect("block document path");

    let err = service.create_and_persist(acme_input()).unwrap_err();
    assert!(matches!(err, InvoiceError::Render(_)));

    assert_eq!(service.list_ids(), vec!["INV001"], "append not rolled back");
    let table = fs::read_to_string(env.paths.data_file()).expect("read table");
    assert!(table.contains("INV001"), "row persisted despite render failure");
}

#[test]
fn opening_a_missing_document_reports_not_found() {
    let env = TestEnv::new();
    let service = env.service();

    let path = service.resolve_document_path("INV404");
    let err = service.open_document(&path).unwrap_err();
    assert!(matches!(err, InvoiceError::NotFound(_)));
    assert!(env.opener.opened().is_empty(), "opener never invoked");
}

#[test]
fn opening_an_existing_document_hands_the_opener_the_resolved_path() {
    let env = TestEnv::new();
    let mut service = env.service();
    let record = service.create_and_persist(acme_input()).expect("create invoice");

    let path = service.resolve_document_path(&record.id);
    service.open_document(&path).expect("open document");
    assert_eq!(env.opener.opened(), vec![path]);
}
