use std::process;

fn main() {
    invoice_core::init();

    if let Err(err) = invoice_core::cli::run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
