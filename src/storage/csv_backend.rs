use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::InvoiceError,
    ledger::{record::COLUMNS, InvoiceRecord, Ledger},
};

use super::{LedgerStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// CSV-backed store persisting the full invoice table on every save.
///
/// Writes are staged to a `.tmp` sibling and renamed into place so a failed
/// save never clobbers the previous table.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    data_file: PathBuf,
}

impl CsvStorage {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn read_table(&self) -> Result<Ledger> {
        let mut reader = csv::Reader::from_path(&self.data_file).map_err(|err| self.corrupt(err))?;
        let headers = reader.headers().map_err(|err| self.corrupt(err))?;
        let expected: csv::StringRecord = COLUMNS.iter().collect();
        if *headers != expected {
            return Err(InvoiceError::CorruptStore(format!(
                "`{}` does not carry the expected invoice columns",
                self.data_file.display()
            )));
        }
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: InvoiceRecord = row.map_err(|err| self.corrupt(err))?;
            records.push(record);
        }
        Ok(Ledger::from_records(records))
    }

    fn corrupt(&self, err: csv::Error) -> InvoiceError {
        InvoiceError::CorruptStore(format!("{}: {err}", self.data_file.display()))
    }
}

impl LedgerStore for CsvStorage {
    fn load(&self) -> Result<Ledger> {
        if self.data_file.exists() {
            let ledger = self.read_table()?;
            tracing::debug!(
                path = %self.data_file.display(),
                records = ledger.len(),
                "invoice table loaded"
            );
            Ok(ledger)
        } else {
            let ledger = Ledger::new();
            self.save(&ledger)?;
            tracing::info!(path = %self.data_file.display(), "created empty invoice table");
            Ok(ledger)
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(COLUMNS).map_err(persist)?;
        for record in ledger.records() {
            writer.serialize(record).map_err(persist)?;
        }
        let data = writer
            .into_inner()
            .map_err(|err| InvoiceError::Persist(err.to_string()))?;
        write_atomic(&self.data_file, &data).map_err(|err| InvoiceError::Persist(err.to_string()))
    }
}

fn persist(err: csv::Error) -> InvoiceError {
    InvoiceError::Persist(err.to_string())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data)?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
