use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::NaiveDate;
use invoice_core::{
    config::Paths,
    errors::InvoiceError,
    open::DocumentOpener,
    service::InvoiceService,
    storage::CsvStorage,
    time::Clock,
};
use tempfile::TempDir;

/// Clock pinned to a fixed date so derived dates are assertable.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Opener that records requested paths instead of launching a viewer.
#[derive(Default, Clone)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().expect("lock opened paths").clone()
    }
}

impl DocumentOpener for RecordingOpener {
    fn open(&self, path: &Path) -> Result<(), InvoiceError> {
        self.opened
            .lock()
            .expect("lock opened paths")
            .push(path.to_path_buf());
        Ok(())
    }
}

/// Isolated invoicing environment backed by a unique scratch directory.
pub struct TestEnv {
    pub paths: Paths,
    pub opener: RecordingOpener,
    pub today: NaiveDate,
    _temp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        Self {
            paths: Paths::new(temp.path().to_path_buf()),
            opener: RecordingOpener::default(),
            today: NaiveDate::from_ymd_opt(2026, 2, 26).expect("valid date"),
            _temp: temp,
        }
    }

    /// Opens a service over the environment's store, as a fresh process would.
    pub fn service(&self) -> InvoiceService {
        InvoiceService::open(
            &self.paths,
            Box::new(CsvStorage::new(self.paths.data_file())),
            Box::new(self.opener.clone()),
            Box::new(FixedClock(self.today)),
        )
        .expect("open invoice service")
    }
}
