use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use log::info;

use crate::domain::entities::record::{ParsedRecords, RecordKind};
use crate::infra::import::csv::import_csv_records;
use crate::infra::import::xlsx::import_xlsx_records;
use crate::usecase::ports::repo::RecordRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    pub kind: RecordKind,
    pub row_count: usize,
}

pub struct ImportService {
    repo: Arc<dyn RecordRepository>,
}

impl ImportService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Imports a file, picking the reader from its extension. CSV files hold a
    /// single record kind, so `kind` is required for them.
    pub fn import_path(&self, path: &Path, kind: Option<RecordKind>) -> Result<Vec<ImportResult>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => {
                let Some(kind) = kind else {
                    bail!("record kind is required for csv import: {}", path.display())
                };
                Ok(vec![self.import_csv(path, kind)?])
            }
            "xlsx" | "xlsm" | "xls" | "ods" => self.import_xlsx(path),
            other => bail!("unsupported file type: {other:?}"),
        }
    }

    pub fn import_csv(&self, path: &Path, kind: RecordKind) -> Result<ImportResult> {
        let parsed = import_csv_records(path, kind)?;
        self.store(parsed)
    }

    /// Stores every record sheet of a workbook in one transaction, so a
    /// failing sheet leaves the store untouched.
    pub fn import_xlsx(&self, path: &Path) -> Result<Vec<ImportResult>> {
        let batches = import_xlsx_records(path)?;
        let counts = self.repo.insert_batches(&batches)?;
        Ok(batches
            .iter()
            .zip(counts)
            .map(|(batch, row_count)| {
                let kind = batch.kind();
                info!("imported {row_count} {kind}");
                ImportResult { kind, row_count }
            })
            .collect())
    }

    fn store(&self, parsed: ParsedRecords) -> Result<ImportResult> {
        let kind = parsed.kind();
        let row_count = match &parsed {
            ParsedRecords::Courses(courses) => self.repo.insert_courses(courses)?,
            ParsedRecords::Exams(exams) => self.repo.insert_exams(exams)?,
            ParsedRecords::Notices(notices) => self.repo.insert_notices(notices)?,
        };
        info!("imported {row_count} {kind}");
        Ok(ImportResult { kind, row_count })
    }
}
