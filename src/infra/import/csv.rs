use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::domain::entities::record::RecordKind;
use crate::infra::import::records::{parse_records, ParsedRecords, TableOrigin, TabularData};

pub fn read_csv_table(csv_path: &Path) -> Result<TabularData> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(
        "read {} rows with {} columns from {}",
        rows.len(),
        columns.len(),
        csv_path.display()
    );
    Ok(TabularData {
        columns,
        rows,
        origin: TableOrigin::Text,
    })
}

/// Reads one CSV file holding a single record kind.
pub fn import_csv_records(csv_path: &Path, kind: RecordKind) -> Result<ParsedRecords> {
    let table = read_csv_table(csv_path)?;
    parse_records(kind, &table)
        .with_context(|| format!("failed to parse {kind} from {}", csv_path.display()))
}
