use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use log::{debug, warn};

use crate::domain::entities::record::RecordKind;
use crate::infra::import::records::{parse_records, ParsedRecords, TableOrigin, TabularData};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Imports every sheet named `courses`, `exams` or `notices` (any case).
/// Other sheets are skipped. The first row of each sheet is its header.
pub fn import_xlsx_records(xlsx_path: &Path) -> Result<Vec<ParsedRecords>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    let mut imported = Vec::new();
    for sheet_name in workbook.sheet_names() {
        let Some(kind) = RecordKind::ALL
            .into_iter()
            .find(|kind| kind.sheet_name().eq_ignore_ascii_case(sheet_name.trim()))
        else {
            warn!("skipping sheet without a record kind: {sheet_name}");
            continue;
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("failed to read sheet: {sheet_name}"))?;
        let mut rows = range
            .rows()
            .map(|r| r.iter().map(cell_to_string).collect::<Vec<String>>());
        let Some(columns) = rows.next() else {
            warn!("sheet {sheet_name} is empty");
            continue;
        };
        let table = TabularData {
            columns,
            rows: rows.collect(),
            origin: TableOrigin::Worksheet,
        };

        let parsed = parse_records(kind, &table)
            .with_context(|| format!("failed to parse sheet: {sheet_name}"))?;
        debug!("sheet {sheet_name}: {} {kind}", parsed.len());
        imported.push(parsed);
    }

    if imported.is_empty() {
        anyhow::bail!(
            "no courses, exams or notices sheet in {}",
            xlsx_path.display()
        )
    }

    Ok(imported)
}
