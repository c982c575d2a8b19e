//! JSONL catalogue files

use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tablescout_core::TableRecord;
use tracing::{debug, info};

/// Read a catalogue, one `TableRecord` JSON object per line.
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
pub fn load_jsonl(path: &Path) -> Result<Vec<TableRecord>> {
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| CatalogError::io(path, e))?;
        if line.trim().is_empty() {
            debug!(line = line_no, "skipping blank catalogue line");
            continue;
        }

        let record: TableRecord =
            serde_json::from_str(&line).map_err(|source| CatalogError::Parse {
                line: line_no,
                source,
            })?;
        validate(&record, line_no)?;
        records.push(record);
    }

    info!(path = %path.display(), tables = records.len(), "loaded catalogue");
    Ok(records)
}

/// Write a catalogue atomically using temp file + rename
pub fn write_jsonl(path: &Path, records: &[TableRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }

    let mut data = String::new();
    for record in records {
        data.push_str(&serde_json::to_string(record)?);
        data.push('\n');
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data).map_err(|e| CatalogError::io(&temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| CatalogError::io(path, e))?;
    Ok(())
}

fn validate(record: &TableRecord, line: usize) -> Result<()> {
    if record.table_name.trim().is_empty() {
        return Err(CatalogError::InvalidRecord {
            line,
            reason: "table_name is empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablescout_core::ColumnInfo;
    use tempfile::TempDir;

    fn record(name: &str) -> TableRecord {
        TableRecord {
            dataset: "sales".to_string(),
            table_name: name.to_string(),
            description: "Daily sales".to_string(),
            columns: vec![ColumnInfo::new("date", "Sales date")],
            tags: vec!["sales".to_string()],
            last_modified: "2024-01-14".to_string(),
            row_count: 10,
        }
    }

    #[test]
    fn test_write_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("catalog.jsonl");

        let records = vec![record("daily_sales"), record("weekly_sales")];
        write_jsonl(&path, &records).unwrap();

        let loaded = load_jsonl(&path).unwrap();
        assert_eq!(loaded, records);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.jsonl");
        std::fs::write(
            &path,
            "\n{\"dataset\":\"a\",\"table_name\":\"orders\"}\n   \n",
        )
        .unwrap();

        let loaded = load_jsonl(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].full_name(), "a.orders");
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.jsonl");
        std::fs::write(
            &path,
            "{\"dataset\":\"a\",\"table_name\":\"orders\"}\n{not json}\n",
        )
        .unwrap();

        let err = load_jsonl(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_empty_table_name_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.jsonl");
        std::fs::write(&path, "{\"dataset\":\"a\",\"table_name\":\" \"}\n").unwrap();

        let err = load_jsonl(&path).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { line: 1, .. }));
        assert!(err.to_string().contains("table_name is empty"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_jsonl(Path::new("/nonexistent/catalog.jsonl")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
