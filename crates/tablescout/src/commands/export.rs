use std::path::Path;

use tablescout_catalog::write_jsonl;

pub fn run(output: &Path, catalog: Option<&Path>) -> anyhow::Result<()> {
    let records = super::load_records(catalog)?;
    write_jsonl(output, &records)?;
    println!("Wrote {} tables to {}", records.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablescout_catalog::{load_jsonl, sample_tables};

    #[test]
    fn test_export_sample_catalogue() {
        let temp = tempfile::TempDir::new().unwrap();
        let output = temp.path().join("catalog.jsonl");

        run(&output, None).unwrap();

        let loaded = load_jsonl(&output).unwrap();
        assert_eq!(loaded, sample_tables());
    }
}
