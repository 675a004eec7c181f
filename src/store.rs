use crate::scraper::{PropertyRecord, ScraperError};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Where the harvested records end up, relative to the working directory.
pub const OUTPUT_FILE: &str = "estate_data.json";

/// Write the collected records as indented JSON, replacing any previous file.
pub fn save_records(path: &str, records: &[PropertyRecord]) -> Result<(), ScraperError> {
    let file = File::create(path).map_err(|e| ScraperError::Io(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| ScraperError::Io(e.to_string()))?;
    writer.flush().map_err(|e| ScraperError::Io(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_output_path(tag: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("store_test_{tag}_{nanos}.json"))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn writes_indented_json_array() {
        let path = temp_output_path("indent");
        let records = vec![PropertyRecord {
            uid: Some("135498977".to_string()),
            ..Default::default()
        }];

        save_records(&path, &records).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        // serde_json pretty output: two-space indent, one field per line.
        assert!(written.starts_with("[\n  {\n    \"uid\": \"135498977\""));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn overwrites_previous_file() {
        let path = temp_output_path("overwrite");
        std::fs::write(&path, "stale contents that should disappear").unwrap();

        save_records(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = save_records("/nonexistent-dir/estate_data.json", &[]).unwrap_err();

        assert!(matches!(err, ScraperError::Io(_)));
    }
}
