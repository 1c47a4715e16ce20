//! Flat-file result writer
//!
//! One append-only text file per TLD plus a JSON aggregate written at the end.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::ResultSink;
use crate::error::{DomainSweepError, Result};

/// Aggregate file name, overwritten every run
pub const AGGREGATE_FILE: &str = "available_domains.json";

/// Writes available names to `output_dir`
#[derive(Debug)]
pub struct FileResultWriter {
    files: IndexMap<String, PathBuf>,
    aggregate_path: PathBuf,
}

impl FileResultWriter {
    /// Create the output directory and truncate one text file per TLD.
    pub fn create(
        output_dir: &Path,
        length: usize,
        tlds: &[String],
        started_at: DateTime<Utc>,
    ) -> Result<Self> {
        fs::create_dir_all(output_dir).map_err(|e| io_error(e, output_dir))?;

        let stamp = started_at.format("%Y%m%d_%H%M%S");
        let mut files = IndexMap::new();
        for tld in tlds {
            let path = output_dir.join(format!(
                "available_{}letter_{}_{}.txt",
                length,
                tld.trim_start_matches('.').replace('.', "_"),
                stamp
            ));
            File::create(&path).map_err(|e| io_error(e, &path))?;
            files.insert(tld.clone(), path);
        }

        Ok(Self {
            files,
            aggregate_path: output_dir.join(AGGREGATE_FILE),
        })
    }

    /// Text file backing `tld`
    pub fn path_for(&self, tld: &str) -> Option<&Path> {
        self.files.get(tld).map(PathBuf::as_path)
    }

    pub fn aggregate_path(&self) -> &Path {
        &self.aggregate_path
    }
}

impl ResultSink for FileResultWriter {
    fn append_available(&mut self, tld: &str, names: &[String]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }

        let path = self.files.get(tld).ok_or_else(|| {
            DomainSweepError::internal(format!("No output file registered for TLD '{}'", tld))
        })?;

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| io_error(e, path))?;

        let mut out = BufWriter::new(file);
        for name in names {
            writeln!(out, "{}", name).map_err(|e| io_error(e, path))?;
        }
        out.flush().map_err(|e| io_error(e, path))?;

        tracing::debug!(
            tld = %tld,
            count = names.len(),
            path = %path.display(),
            "Appended available names"
        );
        Ok(())
    }

    fn flush(&mut self, all_available: &IndexMap<String, Vec<String>>) -> Result<()> {
        let content = serde_json::to_string_pretty(all_available).map_err(|e| {
            DomainSweepError::internal(format!("Failed to serialize results: {}", e))
        })?;

        fs::write(&self.aggregate_path, content).map_err(|e| io_error(e, &self.aggregate_path))?;

        tracing::info!(path = %self.aggregate_path.display(), "Wrote aggregate results");
        Ok(())
    }
}

fn io_error(err: std::io::Error, path: &Path) -> DomainSweepError {
    DomainSweepError::io(err.to_string(), Some(path.to_string_lossy().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 5).unwrap()
    }

    #[test]
    fn test_file_names() {
        let dir = tempdir().unwrap();
        let tlds = vec![".com".to_string(), ".co.uk".to_string()];
        let writer = FileResultWriter::create(dir.path(), 3, &tlds, stamp()).unwrap();

        let com = writer.path_for(".com").unwrap();
        assert_eq!(
            com.file_name().unwrap().to_str().unwrap(),
            "available_3letter_com_20261018_093005.txt"
        );
        assert!(com.exists());
        assert!(writer
            .path_for(".co.uk")
            .unwrap()
            .ends_with("available_3letter_co_uk_20261018_093005.txt"));
    }

    #[test]
    fn test_create_truncates_existing() {
        let dir = tempdir().unwrap();
        let tlds = vec![".io".to_string()];
        let mut writer = FileResultWriter::create(dir.path(), 2, &tlds, stamp()).unwrap();
        writer.append_available(".io", &["ba.io".to_string()]).unwrap();

        let writer = FileResultWriter::create(dir.path(), 2, &tlds, stamp()).unwrap();
        let content = fs::read_to_string(writer.path_for(".io").unwrap()).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_append_preserves_order_and_accumulates() {
        let dir = tempdir().unwrap();
        let tlds = vec![".com".to_string()];
        let mut writer = FileResultWriter::create(dir.path(), 3, &tlds, stamp()).unwrap();

        writer
            .append_available(".com", &["bab.com".to_string(), "cab.com".to_string()])
            .unwrap();
        writer.append_available(".com", &[]).unwrap();
        writer.append_available(".com", &["aba.com".to_string()]).unwrap();

        let content = fs::read_to_string(writer.path_for(".com").unwrap()).unwrap();
        assert_eq!(content, "bab.com\ncab.com\naba.com\n");
    }

    #[test]
    fn test_append_unknown_tld_fails() {
        let dir = tempdir().unwrap();
        let mut writer = FileResultWriter::create(dir.path(), 3, &[], stamp()).unwrap();
        assert!(writer.append_available(".net", &["x.net".to_string()]).is_err());
    }

    #[test]
    fn test_flush_writes_ordered_aggregate() {
        let dir = tempdir().unwrap();
        let tlds = vec![".net".to_string(), ".com".to_string()];
        let mut writer = FileResultWriter::create(dir.path(), 3, &tlds, stamp()).unwrap();

        let mut all = IndexMap::new();
        all.insert(".net".to_string(), vec!["bab.net".to_string()]);
        all.insert(".com".to_string(), Vec::new());
        writer.flush(&all).unwrap();

        let content = fs::read_to_string(writer.aggregate_path()).unwrap();
        let parsed: IndexMap<String, Vec<String>> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, all);
        assert!(content.find(".net").unwrap() < content.find(".com").unwrap());
    }
}
