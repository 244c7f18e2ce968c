use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::Result;
use crate::pipeline::BatchSummary;

/// Record of one complete cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub input_path: String,
    pub output_path: String,
    /// Fingerprint of the exact input bytes cleaned in this run
    pub input_sha256: String,
    #[serde(flatten)]
    pub summary: BatchSummary,
}

impl RunReport {
    /// Persist the report as pretty-printed JSON, creating parent directories as needed
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json_content = serde_json::to_string_pretty(self)?;
        fs::write(path, json_content)?;
        Ok(())
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_write_json_flattens_summary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports").join("run.json");
        let now = Utc::now();
        let report = RunReport {
            run_id: Uuid::new_v4(),
            started_at: now,
            finished_at: now,
            input_path: "in.csv".to_string(),
            output_path: "out.csv".to_string(),
            input_sha256: sha256_hex(b""),
            summary: BatchSummary {
                rows_read: 3,
                rows_after_dedup: 2,
                duplicates_dropped: 1,
                salary_absent: BTreeMap::from([("negotiable".to_string(), 1)]),
                passthrough: BTreeMap::new(),
                category_counts: vec![("Java开发".to_string(), 2)],
                region_counts: vec![("西安".to_string(), 2)],
            },
        };

        report.write_json(&path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["rows_read"], 3);
        assert_eq!(value["duplicates_dropped"], 1);
        assert_eq!(value["salary_absent"]["negotiable"], 1);
        assert_eq!(value["category_counts"][0][0], "Java开发");
        assert_eq!(value["run_id"], report.run_id.to_string());
    }
}
