// Cleaning pipeline: dedup, per-field normalization, and table I/O around them

pub mod processing;

use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::aggregate::value_counts;
use crate::config::Config;
use crate::error::Result;
use crate::observability::metrics;
use crate::report::{sha256_hex, RunReport};
use crate::table;
use crate::types::{CleanedRecord, RawRecord};
use processing::dedup::dedup_records;
use processing::normalize::FieldNormalizers;

/// Counts describing one cleaned batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub rows_read: usize,
    pub rows_after_dedup: usize,
    pub duplicates_dropped: usize,
    /// Salary cells that produced no range, by rejection reason
    pub salary_absent: BTreeMap<String, usize>,
    /// Categorical values kept verbatim, by field
    pub passthrough: BTreeMap<String, usize>,
    pub category_counts: Vec<(String, usize)>,
    pub region_counts: Vec<(String, usize)>,
}

/// Cleaned records in input order, plus the batch summary
#[derive(Debug, Clone)]
pub struct CleanOutput {
    pub records: Vec<CleanedRecord>,
    pub summary: BatchSummary,
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    normalizers: FieldNormalizers,
}

impl Pipeline {
    pub fn new(normalizers: FieldNormalizers) -> Self {
        Self { normalizers }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(FieldNormalizers::from_config(config))
    }

    pub fn normalizers(&self) -> &FieldNormalizers {
        &self.normalizers
    }

    /// Clean a batch of raw records. Exact duplicates are dropped first, then every
    /// remaining record is normalized field by field; no record is rejected.
    #[instrument(skip_all, fields(rows = records.len()))]
    pub fn run(&self, records: Vec<RawRecord>) -> CleanOutput {
        metrics::ingest::rows_read(records.len());

        let (unique, dedup) = dedup_records(records);
        metrics::dedup::duplicates_dropped(dedup.dropped());

        let mut summary = BatchSummary {
            rows_read: dedup.before,
            rows_after_dedup: dedup.after,
            duplicates_dropped: dedup.dropped(),
            ..BatchSummary::default()
        };

        let mut cleaned = Vec::with_capacity(unique.len());
        for raw in &unique {
            let outcome = self.normalizers.normalize(raw);

            if let Some(rejection) = outcome.salary_rejection {
                debug!(salary = ?raw.salary_text, reason = %rejection, "Salary left absent");
                metrics::normalize::salary_absent(rejection.as_str());
                *summary
                    .salary_absent
                    .entry(rejection.as_str().to_string())
                    .or_insert(0) += 1;
            }
            for field in &outcome.passthrough {
                metrics::normalize::passthrough(field.as_str());
                *summary
                    .passthrough
                    .entry(field.as_str().to_string())
                    .or_insert(0) += 1;
            }

            cleaned.push(outcome.record);
        }
        metrics::normalize::batch_processed(cleaned.len());

        summary.category_counts = value_counts(cleaned.iter().map(|r| r.job_category.as_str()));
        summary.region_counts = value_counts(cleaned.iter().map(|r| r.region.as_str()));

        info!(
            rows_read = summary.rows_read,
            rows_cleaned = cleaned.len(),
            duplicates_dropped = summary.duplicates_dropped,
            "✅ Cleaned batch"
        );
        for (category, count) in &summary.category_counts {
            info!(category = %category, count, "Job category distribution");
        }
        for (region, count) in &summary.region_counts {
            info!(region = %region, count, "Region distribution");
        }

        CleanOutput {
            records: cleaned,
            summary,
        }
    }

    /// Read a raw table from `input`, clean it, and write the cleaned table to `output`
    #[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
    pub fn clean_table(&self, input: &Path, output: &Path) -> Result<RunReport> {
        let started_at = Utc::now();
        let run_id = Uuid::new_v4();
        info!(%run_id, "🚀 Starting cleaning run");

        let bytes = fs::read(input)?;
        let input_sha256 = sha256_hex(&bytes);
        let raw_records = table::read_raw_records(&bytes)?;
        info!(rows = raw_records.len(), "📡 Read raw table");

        let CleanOutput { records, summary } = self.run(raw_records);

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(output)?;
        table::write_cleaned_records(BufWriter::new(file), &records)?;
        metrics::output::rows_written(records.len());
        info!(rows = records.len(), "💾 Wrote cleaned table");

        Ok(RunReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            input_path: input.display().to_string(),
            output_path: output.display().to_string(),
            input_sha256,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::processing::normalize::normalizers::{
        JobCategory, RegionInferencer, SalaryNormalizer,
    };

    fn python_posting() -> RawRecord {
        RawRecord {
            keyword: Some("python".to_string()),
            job_title: Some("Python开发".to_string()),
            company_name: Some("西安XX科技有限公司".to_string()),
            city_district: Some("西安-高新区".to_string()),
            education_text: Some("本科及以上".to_string()),
            salary_text: Some("10-15K".to_string()),
            experience_text: Some("3-5年经验".to_string()),
            company_property: Some("民营".to_string()),
            company_size_text: Some("100-299人".to_string()),
            work_type: Some("全职".to_string()),
        }
    }

    #[test]
    fn test_cleans_posting_end_to_end() {
        let output = Pipeline::default().run(vec![python_posting()]);
        let record = &output.records[0];

        assert_eq!(record.job_category, JobCategory::Python);
        assert_eq!(record.region, "西安");
        assert_eq!(record.education_label(), Some("本科"));
        assert_eq!(record.salary_range.map(|r| r.to_string()).as_deref(), Some("10000-15000"));
        assert_eq!(record.experience_label(), Some("3-5年"));
        assert_eq!(record.company_size_label(), Some("100-299人"));
        assert_eq!(record.work_type.as_deref(), Some("全职"));
    }

    #[test]
    fn test_k_suffix_read_as_bare_numbers_when_disabled() {
        let pipeline = Pipeline::new(FieldNormalizers::new(
            SalaryNormalizer::new(false),
            RegionInferencer::default(),
        ));
        let output = pipeline.run(vec![python_posting()]);
        assert_eq!(
            output.records[0].salary_range.map(|r| r.to_string()).as_deref(),
            Some("10-15")
        );
    }

    #[test]
    fn test_duplicates_dropped_and_counted() {
        let mut negotiable = python_posting();
        negotiable.salary_text = Some("面议".to_string());
        negotiable.education_text = Some("高中".to_string());

        let output = Pipeline::default().run(vec![
            python_posting(),
            python_posting(),
            negotiable.clone(),
        ]);

        assert_eq!(output.records.len(), 2);
        assert_eq!(output.summary.rows_read, 3);
        assert_eq!(output.summary.rows_after_dedup, 2);
        assert_eq!(output.summary.duplicates_dropped, 1);
        assert_eq!(output.summary.salary_absent.get("negotiable"), Some(&1));
        assert_eq!(output.summary.passthrough.get("education"), Some(&1));
        assert_eq!(
            output.summary.category_counts,
            vec![("Python开发".to_string(), 2)]
        );
        assert_eq!(output.summary.region_counts, vec![("西安".to_string(), 2)]);
    }

    #[test]
    fn test_cleaning_cleaned_rows_is_stable() {
        let mut unrestricted = python_posting();
        unrestricted.education_text = Some("学历不限".to_string());

        let pipeline = Pipeline::default();
        let first = pipeline.run(vec![python_posting(), unrestricted]);
        assert!(first.summary.passthrough.is_empty());

        let mut bytes = Vec::new();
        table::write_cleaned_records(&mut bytes, &first.records).unwrap();
        let reread = table::read_raw_records(&bytes).unwrap();
        let second = pipeline.run(reread);

        assert_eq!(second.records, first.records);
        assert_eq!(second.records[1].education_label(), Some("不限"));
        assert!(second.summary.passthrough.is_empty());
    }

    #[test]
    fn test_empty_batch() {
        let output = Pipeline::default().run(Vec::new());
        assert!(output.records.is_empty());
        assert_eq!(output.summary, BatchSummary::default());
    }
}
