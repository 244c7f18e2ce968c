//! Metrics for the cleaning pipeline, organized by phase.
//!
//! Every function records through the `metrics` facade, so calls are no-ops
//! unless the embedding process installs a recorder.

use std::fmt;

/// All metric names emitted by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Ingest
    RowsRead,

    // Dedup
    DuplicatesDropped,

    // Normalize
    SalaryAbsent,
    Passthrough,
    BatchSize,

    // Output
    RowsWritten,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RowsRead => "job_cleaner_rows_read_total",
            MetricName::DuplicatesDropped => "job_cleaner_duplicates_dropped_total",
            MetricName::SalaryAbsent => "job_cleaner_salary_absent_total",
            MetricName::Passthrough => "job_cleaner_passthrough_total",
            MetricName::BatchSize => "job_cleaner_batch_size",
            MetricName::RowsWritten => "job_cleaner_rows_written_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Ingest Metrics
// ============================================================================

pub mod ingest {
    use super::MetricName;

    /// Record rows read from the raw input table
    pub fn rows_read(count: usize) {
        ::metrics::counter!(MetricName::RowsRead.as_str()).increment(count as u64);
    }
}

// ============================================================================
// Dedup Metrics
// ============================================================================

pub mod dedup {
    use super::MetricName;

    pub fn duplicates_dropped(count: usize) {
        ::metrics::counter!(MetricName::DuplicatesDropped.as_str()).increment(count as u64);
    }
}

// ============================================================================
// Normalize Metrics
// ============================================================================

pub mod normalize {
    use super::MetricName;

    /// Record a salary cell that produced no range, labelled by rejection reason
    pub fn salary_absent(reason: &'static str) {
        ::metrics::counter!(MetricName::SalaryAbsent.as_str(), "reason" => reason).increment(1);
    }

    /// Record a categorical value kept verbatim because no rule matched
    pub fn passthrough(field: &'static str) {
        ::metrics::counter!(MetricName::Passthrough.as_str(), "field" => field).increment(1);
    }

    pub fn batch_processed(batch_size: usize) {
        ::metrics::histogram!(MetricName::BatchSize.as_str()).record(batch_size as f64);
    }
}

// ============================================================================
// Output Metrics
// ============================================================================

pub mod output {
    use super::MetricName;

    pub fn rows_written(count: usize) {
        ::metrics::counter!(MetricName::RowsWritten.as_str()).increment(count as u64);
    }
}
