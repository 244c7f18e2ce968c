use std::collections::HashSet;
use tracing::info;

use crate::types::RawRecord;

/// Counts reported by a deduplication pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    pub before: usize,
    pub after: usize,
}

impl DedupStats {
    pub fn dropped(&self) -> usize {
        self.before - self.after
    }
}

/// Drop records that repeat an earlier record in every field, keeping first occurrences in order
pub fn dedup_records(records: Vec<RawRecord>) -> (Vec<RawRecord>, DedupStats) {
    let before = records.len();
    let mut seen = HashSet::with_capacity(before);

    let unique: Vec<RawRecord> = records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect();

    let stats = DedupStats {
        before,
        after: unique.len(),
    };
    info!(
        rows_before = stats.before,
        rows_after = stats.after,
        "Deduplicated raw records"
    );

    (unique, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, salary: Option<&str>) -> RawRecord {
        RawRecord {
            keyword: Some("python".to_string()),
            job_title: Some(title.to_string()),
            salary_text: salary.map(str::to_string),
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_keeps_one_copy_of_repeated_record() {
        let records = vec![
            posting("a", Some("1-2万")),
            posting("a", Some("1-2万")),
            posting("a", Some("1-2万")),
        ];
        let (unique, stats) = dedup_records(records);
        assert_eq!(unique.len(), 1);
        assert_eq!(stats.dropped(), 2);
    }

    #[test]
    fn test_order_preserved_and_partial_matches_kept() {
        let records = vec![
            posting("b", None),
            posting("a", Some("1-2万")),
            posting("b", None),
            posting("a", Some("2-3万")),
        ];
        let (unique, stats) = dedup_records(records);
        let titles: Vec<_> = unique.iter().map(|r| r.job_title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["b", "a", "a"]);
        assert_eq!(unique[2].salary_text.as_deref(), Some("2-3万"));
        assert_eq!(stats, DedupStats { before: 4, after: 3 });
    }

    #[test]
    fn test_empty_batch() {
        let (unique, stats) = dedup_records(Vec::new());
        assert!(unique.is_empty());
        assert_eq!(stats.dropped(), 0);
    }
}
