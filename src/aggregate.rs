//! Aggregates over cleaned records for the chart layer.
//!
//! Charts consume these instead of re-parsing salary strings themselves.

use serde::Serialize;
use std::collections::HashMap;

use crate::pipeline::processing::normalize::normalizers::SalaryRange;
use crate::types::CleanedRecord;

/// Count occurrences of each value, most frequent first, ties broken by label
pub fn value_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Mean salary midpoint per group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAverage {
    pub group: String,
    pub average_salary: f64,
    pub postings: usize,
}

/// Average salary midpoint grouped by `key`, highest average first.
/// Records without a salary range or without a group value are skipped.
pub fn average_salary_by<F>(records: &[CleanedRecord], key: F) -> Vec<GroupAverage>
where
    F: Fn(&CleanedRecord) -> Option<&str>,
{
    let mut groups: HashMap<&str, (f64, usize)> = HashMap::new();
    for record in records {
        let (Some(group), Some(range)) = (key(record), record.salary_range) else {
            continue;
        };
        let entry = groups.entry(group).or_insert((0.0, 0));
        entry.0 += range.midpoint();
        entry.1 += 1;
    }

    let mut averages: Vec<GroupAverage> = groups
        .into_iter()
        .map(|(group, (total, postings))| GroupAverage {
            group: group.to_string(),
            average_salary: (total / postings as f64 * 100.0).round() / 100.0,
            postings,
        })
        .collect();
    averages.sort_by(|a, b| {
        b.average_salary
            .total_cmp(&a.average_salary)
            .then_with(|| a.group.cmp(&b.group))
    });
    averages
}

/// Salary histogram buckets over the range midpoint: lower bound inclusive, upper exclusive
pub const SALARY_BUCKETS: [(&str, u64, Option<u64>); 8] = [
    ("0-5k", 0, Some(5_000)),
    ("5k-8k", 5_000, Some(8_000)),
    ("8k-12k", 8_000, Some(12_000)),
    ("12k-18k", 12_000, Some(18_000)),
    ("18k-25k", 18_000, Some(25_000)),
    ("25k-35k", 25_000, Some(35_000)),
    ("35k-50k", 35_000, Some(50_000)),
    ("50k以上", 50_000, None),
];

pub fn salary_histogram(records: &[CleanedRecord]) -> Vec<(&'static str, usize)> {
    let mut histogram: Vec<(&'static str, usize)> =
        SALARY_BUCKETS.iter().map(|(label, _, _)| (*label, 0)).collect();

    for midpoint in records
        .iter()
        .filter_map(|record| record.salary_range.as_ref().map(SalaryRange::midpoint))
    {
        let bucket = SALARY_BUCKETS.iter().position(|(_, low, high)| {
            midpoint >= *low as f64 && high.map_or(true, |high| midpoint < high as f64)
        });
        if let Some(index) = bucket {
            histogram[index].1 += 1;
        }
    }
    histogram
}

/// Percentage share of each experience band among records that state one
pub fn experience_share(records: &[CleanedRecord]) -> Vec<(String, f64)> {
    let counts = value_counts(records.iter().filter_map(CleanedRecord::experience_label));
    let total: usize = counts.iter().map(|(_, count)| count).sum();

    counts
        .into_iter()
        .map(|(band, count)| {
            let share = (count as f64 / total as f64 * 10_000.0).round() / 100.0;
            (band, share)
        })
        .collect()
}

/// Province for a region, as the map chart expects; unknown regions map to themselves
pub fn province_of(region: &str) -> &str {
    match region {
        "西安" | "咸阳" | "宝鸡" | "渭南" | "铜川" | "延安" | "榆林" | "汉中" | "安康" | "商洛" => {
            "陕西"
        }
        "广州" | "深圳" => "广东",
        "杭州" => "浙江",
        "南京" | "苏州" | "无锡" => "江苏",
        "成都" => "四川",
        "武汉" => "湖北",
        "青岛" | "济南" => "山东",
        "大连" | "沈阳" => "辽宁",
        "厦门" | "福州" => "福建",
        "郑州" => "河南",
        "长沙" => "湖南",
        "合肥" => "安徽",
        "南昌" => "江西",
        "石家庄" => "河北",
        "太原" => "山西",
        "呼和浩特" => "内蒙古",
        "长春" => "吉林",
        "哈尔滨" => "黑龙江",
        "南宁" => "广西",
        "海口" => "海南",
        "贵阳" => "贵州",
        "昆明" => "云南",
        "拉萨" => "西藏",
        "兰州" => "甘肃",
        "银川" => "宁夏",
        "西宁" => "青海",
        "乌鲁木齐" => "新疆",
        // Municipalities are their own province-level unit
        other => other,
    }
}

/// Posting counts per province
pub fn province_counts(records: &[CleanedRecord]) -> Vec<(String, usize)> {
    value_counts(records.iter().map(|record| province_of(&record.region)))
}
