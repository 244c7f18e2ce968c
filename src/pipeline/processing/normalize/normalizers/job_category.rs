use crate::pipeline::processing::normalize::rules::{KeywordRule, Label, RuleTable};
use std::fmt;

/// Job family derived from the crawler's search keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobCategory {
    Python,
    Java,
    Frontend,
    Backend,
    Algorithm,
    BigData,
    ArtificialIntelligence,
    CloudComputing,
    NetworkSecurity,
    DataAnalyst,
    ProductManager,
    Operations,
    SystemArchitect,
    Testing,
    Other,
}

impl JobCategory {
    pub const ALL: [JobCategory; 15] = [
        JobCategory::Python,
        JobCategory::Java,
        JobCategory::Frontend,
        JobCategory::Backend,
        JobCategory::Algorithm,
        JobCategory::BigData,
        JobCategory::ArtificialIntelligence,
        JobCategory::CloudComputing,
        JobCategory::NetworkSecurity,
        JobCategory::DataAnalyst,
        JobCategory::ProductManager,
        JobCategory::Operations,
        JobCategory::SystemArchitect,
        JobCategory::Testing,
        JobCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::Python => "Python开发",
            JobCategory::Java => "Java开发",
            JobCategory::Frontend => "前端开发",
            JobCategory::Backend => "后端开发",
            JobCategory::Algorithm => "算法工程师",
            JobCategory::BigData => "大数据工程师",
            JobCategory::ArtificialIntelligence => "人工智能工程师",
            JobCategory::CloudComputing => "云计算工程师",
            JobCategory::NetworkSecurity => "网络安全工程师",
            JobCategory::DataAnalyst => "数据分析师",
            JobCategory::ProductManager => "产品经理",
            JobCategory::Operations => "运维工程师",
            JobCategory::SystemArchitect => "系统架构师",
            JobCategory::Testing => "测试工程师",
            JobCategory::Other => "其他计算机职位",
        }
    }

    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == text)
    }
}

impl Label for JobCategory {
    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const RULES: &[KeywordRule<JobCategory>] = &[
    KeywordRule::caseless(JobCategory::Python, &["python"]),
    KeywordRule::caseless(JobCategory::Java, &["java"]),
    KeywordRule::new(JobCategory::Frontend, &["前端"]),
    KeywordRule::new(JobCategory::Backend, &["后端"]),
    KeywordRule::new(JobCategory::Algorithm, &["算法"]),
    KeywordRule::new(JobCategory::BigData, &["大数据"]),
    KeywordRule::new(JobCategory::ArtificialIntelligence, &["人工智能"]),
    KeywordRule::new(JobCategory::CloudComputing, &["云计算"]),
    KeywordRule::new(JobCategory::NetworkSecurity, &["网络安全", "安全"]),
    KeywordRule::new(JobCategory::DataAnalyst, &["数据分析师"]),
    KeywordRule::new(JobCategory::ProductManager, &["产品经理"]),
    KeywordRule::new(JobCategory::Operations, &["运维"]),
    KeywordRule::new(JobCategory::SystemArchitect, &["系统架构"]),
    KeywordRule::new(JobCategory::Testing, &["测试"]),
];

pub static JOB_CATEGORY_RULES: RuleTable<JobCategory> = RuleTable::new(RULES);

/// Total: every keyword, including a missing one, lands in exactly one category
pub fn classify_job(keyword: Option<&str>) -> JobCategory {
    keyword
        .and_then(|keyword| JOB_CATEGORY_RULES.first_match(keyword))
        .unwrap_or(JobCategory::Other)
}
