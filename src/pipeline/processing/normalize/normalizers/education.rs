use crate::pipeline::processing::normalize::rules::{KeywordRule, Label, Normalized, RuleTable};

/// Canonical education requirement tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    Bachelor,
    Master,
    Doctorate,
    Associate,
    Vocational,
    Unrestricted,
}

impl Label for EducationLevel {
    fn label(&self) -> &'static str {
        match self {
            EducationLevel::Bachelor => "本科",
            EducationLevel::Master => "硕士",
            EducationLevel::Doctorate => "博士",
            EducationLevel::Associate => "大专",
            EducationLevel::Vocational => "中专/中技",
            EducationLevel::Unrestricted => "不限",
        }
    }
}

const RULES: &[KeywordRule<EducationLevel>] = &[
    KeywordRule::new(EducationLevel::Bachelor, &["本科"]),
    KeywordRule::new(EducationLevel::Master, &["硕士"]),
    KeywordRule::new(EducationLevel::Doctorate, &["博士"]),
    KeywordRule::new(EducationLevel::Associate, &["大专"]),
    KeywordRule::new(EducationLevel::Vocational, &["中专", "中技"]),
    KeywordRule::new(EducationLevel::Unrestricted, &["学历不限", "无"]),
];

pub static EDUCATION_RULES: RuleTable<EducationLevel> = RuleTable::new(RULES);

pub fn normalize_education(text: Option<&str>) -> Option<Normalized<EducationLevel>> {
    text.map(|text| Normalized::classify(&EDUCATION_RULES, text))
}
