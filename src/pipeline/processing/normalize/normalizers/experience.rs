use crate::pipeline::processing::normalize::rules::{KeywordRule, Label, Normalized, RuleTable};

/// Canonical experience-requirement bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceBand {
    NoExperience,
    UnderOneYear,
    OneToThreeYears,
    ThreeToFiveYears,
    FiveToTenYears,
    OverTenYears,
}

impl Label for ExperienceBand {
    fn label(&self) -> &'static str {
        match self {
            ExperienceBand::NoExperience => "无经验",
            ExperienceBand::UnderOneYear => "1年以下",
            ExperienceBand::OneToThreeYears => "1-3年",
            ExperienceBand::ThreeToFiveYears => "3-5年",
            ExperienceBand::FiveToTenYears => "5-10年",
            ExperienceBand::OverTenYears => "10年以上",
        }
    }
}

const RULES: &[KeywordRule<ExperienceBand>] = &[
    KeywordRule::new(ExperienceBand::NoExperience, &["无经验", "不限"]),
    KeywordRule::new(ExperienceBand::OneToThreeYears, &["1-3年"]),
    KeywordRule::new(ExperienceBand::ThreeToFiveYears, &["3-5年"]),
    // "5年以上" has no band of its own
    KeywordRule::new(ExperienceBand::FiveToTenYears, &["5-10年", "5年以上"]),
    KeywordRule::new(ExperienceBand::OverTenYears, &["10年以上"]),
    KeywordRule::new(ExperienceBand::UnderOneYear, &["1年以下"]),
];

pub static EXPERIENCE_RULES: RuleTable<ExperienceBand> = RuleTable::new(RULES);

pub fn normalize_experience(text: Option<&str>) -> Option<Normalized<ExperienceBand>> {
    text.map(|text| Normalized::classify(&EXPERIENCE_RULES, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> String {
        normalize_experience(Some(text)).unwrap().to_string()
    }

    #[test]
    fn test_bands() {
        assert_eq!(clean("无经验"), "无经验");
        assert_eq!(clean("经验不限"), "无经验");
        assert_eq!(clean("1-3年经验"), "1-3年");
        assert_eq!(clean("3-5年经验"), "3-5年");
        assert_eq!(clean("5-10年"), "5-10年");
        assert_eq!(clean("5年以上"), "5-10年");
        assert_eq!(clean("10年以上"), "10年以上");
        assert_eq!(clean("1年以下"), "1年以下");
    }

    #[test]
    fn test_canonical_labels_are_stable() {
        for rule in EXPERIENCE_RULES.rules() {
            assert_eq!(clean(rule.label.label()), rule.label.label());
        }
    }

    #[test]
    fn test_unrecognized_and_absent() {
        assert_eq!(clean("应届毕业生"), "应届毕业生");
        assert!(!normalize_experience(Some("在校生")).unwrap().is_canonical());
        assert_eq!(normalize_experience(None), None);
    }
}
