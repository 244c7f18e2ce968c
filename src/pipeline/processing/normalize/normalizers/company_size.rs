use crate::pipeline::processing::normalize::rules::{KeywordRule, Label, Normalized, RuleTable};

/// Canonical headcount brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanySize {
    Over10000,
    From1000To9999,
    From500To999,
    From100To299,
    From20To99,
    Under20,
}

impl Label for CompanySize {
    fn label(&self) -> &'static str {
        match self {
            CompanySize::Over10000 => "10000人以上",
            CompanySize::From1000To9999 => "1000-9999人",
            CompanySize::From500To999 => "500-999人",
            CompanySize::From100To299 => "100-299人",
            CompanySize::From20To99 => "20-99人",
            CompanySize::Under20 => "20人以下",
        }
    }
}

const RULES: &[KeywordRule<CompanySize>] = &[
    KeywordRule::new(CompanySize::Over10000, &["10000人以上"]),
    KeywordRule::new(CompanySize::From1000To9999, &["1000-9999人"]),
    KeywordRule::new(CompanySize::From500To999, &["500-999人"]),
    KeywordRule::new(CompanySize::From100To299, &["100-299人"]),
    KeywordRule::new(CompanySize::From20To99, &["20-99人"]),
    KeywordRule::new(CompanySize::Under20, &["20人以下"]),
];

pub static COMPANY_SIZE_RULES: RuleTable<CompanySize> = RuleTable::new(RULES);

pub fn normalize_company_size(text: Option<&str>) -> Option<Normalized<CompanySize>> {
    text.map(|text| Normalized::classify(&COMPANY_SIZE_RULES, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets() {
        let clean = |text: &str| normalize_company_size(Some(text)).unwrap().to_string();
        assert_eq!(clean("公司规模10000人以上"), "10000人以上");
        assert_eq!(clean("1000-9999人"), "1000-9999人");
        assert_eq!(clean("500-999人"), "500-999人");
        assert_eq!(clean("100-299人"), "100-299人");
        assert_eq!(clean("20-99人"), "20-99人");
        assert_eq!(clean("20人以下"), "20人以下");
    }

    #[test]
    fn test_unlisted_bracket_passes_through() {
        assert_eq!(
            normalize_company_size(Some("300-499人")),
            Some(Normalized::Passthrough("300-499人".to_string()))
        );
        assert_eq!(normalize_company_size(None), None);
    }
}
