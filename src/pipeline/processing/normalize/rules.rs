use std::fmt;

/// A value with a fixed published spelling in the cleaned table
pub trait Label: Copy + 'static {
    fn label(&self) -> &'static str;
}

impl Label for &'static str {
    fn label(&self) -> &'static str {
        *self
    }
}

/// One row of a keyword cascade: the label applies when any needle occurs in the text
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<L> {
    pub label: L,
    pub needles: &'static [&'static str],
    /// Needles are lowercase ASCII and are matched against the ASCII-lowercased text
    pub fold_ascii_case: bool,
}

impl<L> KeywordRule<L> {
    pub const fn new(label: L, needles: &'static [&'static str]) -> Self {
        Self {
            label,
            needles,
            fold_ascii_case: false,
        }
    }

    pub const fn caseless(label: L, needles: &'static [&'static str]) -> Self {
        Self {
            label,
            needles,
            fold_ascii_case: true,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.fold_ascii_case {
            let folded = text.to_ascii_lowercase();
            self.needles.iter().any(|needle| folded.contains(needle))
        } else {
            self.needles.iter().any(|needle| text.contains(needle))
        }
    }
}

/// Ordered rule list evaluated top to bottom; the first matching rule wins
#[derive(Debug, Clone, Copy)]
pub struct RuleTable<L: 'static> {
    rules: &'static [KeywordRule<L>],
}

impl<L: Label> RuleTable<L> {
    pub const fn new(rules: &'static [KeywordRule<L>]) -> Self {
        Self { rules }
    }

    pub fn first_match(&self, text: &str) -> Option<L> {
        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.label)
    }

    pub fn rules(&self) -> &'static [KeywordRule<L>] {
        self.rules
    }

    /// Look a label up by its published spelling
    pub fn from_label(&self, text: &str) -> Option<L> {
        self.rules
            .iter()
            .map(|rule| rule.label)
            .find(|label| label.label() == text)
    }
}

/// Outcome of a categorizer that keeps unrecognized text instead of discarding it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Normalized<L> {
    Canonical(L),
    Passthrough(String),
}

impl<L: Label> Normalized<L> {
    /// Classify `text` against `table`, keeping the original text when nothing matches.
    /// A published label always classifies as itself.
    pub fn classify(table: &RuleTable<L>, text: &str) -> Self {
        match table.from_label(text).or_else(|| table.first_match(text)) {
            Some(label) => Normalized::Canonical(label),
            None => Normalized::Passthrough(text.to_string()),
        }
    }

    /// Rebuild a value read back from a cleaned table
    pub fn from_cell(table: &RuleTable<L>, text: &str) -> Self {
        match table.from_label(text) {
            Some(label) => Normalized::Canonical(label),
            None => Normalized::Passthrough(text.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Normalized::Canonical(label) => label.label(),
            Normalized::Passthrough(text) => text,
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, Normalized::Canonical(_))
    }
}

impl<L: Label> fmt::Display for Normalized<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[KeywordRule<&str>] = &[
        KeywordRule::caseless("lang", &["rust"]),
        KeywordRule::new("short", &["短", "小"]),
        KeywordRule::new("late", &["小"]),
    ];

    static TABLE: RuleTable<&'static str> = RuleTable::new(RULES);

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(TABLE.first_match("小"), Some("short"));
        assert_eq!(TABLE.first_match("Rust 小"), Some("lang"));
    }

    #[test]
    fn test_caseless_rule_folds_ascii_only() {
        assert_eq!(TABLE.first_match("RUST"), Some("lang"));
        assert_eq!(TABLE.first_match("ruSt工程师"), Some("lang"));
        assert_eq!(TABLE.first_match("go"), None);
    }

    #[test]
    fn test_passthrough_keeps_original_text() {
        let value = Normalized::classify(&TABLE, "未知");
        assert_eq!(value, Normalized::Passthrough("未知".to_string()));
        assert_eq!(value.to_string(), "未知");
        assert!(!value.is_canonical());
    }

    #[test]
    fn test_label_text_classifies_as_itself() {
        // "late" would otherwise lose to an earlier rule or match nothing at all
        assert_eq!(Normalized::classify(&TABLE, "late"), Normalized::Canonical("late"));
        assert_eq!(Normalized::classify(&TABLE, "short"), Normalized::Canonical("short"));
    }

    #[test]
    fn test_from_cell_matches_labels_exactly() {
        assert_eq!(Normalized::from_cell(&TABLE, "late"), Normalized::Canonical("late"));
        assert_eq!(
            Normalized::from_cell(&TABLE, "rust"),
            Normalized::Passthrough("rust".to_string())
        );
    }
}
