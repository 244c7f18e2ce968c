use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Monthly salary range in CNY, rendered as `"low-high"` in the cleaned table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalaryRange {
    low: u64,
    high: u64,
}

impl SalaryRange {
    /// Build a range, swapping reversed bounds so `low <= high` always holds
    pub fn new(a: u64, b: u64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn midpoint(&self) -> f64 {
        (self.low as f64 + self.high as f64) / 2.0
    }

    /// Parse the canonical `"low-high"` form (or a single integer) written by the pipeline
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        match text.split_once('-') {
            Some((low, high)) => Some(Self::new(low.parse().ok()?, high.parse().ok()?)),
            None => text.parse().ok().map(|value| Self::new(value, value)),
        }
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Why a salary cell produced no range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryRejection {
    Missing,
    Negotiable,
    /// A `YYYY/MM/DD` date leaked into the salary column upstream
    DateShaped,
    Unrecognized,
}

impl SalaryRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryRejection::Missing => "missing",
            SalaryRejection::Negotiable => "negotiable",
            SalaryRejection::DateShaped => "date_shaped",
            SalaryRejection::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for SalaryRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const NEGOTIABLE: &str = "面议";
const DATE_FORMAT: &str = "%Y/%m/%d";

// 10^4 and 10^3 as decimal exponents
const WAN_EXP: u32 = 4;
const QIAN_EXP: u32 = 3;

// A decimal literal as crawlers write it: "1.5", ".5" and "1." are all accepted
macro_rules! number {
    () => {
        r"(?:[0-9]*\.[0-9]+|[0-9]+\.?)"
    };
}

static BONUS_MONTHS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"·[0-9]+薪").expect("bonus-month pattern is valid"));

// The low bound may carry its own 千 unit, as in "8千-1.2万"
static WAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!("(", number!(), ")(千)?(?:[-~](", number!(), "))?万"))
        .expect("万 pattern is valid")
});

static QIAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!("(", number!(), ")千?(?:[-~](", number!(), "))?千"))
        .expect("千 pattern is valid")
});

static K_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!("(", number!(), ")[kK]?(?:[-~](", number!(), "))?[kK]"))
        .expect("K pattern is valid")
});

static PLAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!("(", number!(), ")(?:[-~](", number!(), "))?"))
        .expect("plain pattern is valid")
});

/// Converts free-text salary cells into canonical monthly ranges
#[derive(Debug, Clone)]
pub struct SalaryNormalizer {
    /// Treat a trailing `K`/`k` as 千
    pub k_suffix_as_thousand: bool,
}

impl Default for SalaryNormalizer {
    fn default() -> Self {
        Self {
            k_suffix_as_thousand: true,
        }
    }
}

impl SalaryNormalizer {
    pub fn new(k_suffix_as_thousand: bool) -> Self {
        Self {
            k_suffix_as_thousand,
        }
    }

    /// Rules are tried in order and the first unit present decides which pattern applies;
    /// a 万 string that fails its pattern is never retried as a bare number.
    pub fn normalize(&self, text: Option<&str>) -> Result<SalaryRange, SalaryRejection> {
        let text = match text.map(str::trim) {
            None | Some("") => return Err(SalaryRejection::Missing),
            Some(text) => ascii_digits(text),
        };

        if text == NEGOTIABLE {
            return Err(SalaryRejection::Negotiable);
        }

        if NaiveDate::parse_from_str(&text, DATE_FORMAT).is_ok() {
            return Err(SalaryRejection::DateShaped);
        }

        let text = BONUS_MONTHS_RE.replace_all(&text, "");

        let range = if text.contains('万') {
            WAN_RE.captures(&text).and_then(|caps| wan_range(&caps))
        } else if text.contains('千') {
            QIAN_RE
                .captures(&text)
                .and_then(|caps| scaled_range(&caps, QIAN_EXP))
        } else if self.k_suffix_as_thousand && text.contains(['k', 'K']) {
            K_RE.captures(&text)
                .and_then(|caps| scaled_range(&caps, QIAN_EXP))
        } else {
            let text = text.replace('元', "");
            PLAIN_RE.captures(&text).and_then(|caps| scaled_range(&caps, 0))
        };

        range.ok_or(SalaryRejection::Unrecognized)
    }
}

/// Full-width digits (０-９) become ASCII so the patterns and integer parsing see one alphabet
fn ascii_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| ('０'..='９').contains(&c)) {
        return Cow::Borrowed(text);
    }
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from_digit(c as u32 - '０' as u32, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}

fn wan_range(caps: &Captures<'_>) -> Option<SalaryRange> {
    let low_exp = if caps.get(2).is_some() { QIAN_EXP } else { WAN_EXP };
    let low = scale_decimal(caps.get(1)?.as_str(), low_exp)?;
    let high = match caps.get(3) {
        Some(high) => scale_decimal(high.as_str(), WAN_EXP)?,
        None => low,
    };
    Some(SalaryRange::new(low, high))
}

/// Group 1 is the low bound, optional group 2 the high bound; both share one unit
fn scaled_range(caps: &Captures<'_>, exp: u32) -> Option<SalaryRange> {
    let low = scale_decimal(caps.get(1)?.as_str(), exp)?;
    let high = match caps.get(2) {
        Some(high) => scale_decimal(high.as_str(), exp)?,
        None => low,
    };
    Some(SalaryRange::new(low, high))
}

/// Multiply a decimal literal by `10^exp`, truncating digits below one yuan
fn scale_decimal(literal: &str, exp: u32) -> Option<u64> {
    let (whole, fraction) = literal.split_once('.').unwrap_or((literal, ""));
    let factor = 10u64.checked_pow(exp)?;
    let whole = if whole.is_empty() { 0 } else { whole.parse::<u64>().ok()? };
    let mut value = whole.checked_mul(factor)?;

    let mut place = factor;
    for digit in fraction.chars().take(exp as usize) {
        place /= 10;
        value = value.checked_add(u64::from(digit.to_digit(10)?) * place)?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> Option<String> {
        SalaryNormalizer::default()
            .normalize(Some(text))
            .ok()
            .map(|range| range.to_string())
    }

    #[test]
    fn test_wan_unit_conversion() {
        assert_eq!(clean("1-2万"), Some("10000-20000".to_string()));
        assert_eq!(clean("1.5万"), Some("15000-15000".to_string()));
        assert_eq!(clean("1.5~2.5万"), Some("15000-25000".to_string()));
        assert_eq!(clean("1.15万"), Some("11500-11500".to_string()));
    }

    #[test]
    fn test_leading_and_trailing_decimal_points() {
        assert_eq!(clean(".5万"), Some("5000-5000".to_string()));
        assert_eq!(clean("0.5万"), Some("5000-5000".to_string()));
        assert_eq!(clean("1.万"), Some("10000-10000".to_string()));
        assert_eq!(clean(".8-1.2万"), Some("8000-12000".to_string()));
        assert_eq!(clean("4.-6千"), Some("4000-6000".to_string()));
    }

    #[test]
    fn test_full_width_digits() {
        assert_eq!(clean("１-２万"), Some("10000-20000".to_string()));
        assert_eq!(clean("８千"), Some("8000-8000".to_string()));
        assert_eq!(clean("５０００-８０００元"), Some("5000-8000".to_string()));
    }

    #[test]
    fn test_mixed_qian_wan_range() {
        assert_eq!(clean("8千-1.2万"), Some("8000-12000".to_string()));
    }

    #[test]
    fn test_qian_unit_conversion() {
        assert_eq!(clean("8千"), Some("8000-8000".to_string()));
        assert_eq!(clean("4.5-6千"), Some("4500-6000".to_string()));
        assert_eq!(clean("5千-8千"), Some("5000-8000".to_string()));
    }

    #[test]
    fn test_yuan_and_bare_numbers() {
        assert_eq!(clean("5000-8000元"), Some("5000-8000".to_string()));
        assert_eq!(clean("6000"), Some("6000-6000".to_string()));
        assert_eq!(clean("10000-20000"), Some("10000-20000".to_string()));
    }

    #[test]
    fn test_bonus_month_suffix_is_ignored() {
        assert_eq!(clean("12·13薪"), Some("12-12".to_string()));
        assert_eq!(clean("1-1.5万·14薪"), Some("10000-15000".to_string()));
        assert_eq!(clean("8千-1万·15薪"), Some("8000-10000".to_string()));
    }

    #[test]
    fn test_k_suffix_as_thousand() {
        assert_eq!(clean("10-15K"), Some("10000-15000".to_string()));
        assert_eq!(clean("10k-15k"), Some("10000-15000".to_string()));
        assert_eq!(clean("8K"), Some("8000-8000".to_string()));
    }

    #[test]
    fn test_k_suffix_disabled_falls_back_to_plain_numbers() {
        let normalizer = SalaryNormalizer::new(false);
        let range = normalizer.normalize(Some("10-15K")).unwrap();
        assert_eq!(range.to_string(), "10-15");
    }

    #[test]
    fn test_absent_outcomes() {
        let normalizer = SalaryNormalizer::default();
        assert_eq!(normalizer.normalize(None), Err(SalaryRejection::Missing));
        assert_eq!(normalizer.normalize(Some("  ")), Err(SalaryRejection::Missing));
        assert_eq!(normalizer.normalize(Some("面议")), Err(SalaryRejection::Negotiable));
        assert_eq!(
            normalizer.normalize(Some("2024/05/01")),
            Err(SalaryRejection::DateShaped)
        );
        assert_eq!(
            normalizer.normalize(Some("薪资保密")),
            Err(SalaryRejection::Unrecognized)
        );
        // 万 present but unparseable: never retried as a bare number
        assert_eq!(normalizer.normalize(Some("万元")), Err(SalaryRejection::Unrecognized));
    }

    #[test]
    fn test_invalid_calendar_date_is_not_date_shaped() {
        // 2024/13/45 is not a real date, so the plain-number rule takes over
        assert_eq!(clean("2024/13/45"), Some("2024-2024".to_string()));
    }

    #[test]
    fn test_reversed_bounds_are_ordered() {
        assert_eq!(clean("3-2万"), Some("20000-30000".to_string()));
        let range = SalaryRange::new(9, 4);
        assert!(range.low() <= range.high());
    }

    #[test]
    fn test_parse_canonical_form() {
        let range = SalaryRange::parse("10000-15000").unwrap();
        assert_eq!(range.low(), 10000);
        assert_eq!(range.high(), 15000);
        assert_eq!(range.midpoint(), 12500.0);
        assert_eq!(SalaryRange::parse("7000"), Some(SalaryRange::new(7000, 7000)));
        assert_eq!(SalaryRange::parse("10-15K"), None);
    }

    #[test]
    fn test_scale_decimal_truncates() {
        assert_eq!(scale_decimal("1.23456", WAN_EXP), Some(12345));
        assert_eq!(scale_decimal("2", QIAN_EXP), Some(2000));
        assert_eq!(scale_decimal("0.5", QIAN_EXP), Some(500));
        assert_eq!(scale_decimal(".5", WAN_EXP), Some(5000));
        assert_eq!(scale_decimal("1.", WAN_EXP), Some(10000));
    }
}
