use crate::pipeline::processing::normalize::rules::{KeywordRule, RuleTable};

// Shaanxi's ten prefecture-level cities come first, then other major cities
const CITIES: &[KeywordRule<&str>] = &[
    KeywordRule::new("西安", &["西安", "西安市"]),
    KeywordRule::new("咸阳", &["咸阳", "咸阳市"]),
    KeywordRule::new("宝鸡", &["宝鸡", "宝鸡市"]),
    KeywordRule::new("渭南", &["渭南", "渭南市"]),
    KeywordRule::new("铜川", &["铜川", "铜川市"]),
    KeywordRule::new("延安", &["延安", "延安市"]),
    KeywordRule::new("榆林", &["榆林", "榆林市"]),
    KeywordRule::new("汉中", &["汉中", "汉中市"]),
    KeywordRule::new("安康", &["安康", "安康市"]),
    KeywordRule::new("商洛", &["商洛", "商洛市"]),
    KeywordRule::new("北京", &["北京"]),
    KeywordRule::new("上海", &["上海"]),
    KeywordRule::new("广州", &["广州"]),
    KeywordRule::new("深圳", &["深圳"]),
    KeywordRule::new("杭州", &["杭州"]),
    KeywordRule::new("南京", &["南京"]),
    KeywordRule::new("成都", &["成都"]),
    KeywordRule::new("武汉", &["武汉"]),
    KeywordRule::new("重庆", &["重庆"]),
    KeywordRule::new("天津", &["天津"]),
    KeywordRule::new("青岛", &["青岛"]),
    KeywordRule::new("大连", &["大连"]),
    KeywordRule::new("厦门", &["厦门"]),
    KeywordRule::new("苏州", &["苏州"]),
    KeywordRule::new("无锡", &["无锡"]),
    KeywordRule::new("郑州", &["郑州"]),
    KeywordRule::new("长沙", &["长沙"]),
    KeywordRule::new("济南", &["济南"]),
    KeywordRule::new("合肥", &["合肥"]),
    KeywordRule::new("福州", &["福州"]),
    KeywordRule::new("南昌", &["南昌"]),
    KeywordRule::new("石家庄", &["石家庄"]),
    KeywordRule::new("太原", &["太原"]),
    KeywordRule::new("呼和浩特", &["呼和浩特"]),
    KeywordRule::new("沈阳", &["沈阳"]),
    KeywordRule::new("长春", &["长春"]),
    KeywordRule::new("哈尔滨", &["哈尔滨"]),
    KeywordRule::new("南宁", &["南宁"]),
    KeywordRule::new("海口", &["海口"]),
    KeywordRule::new("贵阳", &["贵阳"]),
    KeywordRule::new("昆明", &["昆明"]),
    KeywordRule::new("拉萨", &["拉萨"]),
    KeywordRule::new("兰州", &["兰州"]),
    KeywordRule::new("银川", &["银川"]),
    KeywordRule::new("西宁", &["西宁"]),
    KeywordRule::new("乌鲁木齐", &["乌鲁木齐"]),
];

pub static CITY_RULES: RuleTable<&'static str> = RuleTable::new(CITIES);

/// Every region the inferencer can emit
pub fn known_regions() -> impl Iterator<Item = &'static str> {
    CITY_RULES.rules().iter().map(|rule| rule.label)
}

pub fn is_known_region(city: &str) -> bool {
    known_regions().any(|known| known == city)
}

/// Infers the company's city from city names embedded in its registered name
#[derive(Debug, Clone)]
pub struct RegionInferencer {
    default_city: String,
}

impl Default for RegionInferencer {
    fn default() -> Self {
        Self {
            default_city: crate::constants::DEFAULT_REGION.to_string(),
        }
    }
}

impl RegionInferencer {
    /// `default_city` should be one of [`known_regions`]; config validation enforces this
    pub fn new(default_city: impl Into<String>) -> Self {
        Self {
            default_city: default_city.into(),
        }
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    pub fn infer(&self, company_name: Option<&str>) -> &str {
        match company_name.and_then(|name| CITY_RULES.first_match(name)) {
            Some(city) => city,
            None => &self.default_city,
        }
    }
}
