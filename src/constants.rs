/// Column header constants shared by the table reader and writer.
/// Raw tables are produced by the recruiting-site crawler; cleaned tables are
/// consumed by the chart components.

// Raw input headers
pub const COL_KEYWORD: &str = "关键词";
pub const COL_JOB_TITLE: &str = "工作名称";
pub const COL_COMPANY_NAME: &str = "公司名称";
pub const COL_EDUCATION: &str = "学历";
pub const COL_SALARY: &str = "薪资";
pub const COL_EXPERIENCE: &str = "经验要求";
pub const COL_COMPANY_PROPERTY: &str = "公司性质";
pub const COL_COMPANY_SIZE: &str = "公司规模";
pub const COL_WORK_TYPE: &str = "工作类型";

// The crawler writes the district under 地区; the cleaned table reuses 地区 for the inferred region.
pub const COL_REGION: &str = "地区";
pub const DISTRICT_ALIASES: &[&str] = &[COL_REGION, "cityDistrict", "地区/cityDistrict"];

// Output-only header
pub const COL_JOB_CATEGORY: &str = "职位分类";

/// Published column order of the cleaned table.
pub const OUTPUT_COLUMNS: [&str; 11] = [
    COL_JOB_CATEGORY,
    COL_KEYWORD,
    COL_JOB_TITLE,
    COL_COMPANY_NAME,
    COL_REGION,
    COL_EDUCATION,
    COL_SALARY,
    COL_EXPERIENCE,
    COL_COMPANY_PROPERTY,
    COL_COMPANY_SIZE,
    COL_WORK_TYPE,
];

/// Files are written with a UTF-8 byte order mark so spreadsheet tools pick the right encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// Defaults used when neither the config file nor the environment supplies a value
pub const DEFAULT_CONFIG_FILE: &str = "job_cleaner.toml";
pub const DEFAULT_INPUT_FILE: &str = "zhilian_computer_jobs.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "cleaned_zhilian_jobs.csv";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "job_cleaner.log";
pub const DEFAULT_REGION: &str = "西安";

// Environment overrides
pub const ENV_INPUT: &str = "JOB_CLEANER_INPUT";
pub const ENV_OUTPUT: &str = "JOB_CLEANER_OUTPUT";
pub const ENV_REPORT: &str = "JOB_CLEANER_REPORT";
pub const ENV_LOG_DIR: &str = "JOB_CLEANER_LOG_DIR";
