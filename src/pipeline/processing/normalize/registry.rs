use std::fmt;

use super::normalizers::{
    classify_job, normalize_company_size, normalize_education, normalize_experience,
    RegionInferencer, SalaryNormalizer, SalaryRejection,
};
use crate::config::Config;
use crate::types::{CleanedRecord, RawRecord};

/// Fields with a dedicated normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Salary,
    Education,
    Experience,
    CompanySize,
    JobCategory,
    Region,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Salary => "salary",
            Field::Education => "education",
            Field::Experience => "experience",
            Field::CompanySize => "company_size",
            Field::JobCategory => "job_category",
            Field::Region => "region",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of normalizing one record, with what was lost or kept verbatim along the way
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub record: CleanedRecord,
    pub salary_rejection: Option<SalaryRejection>,
    /// Present categorical fields whose text matched no rule
    pub passthrough: Vec<Field>,
}

/// The set of per-field normalizers applied to every record
#[derive(Debug, Clone, Default)]
pub struct FieldNormalizers {
    pub salary: SalaryNormalizer,
    pub region: RegionInferencer,
}

impl FieldNormalizers {
    pub fn new(salary: SalaryNormalizer, region: RegionInferencer) -> Self {
        Self { salary, region }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            salary: SalaryNormalizer::new(config.salary.k_suffix_as_thousand),
            region: RegionInferencer::new(config.region.default_city.clone()),
        }
    }

    /// Normalize every field of one record. Never fails: unparseable values become
    /// absent (salary) or pass through unchanged (categorical fields).
    pub fn normalize(&self, raw: &RawRecord) -> RecordOutcome {
        let salary = self.salary.normalize(raw.salary_text.as_deref());
        let education = normalize_education(raw.education_text.as_deref());
        let experience_band = normalize_experience(raw.experience_text.as_deref());
        let company_size = normalize_company_size(raw.company_size_text.as_deref());

        let mut passthrough = Vec::new();
        if education.as_ref().is_some_and(|value| !value.is_canonical()) {
            passthrough.push(Field::Education);
        }
        if experience_band.as_ref().is_some_and(|value| !value.is_canonical()) {
            passthrough.push(Field::Experience);
        }
        if company_size.as_ref().is_some_and(|value| !value.is_canonical()) {
            passthrough.push(Field::CompanySize);
        }

        let record = CleanedRecord {
            job_category: classify_job(raw.keyword.as_deref()),
            keyword: raw.keyword.clone(),
            job_title: raw.job_title.clone(),
            company_name: raw.company_name.clone(),
            region: self.region.infer(raw.company_name.as_deref()).to_string(),
            education,
            salary_range: salary.ok(),
            experience_band,
            company_property: raw.company_property.clone(),
            company_size,
            work_type: raw.work_type.clone(),
        };

        RecordOutcome {
            record,
            salary_rejection: salary.err(),
            passthrough,
        }
    }

    /// Run a single field normalizer on one value, rendered the way the cleaned table would show it
    pub fn inspect(&self, field: Field, value: &str) -> String {
        match field {
            Field::Salary => match self.salary.normalize(Some(value)) {
                Ok(range) => range.to_string(),
                Err(rejection) => format!("<absent: {rejection}>"),
            },
            Field::Education => render(normalize_education(Some(value))),
            Field::Experience => render(normalize_experience(Some(value))),
            Field::CompanySize => render(normalize_company_size(Some(value))),
            Field::JobCategory => classify_job(Some(value)).to_string(),
            Field::Region => self.region.infer(Some(value)).to_string(),
        }
    }
}

fn render<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
