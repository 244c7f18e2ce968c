use serde::{Deserialize, Serialize};

use crate::pipeline::processing::normalize::normalizers::{
    CompanySize, EducationLevel, ExperienceBand, JobCategory, SalaryRange,
};
use crate::pipeline::processing::normalize::Normalized;

/// One scraped job posting as the crawler wrote it. Every field is free text and may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    /// Search term the posting was found under
    pub keyword: Option<String>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub city_district: Option<String>,
    pub education_text: Option<String>,
    pub salary_text: Option<String>,
    pub experience_text: Option<String>,
    pub company_property: Option<String>,
    pub company_size_text: Option<String>,
    pub work_type: Option<String>,
}

/// A posting after normalization, in published column order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CleanedRecord {
    pub job_category: JobCategory,
    pub keyword: Option<String>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub region: String,
    pub education: Option<Normalized<EducationLevel>>,
    pub salary_range: Option<SalaryRange>,
    pub experience_band: Option<Normalized<ExperienceBand>>,
    pub company_property: Option<String>,
    pub company_size: Option<Normalized<CompanySize>>,
    pub work_type: Option<String>,
}

impl CleanedRecord {
    /// Cells in `OUTPUT_COLUMNS` order; absent values become empty cells
    pub fn to_row(&self) -> Vec<String> {
        fn cell(value: &Option<String>) -> String {
            value.clone().unwrap_or_default()
        }

        vec![
            self.job_category.to_string(),
            cell(&self.keyword),
            cell(&self.job_title),
            cell(&self.company_name),
            self.region.clone(),
            self.education.as_ref().map(ToString::to_string).unwrap_or_default(),
            self.salary_range.map(|range| range.to_string()).unwrap_or_default(),
            self.experience_band.as_ref().map(ToString::to_string).unwrap_or_default(),
            cell(&self.company_property),
            self.company_size.as_ref().map(ToString::to_string).unwrap_or_default(),
            cell(&self.work_type),
        ]
    }

    pub fn education_label(&self) -> Option<&str> {
        self.education.as_ref().map(Normalized::as_str)
    }

    pub fn experience_label(&self) -> Option<&str> {
        self.experience_band.as_ref().map(Normalized::as_str)
    }

    pub fn company_size_label(&self) -> Option<&str> {
        self.company_size.as_ref().map(Normalized::as_str)
    }
}
