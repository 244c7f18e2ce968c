pub mod company_size;
pub mod education;
pub mod experience;
pub mod job_category;
pub mod region;
pub mod salary;

pub use company_size::{normalize_company_size, CompanySize, COMPANY_SIZE_RULES};
pub use education::{normalize_education, EducationLevel, EDUCATION_RULES};
pub use experience::{normalize_experience, ExperienceBand, EXPERIENCE_RULES};
pub use job_category::{classify_job, JobCategory, JOB_CATEGORY_RULES};
pub use region::{is_known_region, known_regions, RegionInferencer, CITY_RULES};
pub use salary::{SalaryNormalizer, SalaryRange, SalaryRejection};
