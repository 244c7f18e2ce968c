use serde::Deserialize;
use std::env::{self, VarError};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::{CleanerError, Result};
use crate::pipeline::processing::normalize::normalizers::is_known_region;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub salary: SalaryConfig,
    pub region: RegionConfig,
    pub logging: LoggingConfig,
}

/// Table locations handed to the I/O boundary
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional JSON run report
    pub report: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(constants::DEFAULT_INPUT_FILE),
            output: PathBuf::from(constants::DEFAULT_OUTPUT_FILE),
            report: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SalaryConfig {
    /// Read "10-15K" as 10000-15000 rather than as bare numbers
    pub k_suffix_as_thousand: bool,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            k_suffix_as_thousand: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Region assigned when the company name names no known city
    pub default_city: String,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            default_city: constants::DEFAULT_REGION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for daily-rotated JSON logs; console only when unset
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: constants::DEFAULT_LOG_FILE_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default file when it exists.
    /// An explicitly named file must exist; the default one is optional.
    /// Validation is left to the caller, after env and CLI overrides are applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(constants::DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CleanerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply `JOB_CLEANER_*` environment overrides on top of file values
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(input) = env_path(constants::ENV_INPUT)? {
            self.paths.input = input;
        }
        if let Some(output) = env_path(constants::ENV_OUTPUT)? {
            self.paths.output = output;
        }
        if let Some(report) = env_path(constants::ENV_REPORT)? {
            self.paths.report = Some(report);
        }
        if let Some(directory) = env_path(constants::ENV_LOG_DIR)? {
            self.logging.directory = Some(directory);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !is_known_region(&self.region.default_city) {
            return Err(CleanerError::Config(format!(
                "region.default_city '{}' is not a known region",
                self.region.default_city
            )));
        }
        if self.paths.input == self.paths.output {
            return Err(CleanerError::Config(format!(
                "input and output paths must differ, both are '{}'",
                self.paths.input.display()
            )));
        }
        Ok(())
    }
}

fn env_path(key: &str) -> Result<Option<PathBuf>> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(Some(PathBuf::from(value))),
        Ok(_) | Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.paths.input, PathBuf::from("zhilian_computer_jobs.csv"));
        assert_eq!(config.paths.output, PathBuf::from("cleaned_zhilian_jobs.csv"));
        assert!(config.salary.k_suffix_as_thousand);
        assert_eq!(config.region.default_city, "西安");
        assert!(config.logging.directory.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [salary]
            k_suffix_as_thousand = false

            [region]
            default_city = "北京"
            "#,
        )
        .unwrap();
        assert!(!config.salary.k_suffix_as_thousand);
        assert_eq!(config.region.default_city, "北京");
        assert_eq!(config.paths.output, PathBuf::from("cleaned_zhilian_jobs.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_default_city_is_rejected() {
        let config = Config::from_toml_str("[region]\ndefault_city = \"火星\"\n").unwrap();
        assert!(matches!(config.validate(), Err(CleanerError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = Config::from_toml_str("[salary]\nk_suffix_as_thousand = \"yes\"\n");
        assert!(matches!(result, Err(CleanerError::Toml(_))));
    }

    #[test]
    fn test_load_defers_validation_to_overrides() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("job_cleaner.toml");
        fs::write(&path, "[paths]\ninput = \"jobs.csv\"\noutput = \"jobs.csv\"\n").unwrap();

        let mut config = Config::load(Some(&path)).unwrap();
        assert!(matches!(config.validate(), Err(CleanerError::Config(_))));

        config.paths.output = PathBuf::from("cleaned.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/job_cleaner.toml")));
        assert!(matches!(result, Err(CleanerError::Config(_))));
    }
}
