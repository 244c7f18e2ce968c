use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use job_cleaner::aggregate::{
    average_salary_by, experience_share, province_counts, salary_histogram, value_counts,
};
use job_cleaner::config::Config;
use job_cleaner::logging;
use job_cleaner::pipeline::processing::normalize::Field;
use job_cleaner::pipeline::Pipeline;
use job_cleaner::table;
use job_cleaner::types::CleanedRecord;

#[derive(Parser)]
#[command(name = "job_cleaner")]
#[command(about = "Cleans scraped recruiting-site job listings into a chart-ready table")]
#[command(version = "0.1.0")]
struct Cli {
    /// Config file (defaults to job_cleaner.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw crawler table into the published cleaned table
    Clean {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also write a JSON run report here
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print chart aggregates for a cleaned table
    Stats {
        /// Cleaned table to summarize (defaults to the configured output path)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Run one field normalizer on a single value
    Inspect {
        #[arg(value_enum)]
        field: InspectField,
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum InspectField {
    Salary,
    Education,
    Experience,
    CompanySize,
    Category,
    Region,
}

impl From<InspectField> for Field {
    fn from(field: InspectField) -> Self {
        match field {
            InspectField::Salary => Field::Salary,
            InspectField::Education => Field::Education,
            InspectField::Experience => Field::Experience,
            InspectField::CompanySize => Field::CompanySize,
            InspectField::Category => Field::JobCategory,
            InspectField::Region => Field::Region,
        }
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config
        .apply_env()
        .context("Failed to apply environment overrides")?;
    if let Commands::Clean {
        input,
        output,
        report,
    } = &cli.command
    {
        if let Some(input) = input {
            config.paths.input = input.clone();
        }
        if let Some(output) = output {
            config.paths.output = output.clone();
        }
        if let Some(report) = report {
            config.paths.report = Some(report.clone());
        }
    }
    config.validate().context("Invalid configuration")?;

    let _guard = logging::init_logging(&config.logging);
    let pipeline = Pipeline::from_config(&config);

    match cli.command {
        Commands::Clean { .. } => run_clean(&pipeline, &config),
        Commands::Stats { input } => run_stats(&input.unwrap_or(config.paths.output)),
        Commands::Inspect { field, value } => {
            println!("{}", pipeline.normalizers().inspect(field.into(), &value));
            Ok(())
        }
    }
}

fn run_clean(pipeline: &Pipeline, config: &Config) -> Result<()> {
    let paths = &config.paths;
    println!("🚀 Cleaning {}...", paths.input.display());

    let report = pipeline
        .clean_table(&paths.input, &paths.output)
        .with_context(|| format!("Cleaning run failed for '{}'", paths.input.display()))?;
    let summary = &report.summary;

    println!("\n📊 Cleaning Results:");
    println!("   Rows read: {}", summary.rows_read);
    println!("   Duplicates dropped: {}", summary.duplicates_dropped);
    println!("   Rows written: {}", summary.rows_after_dedup);
    for (reason, count) in &summary.salary_absent {
        println!("   Salary absent ({reason}): {count}");
    }
    for (field, count) in &summary.passthrough {
        println!("   Kept verbatim ({field}): {count}");
    }
    println!("\n📂 Job categories:");
    for (category, count) in &summary.category_counts {
        println!("   {category}: {count}");
    }
    println!("\n🗺️  Regions:");
    for (region, count) in &summary.region_counts {
        println!("   {region}: {count}");
    }
    println!("\n💾 Output file: {}", report.output_path);

    if let Some(report_path) = &paths.report {
        report
            .write_json(report_path)
            .with_context(|| format!("Failed to write run report '{}'", report_path.display()))?;
        info!(path = %report_path.display(), "Wrote run report");
        println!("📝 Run report: {}", report_path.display());
    }

    if summary.rows_after_dedup == 0 {
        warn!("Input table had no data rows");
    }
    println!("✅ Cleaning completed successfully");
    Ok(())
}

fn run_stats(path: &Path) -> Result<()> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read cleaned table '{}'", path.display()))?;
    let records = table::read_cleaned_records(&bytes)
        .with_context(|| format!("Failed to parse cleaned table '{}'", path.display()))?;

    println!("📊 {} postings in {}", records.len(), path.display());

    println!("\n📂 Job categories:");
    for (category, count) in value_counts(records.iter().map(|r| r.job_category.as_str())) {
        println!("   {category}: {count}");
    }

    println!("\n🗺️  Provinces:");
    for (province, count) in province_counts(&records) {
        println!("   {province}: {count}");
    }

    println!("\n🎓 Average salary by education:");
    for group in average_salary_by(&records, CleanedRecord::education_label) {
        println!(
            "   {}: {:.0} ({} postings)",
            group.group, group.average_salary, group.postings
        );
    }

    println!("\n🏢 Average salary by company property:");
    for group in average_salary_by(&records, |record| record.company_property.as_deref()) {
        println!(
            "   {}: {:.0} ({} postings)",
            group.group, group.average_salary, group.postings
        );
    }

    println!("\n💰 Salary distribution:");
    for (bucket, count) in salary_histogram(&records) {
        println!("   {bucket}: {count}");
    }

    println!("\n⏳ Experience requirements:");
    for (band, share) in experience_share(&records) {
        println!("   {band}: {share:.2}%");
    }
    Ok(())
}
