//! CSV boundary: raw crawler tables in, cleaned tables out.
//!
//! Columns are located by header name, so column order in the input does not
//! matter and extra columns are ignored.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::io::{Read, Write};

use crate::constants::{self, OUTPUT_COLUMNS, UTF8_BOM};
use crate::error::{CleanerError, Result};
use crate::pipeline::processing::normalize::normalizers::{
    JobCategory, SalaryRange, COMPANY_SIZE_RULES, EDUCATION_RULES, EXPERIENCE_RULES,
};
use crate::pipeline::processing::normalize::Normalized;
use crate::types::{CleanedRecord, RawRecord};

/// A required input column: the accepted header spellings and the field it feeds
struct InputColumn {
    headers: &'static [&'static str],
    field: &'static str,
}

const RAW_COLUMNS: [InputColumn; 10] = [
    InputColumn { headers: &[constants::COL_KEYWORD, "keyword"], field: "keyword" },
    InputColumn { headers: &[constants::COL_JOB_TITLE], field: "job title" },
    InputColumn { headers: &[constants::COL_COMPANY_NAME], field: "company name" },
    InputColumn { headers: constants::DISTRICT_ALIASES, field: "city district" },
    InputColumn { headers: &[constants::COL_EDUCATION], field: "education" },
    InputColumn { headers: &[constants::COL_SALARY], field: "salary" },
    InputColumn { headers: &[constants::COL_EXPERIENCE], field: "experience" },
    InputColumn { headers: &[constants::COL_COMPANY_PROPERTY], field: "company property" },
    InputColumn { headers: &[constants::COL_COMPANY_SIZE], field: "company size" },
    InputColumn { headers: &[constants::COL_WORK_TYPE], field: "work type" },
];

/// Resolve each column to its position in `header`, failing on the first missing one
fn locate_columns<const N: usize>(
    header: &StringRecord,
    columns: &[InputColumn; N],
) -> Result<[usize; N]> {
    let names: Vec<&str> = header
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').trim())
        .collect();

    let mut positions = [0usize; N];
    for (slot, column) in positions.iter_mut().zip(columns) {
        *slot = names
            .iter()
            .position(|name| column.headers.contains(name))
            .ok_or(CleanerError::MissingColumn {
                column: column.headers[0],
                field: column.field,
            })?;
    }
    Ok(positions)
}

fn cell(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

fn reader_for<R: Read>(reader: R) -> csv::Reader<R> {
    // Short rows are tolerated; missing trailing cells read as absent
    ReaderBuilder::new().flexible(true).from_reader(reader)
}

/// Read a raw crawler table from CSV bytes (UTF-8, optional BOM, header row required)
pub fn read_raw_records(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let mut reader = reader_for(strip_bom(bytes));
    let [keyword, job_title, company_name, city_district, education, salary, experience, company_property, company_size, work_type] =
        locate_columns(reader.headers()?, &RAW_COLUMNS)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(RawRecord {
            keyword: cell(&row, keyword),
            job_title: cell(&row, job_title),
            company_name: cell(&row, company_name),
            city_district: cell(&row, city_district),
            education_text: cell(&row, education),
            salary_text: cell(&row, salary),
            experience_text: cell(&row, experience),
            company_property: cell(&row, company_property),
            company_size_text: cell(&row, company_size),
            work_type: cell(&row, work_type),
        });
    }
    Ok(records)
}

/// Write a cleaned table: BOM, fixed header, one row per record
pub fn write_cleaned_records<W: Write>(mut writer: W, records: &[CleanedRecord]) -> Result<()> {
    writer.write_all(UTF8_BOM)?;
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.to_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read back a table produced by [`write_cleaned_records`]
pub fn read_cleaned_records(bytes: &[u8]) -> Result<Vec<CleanedRecord>> {
    let columns: [InputColumn; 11] = [
        InputColumn { headers: &[constants::COL_JOB_CATEGORY], field: "job category" },
        InputColumn { headers: &[constants::COL_KEYWORD], field: "keyword" },
        InputColumn { headers: &[constants::COL_JOB_TITLE], field: "job title" },
        InputColumn { headers: &[constants::COL_COMPANY_NAME], field: "company name" },
        InputColumn { headers: &[constants::COL_REGION], field: "region" },
        InputColumn { headers: &[constants::COL_EDUCATION], field: "education" },
        InputColumn { headers: &[constants::COL_SALARY], field: "salary range" },
        InputColumn { headers: &[constants::COL_EXPERIENCE], field: "experience band" },
        InputColumn { headers: &[constants::COL_COMPANY_PROPERTY], field: "company property" },
        InputColumn { headers: &[constants::COL_COMPANY_SIZE], field: "company size" },
        InputColumn { headers: &[constants::COL_WORK_TYPE], field: "work type" },
    ];

    let mut reader = reader_for(strip_bom(bytes));
    let [category, keyword, job_title, company_name, region, education, salary, experience, company_property, company_size, work_type] =
        locate_columns(reader.headers()?, &columns)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(CleanedRecord {
            job_category: cell(&row, category)
                .and_then(|label| JobCategory::from_label(&label))
                .unwrap_or(JobCategory::Other),
            keyword: cell(&row, keyword),
            job_title: cell(&row, job_title),
            company_name: cell(&row, company_name),
            region: cell(&row, region).unwrap_or_default(),
            education: cell(&row, education)
                .map(|text| Normalized::from_cell(&EDUCATION_RULES, &text)),
            salary_range: cell(&row, salary).and_then(|text| SalaryRange::parse(&text)),
            experience_band: cell(&row, experience)
                .map(|text| Normalized::from_cell(&EXPERIENCE_RULES, &text)),
            company_property: cell(&row, company_property),
            company_size: cell(&row, company_size)
                .map(|text| Normalized::from_cell(&COMPANY_SIZE_RULES, &text)),
            work_type: cell(&row, work_type),
        });
    }
    Ok(records)
}
