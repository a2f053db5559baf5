use crate::core::area::ellipse_area;
use crate::core::{
    AreaRecord, AreaReport, AxisPolicy, ConfigProvider, EllipseRow, OutputFormat, Pipeline,
    Storage,
};
use crate::utils::error::{AreaError, Result};
use crate::utils::validation::validate_axis;
use serde::Serialize;
use std::path::Path;

pub struct BatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, format: OutputFormat) -> String {
        Path::new(self.config.output_path())
            .join(format.file_name())
            .to_string_lossy()
            .into_owned()
    }

    /// Configured formats in order, each at most once.
    fn selected_formats(&self) -> Vec<OutputFormat> {
        let mut formats = Vec::new();
        for format in self.config.output_formats() {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
        formats
    }

    /// Reads and checks the input without computing or writing anything.
    pub async fn dry_run(&self) -> Result<DryRunSummary> {
        let rows = self.extract().await?;
        let out_of_domain = rows
            .iter()
            .enumerate()
            .filter(|(index, row)| validate_row(index + 1, row).is_err())
            .count();

        Ok(DryRunSummary {
            rows: rows.len(),
            out_of_domain,
            policy: self.config.axis_policy(),
            outputs: self
                .selected_formats()
                .into_iter()
                .map(|format| self.output_file(format))
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DryRunSummary {
    pub rows: usize,
    pub out_of_domain: usize,
    pub policy: AxisPolicy,
    pub outputs: Vec<String>,
}

impl DryRunSummary {
    pub fn would_fail(&self) -> bool {
        self.policy == AxisPolicy::Fail && self.out_of_domain > 0
    }
}

#[derive(Serialize)]
struct JsonSummary {
    count: usize,
    skipped: usize,
    total_area: f64,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: JsonSummary,
    records: &'a [AreaRecord],
}

/// Reads ellipse rows from CSV bytes. Headerless input is read positionally as
/// `semi_major_axis,semi_minor_axis` and every record must have exactly those two columns.
pub fn parse_rows(data: &[u8], has_headers: bool) -> Result<Vec<EllipseRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut rows = Vec::new();
    if has_headers {
        for row in reader.deserialize::<EllipseRow>() {
            rows.push(row?);
        }
    } else {
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = index + 1;
            if record.len() != 2 {
                return Err(AreaError::MalformedRow {
                    row,
                    reason: format!(
                        "expected 2 columns (semi_major_axis,semi_minor_axis), found {}",
                        record.len()
                    ),
                });
            }
            rows.push(EllipseRow {
                id: None,
                semi_major_axis: parse_axis(row, &record[0])?,
                semi_minor_axis: parse_axis(row, &record[1])?,
            });
        }
    }

    Ok(rows)
}

fn parse_axis(row: usize, value: &str) -> Result<f64> {
    value.parse::<f64>().map_err(|e| AreaError::MalformedRow {
        row,
        reason: format!("'{}' is not a number: {}", value, e),
    })
}

/// `row_number` is 1-based and ends up in the error's field name.
fn validate_row(row_number: usize, row: &EllipseRow) -> Result<()> {
    validate_axis(
        &format!("row {} semi_major_axis", row_number),
        row.semi_major_axis,
    )?;
    validate_axis(
        &format!("row {} semi_minor_axis", row_number),
        row.semi_minor_axis,
    )
}

fn to_csv(records: &[AreaRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| AreaError::IoError(e.into_error()))
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BatchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<EllipseRow>> {
        let input = self
            .config
            .input_path()
            .ok_or_else(|| AreaError::MissingConfigError {
                field: "input".to_string(),
            })?;

        tracing::debug!("Reading ellipses from: {}", input);
        let data = self.storage.read_file(input).await?;
        let rows = parse_rows(&data, self.config.has_headers())?;

        if rows.is_empty() {
            tracing::warn!("Input file {} contains no ellipses", input);
        }

        Ok(rows)
    }

    async fn transform(&self, rows: Vec<EllipseRow>) -> Result<AreaReport> {
        let policy = self.config.axis_policy();
        let mut report = AreaReport::default();

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            if let Err(e) = validate_row(row_number, &row) {
                match policy {
                    AxisPolicy::Fail => return Err(e),
                    AxisPolicy::Skip => {
                        tracing::debug!("Skipping row {}: {}", row_number, e);
                        report.skipped += 1;
                        continue;
                    }
                    AxisPolicy::Propagate => {
                        tracing::warn!("Row {} is outside the axis domain: {}", row_number, e);
                    }
                }
            }

            let area = ellipse_area(&row.ellipse());
            report.total_area += area;
            report.records.push(AreaRecord {
                id: row.id,
                semi_major_axis: row.semi_major_axis,
                semi_minor_axis: row.semi_minor_axis,
                area,
            });
        }

        Ok(report)
    }

    async fn load(&self, report: AreaReport) -> Result<Vec<String>> {
        let formats = self.selected_formats();
        if formats.is_empty() {
            return Err(AreaError::ConfigError {
                message: "No output format selected".to_string(),
            });
        }

        let mut written = Vec::with_capacity(formats.len());
        for format in formats {
            let data = match format {
                OutputFormat::Csv => to_csv(&report.records)?,
                OutputFormat::Json => serde_json::to_vec_pretty(&JsonOutput {
                    summary: JsonSummary {
                        count: report.records.len(),
                        skipped: report.skipped,
                        total_area: report.total_area,
                    },
                    records: &report.records,
                })?,
            };

            let path = self.output_file(format);
            tracing::debug!("Writing {} bytes to {}", data.len(), path);
            self.storage.write_file(&path, &data).await?;
            written.push(path);
        }

        Ok(written)
    }
}
