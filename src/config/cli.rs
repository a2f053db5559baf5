use crate::core::area::{checked_ellipse_area, ellipse_area};
use crate::core::{AreaRecord, AxisPolicy, ConfigProvider, Ellipse, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ellipse-area")]
#[command(about = "Compute ellipse areas from two semi-axes or from a CSV batch")]
pub struct CliConfig {
    #[arg(long = "semi-major", allow_negative_numbers = true, conflicts_with = "input")]
    pub semi_major: Option<f64>,

    #[arg(long = "semi-minor", allow_negative_numbers = true, conflicts_with = "input")]
    pub semi_minor: Option<f64>,

    #[arg(long, help = "CSV file with semi_major_axis,semi_minor_axis columns")]
    pub input: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long = "format", value_enum, value_delimiter = ',', default_value = "csv")]
    pub formats: Vec<OutputFormat>,

    #[arg(long, value_enum, default_value = "propagate")]
    pub policy: AxisPolicy,

    #[arg(long, help = "Input CSV has no header row")]
    pub no_headers: bool,

    #[arg(long, help = "Reject negative or non-finite axes instead of computing them")]
    pub strict: bool,

    #[arg(long, help = "Print the single result as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn is_batch(&self) -> bool {
        self.input.is_some()
    }

    /// Both semi-axes, required when no batch input is given.
    pub fn axes(&self) -> Result<(f64, f64)> {
        let semi_major = validate_required_field("semi-major", &self.semi_major)?;
        let semi_minor = validate_required_field("semi-minor", &self.semi_minor)?;
        Ok((*semi_major, *semi_minor))
    }

    /// Computes the single-value result. `--strict` uses the checked variant,
    /// otherwise out-of-domain axes are only logged.
    pub fn single_record(&self) -> Result<AreaRecord> {
        let (semi_major_axis, semi_minor_axis) = self.axes()?;
        let ellipse = Ellipse::new(semi_major_axis, semi_minor_axis);

        let area = if self.strict {
            checked_ellipse_area(&ellipse)?
        } else {
            if let Err(e) = ellipse.validate_axes() {
                tracing::warn!("{}; computing anyway", e);
            }
            ellipse_area(&ellipse)
        };

        Ok(AreaRecord {
            id: None,
            semi_major_axis,
            semi_minor_axis,
            area,
        })
    }

    /// Text printed for a single-value run: the bare area, or the record as JSON.
    pub fn render_single(&self, record: &AreaRecord) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string(record)?)
        } else {
            Ok(record.area.to_string())
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.input {
            Some(input) => {
                validate_path("input", input)?;
                validate_path("output-path", &self.output_path)
            }
            None => self.axes().map(|_| ()),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.formats
    }

    fn axis_policy(&self) -> AxisPolicy {
        self.policy
    }

    fn has_headers(&self) -> bool {
        !self.no_headers
    }
}
