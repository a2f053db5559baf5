use crate::domain::model::{AreaReport, EllipseRow};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// How the batch pipeline treats rows whose axes fall outside the documented domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum AxisPolicy {
    /// Compute the area anyway and let NaN, infinity or negative results through.
    #[default]
    Propagate,
    Skip,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "areas.csv",
            OutputFormat::Json => "areas.json",
        }
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
    fn axis_policy(&self) -> AxisPolicy;
    fn has_headers(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<EllipseRow>>;
    async fn transform(&self, rows: Vec<EllipseRow>) -> Result<AreaReport>;
    async fn load(&self, report: AreaReport) -> Result<Vec<String>>;
}
