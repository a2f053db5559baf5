pub mod area;
pub mod batch_pipeline;
pub mod engine;

pub use crate::domain::model::{AreaRecord, AreaReport, Ellipse, EllipseRow};
pub use crate::domain::ports::{AxisPolicy, ConfigProvider, OutputFormat, Pipeline, Storage};
pub use crate::utils::error::Result;
