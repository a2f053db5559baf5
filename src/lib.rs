pub mod config;
pub mod core;
pub mod domain;
pub mod ffi;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use crate::core::area::{checked_ellipse_area, ellipse_area};
pub use crate::core::{batch_pipeline::BatchPipeline, engine::AreaEngine};
pub use domain::model::{AreaRecord, AreaReport, Ellipse, EllipseRow};
pub use domain::ports::{AxisPolicy, OutputFormat};
pub use utils::error::{AreaError, Result};
