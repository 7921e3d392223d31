pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use config::Config;
pub use error::{ConvertError, Result};
pub use pipeline::processing::normalize::{normalize, ordinal_suffix};
pub use pipeline::processing::transform::RowTransformer;
pub use pipeline::{Pipeline, PipelineResult};
pub use types::{BuildingRecord, CellValue, InputRow, RowSource, Score, VecSource};
