// Conversion pipeline: spreadsheet ingestion, row processing, JSON output

pub mod ingestion;
pub mod output;
pub mod processing;

use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::ingestion::spreadsheet::SpreadsheetSource;
use crate::pipeline::processing::transform::RowTransformer;
use crate::types::{BuildingRecord, InputRow, RowSource, Score};

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub total_rows: usize,
    pub missing_benchmarking: usize,
    pub output_file: PathBuf,
    pub duration_secs: f64,
}

pub struct Pipeline {
    config: Config,
    transformer: RowTransformer,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let transformer = RowTransformer::new(config.transform);
        Self { config, transformer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the configured spreadsheet, transform every row, write the JSON output
    pub fn run(&self) -> Result<PipelineResult> {
        let mut source = SpreadsheetSource::new(&self.config.files.input, self.config.columns.clone());
        self.run_with_source(&mut source)
    }

    /// Transform every row of `source` and write the output file.
    ///
    /// Nothing is written unless every row transforms successfully.
    #[instrument(skip(self, source), fields(source = %source.describe()))]
    pub fn run_with_source(&self, source: &mut dyn RowSource) -> Result<PipelineResult> {
        let started = Instant::now();

        info!("📥 Reading rows...");
        let rows = source.rows()?;
        info!("✅ Read {} rows", rows.len());

        info!("🔧 Transforming rows...");
        let records = self.transform_all(&rows)?;

        let missing_benchmarking = records
            .iter()
            .filter(|r| r.score == Score::MissingBenchmarking)
            .count();
        debug!(missing_benchmarking, "score sentinel substitutions");

        let output_file = self.config.files.output.clone();
        output::write_records_to_file(&output_file, &records)?;

        Ok(PipelineResult {
            total_rows: records.len(),
            missing_benchmarking,
            output_file,
            duration_secs: started.elapsed().as_secs_f64(),
        })
    }

    fn transform_all(&self, rows: &[InputRow]) -> Result<Vec<BuildingRecord>> {
        let mut records = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            records.push(self.transformer.transform(row)?);
            if (i + 1) % 1000 == 0 {
                debug!("Transformed {}/{} rows", i + 1, rows.len());
            }
        }
        Ok(records)
    }
}
