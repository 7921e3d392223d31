use tracing::{debug, instrument};

use crate::config::{NormalizeScope, SentinelMatch, TransformConfig};
use crate::constants::{MISSING_SCORE, SOURCE_MISSING_SCORE};
use crate::error::{ConvertError, Result};
use crate::pipeline::processing::normalize::normalize;
use crate::types::{BuildingRecord, CellValue, InputRow, Score};

/// Stateless mapping from a disclosure row to its output record
#[derive(Debug, Clone, Default)]
pub struct RowTransformer {
    options: TransformConfig,
}

impl RowTransformer {
    pub fn new(options: TransformConfig) -> Self {
        Self { options }
    }

    #[instrument(level = "trace", skip(self, row), fields(row = row.row_index))]
    pub fn transform(&self, row: &InputRow) -> Result<BuildingRecord> {
        let addr = self.build_addr(row)?;
        let score = self.map_score(&row.score);

        debug!(addr = %addr, "transformed row");

        Ok(BuildingRecord {
            addr,
            score,
            grade: row.grade.clone(),
        })
    }

    fn build_addr(&self, row: &InputRow) -> Result<String> {
        let prefix = street_number_prefix(row)?;
        let street_name = row.street_name.render();

        let addr = match self.options.normalize_scope {
            NormalizeScope::StreetName => prefix + &normalize(&street_name),
            NormalizeScope::Address => normalize(&(prefix + &street_name)),
        };
        Ok(addr)
    }

    fn map_score(&self, raw: &CellValue) -> Score {
        match raw.as_text() {
            Some(text) if is_missing_sentinel(text, self.options.sentinel_match) => {
                Score::MissingBenchmarking
            }
            _ => Score::Reported(raw.clone()),
        }
    }
}

/// "<number> " for numeric street numbers, empty when absent
fn street_number_prefix(row: &InputRow) -> Result<String> {
    match &row.street_number {
        CellValue::Number(n) => Ok(format!("{} ", n.round_ties_even() as i64)),
        CellValue::Missing => Ok(String::new()),
        CellValue::Text(value) => Err(ConvertError::NonNumericStreetNumber {
            row: row.row_index,
            value: value.clone(),
        }),
    }
}

fn is_missing_sentinel(text: &str, mode: SentinelMatch) -> bool {
    match mode {
        SentinelMatch::Exact => text == SOURCE_MISSING_SCORE,
        SentinelMatch::Relaxed => {
            let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
            collapsed.eq_ignore_ascii_case(MISSING_SCORE)
        }
    }
}
