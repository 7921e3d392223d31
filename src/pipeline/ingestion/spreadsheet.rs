use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::{debug, info, instrument, warn};

use crate::config::ColumnsConfig;
use crate::error::{ConvertError, Result};
use crate::types::{CellValue, InputRow, RowSource};

/// Reads disclosure rows from an xlsx/xls/ods workbook
pub struct SpreadsheetSource {
    path: PathBuf,
    columns: ColumnsConfig,
}

impl SpreadsheetSource {
    pub fn new(path: impl AsRef<Path>, columns: ColumnsConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            columns,
        }
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_range(&self) -> Result<Range<Data>> {
        let mut workbook = open_workbook_auto(&self.path)?;

        let range = match &self.columns.sheet {
            Some(name) => workbook.worksheet_range(name)?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| ConvertError::NoWorksheet(self.path.display().to_string()))??,
        };

        let (height, width) = range.get_size();
        info!("Loaded worksheet range {}x{}", height, width);
        Ok(range)
    }
}

impl RowSource for SpreadsheetSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn rows(&mut self) -> Result<Vec<InputRow>> {
        let range = self.load_range()?;
        rows_from_range(&range, &self.columns)
    }
}

/// Column positions of the four fields within the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    street_number: usize,
    street_name: usize,
    score: usize,
    grade: usize,
}

fn resolve_columns(header: &[Data], columns: &ColumnsConfig) -> Result<ColumnIndex> {
    let names: Vec<String> = header.iter().map(|cell| cell.to_string()).collect();

    let find = |wanted: &str| {
        names
            .iter()
            .position(|name| name == wanted)
            .ok_or_else(|| ConvertError::MissingColumn {
                header: wanted.to_string(),
                available: names.clone(),
            })
    };

    Ok(ColumnIndex {
        street_number: find(columns.street_number.as_str())?,
        street_name: find(columns.street_name.as_str())?,
        score: find(columns.score.as_str())?,
        grade: find(columns.grade.as_str())?,
    })
}

/// First row is the header; every following row becomes one `InputRow`.
pub fn rows_from_range(range: &Range<Data>, columns: &ColumnsConfig) -> Result<Vec<InputRow>> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| ConvertError::NoWorksheet("worksheet is empty".to_string()))?;
    let index = resolve_columns(header, columns)?;
    debug!(?index, "resolved header columns");

    let cell = |row: &[Data], col: usize| row.get(col).map(cell_value).unwrap_or(CellValue::Missing);

    Ok(rows
        .enumerate()
        .map(|(i, row)| InputRow {
            row_index: i + 1,
            street_number: cell(row, index.street_number),
            street_name: cell(row, index.street_name),
            score: cell(row, index.score),
            grade: cell(row, index.grade),
        })
        .collect())
}

/// Reduce a calamine cell to the number/text/missing union
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s.as_str()),
        Data::Error(e) => {
            warn!("Cell error {:?} treated as missing", e);
            CellValue::Missing
        }
        Data::Empty => CellValue::Missing,
    }
}
