use crate::constants::MISSING_SCORE;
use crate::error::Result;
use serde::{Serialize, Serializer};

/// A single spreadsheet cell, reduced to the three shapes the transform cares about
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Build a text cell, treating blank text as a missing value
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(value)
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render the cell as display text; missing cells render empty
    pub fn render(&self) -> String {
        match self {
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::Missing => String::new(),
        }
    }
}

/// Whole floats print without a fractional part ("85", not "85.0")
pub fn format_number(n: f64) -> String {
    match as_integral(n) {
        Some(i) => i.to_string(),
        None => n.to_string(),
    }
}

fn as_integral(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Number(n) => match as_integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Missing => serializer.serialize_none(),
        }
    }
}

/// One building row as read from the disclosure spreadsheet
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    /// 1-based data row index (the header row is not counted)
    pub row_index: usize,
    pub street_number: CellValue,
    pub street_name: CellValue,
    pub score: CellValue,
    pub grade: CellValue,
}

/// Energy Star score as written to the output
#[derive(Debug, Clone, PartialEq)]
pub enum Score {
    Reported(CellValue),
    MissingBenchmarking,
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Score::Reported(value) => value.serialize(serializer),
            Score::MissingBenchmarking => serializer.serialize_str(MISSING_SCORE),
        }
    }
}

/// Normalized per-building output record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingRecord {
    pub addr: String,
    pub score: Score,
    pub grade: CellValue,
}

/// Anything that can yield disclosure rows in source order
pub trait RowSource {
    /// Human-readable description used in logs
    fn describe(&self) -> String;

    fn rows(&mut self) -> Result<Vec<InputRow>>;
}

/// Rows held in memory, mostly useful for tests and embedding
pub struct VecSource {
    rows: Vec<InputRow>,
}

impl VecSource {
    pub fn new(rows: Vec<InputRow>) -> Self {
        Self { rows }
    }
}

impl RowSource for VecSource {
    fn describe(&self) -> String {
        format!("in-memory ({} rows)", self.rows.len())
    }

    fn rows(&mut self) -> Result<Vec<InputRow>> {
        Ok(std::mem::take(&mut self.rows))
    }
}
