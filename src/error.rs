use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No worksheet found: {0}")]
    NoWorksheet(String),

    #[error("Missing expected column {header:?} (available: {available:?})")]
    MissingColumn {
        header: String,
        available: Vec<String>,
    },

    #[error("Row {row}: street number {value:?} is not numeric")]
    NonNumericStreetNumber { row: usize, value: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
