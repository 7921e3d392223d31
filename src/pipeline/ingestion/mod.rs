// Pipeline ingestion: reading disclosure rows from spreadsheets

pub mod spreadsheet;
