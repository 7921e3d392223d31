use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::Result;
use crate::types::BuildingRecord;

const INDENT: &[u8] = b"    ";

/// Serialize records as a pretty-printed JSON array (4-space indent) into any writer
pub fn write_records<W: Write>(writer: W, records: &[BuildingRecord]) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}

/// Write the records to `path`, replacing any previous file.
///
/// Output goes to a temporary file in the same directory which is renamed over
/// `path` only once fully written, so a failed write leaves the old file intact.
pub fn write_records_to_file(path: &Path, records: &[BuildingRecord]) -> Result<()> {
    let dir = match path.parent().filter(|d| !d.as_os_str().is_empty()) {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            dir
        }
        None => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        write_records(&mut writer, records)?;
        writer.flush()?;
    }
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
