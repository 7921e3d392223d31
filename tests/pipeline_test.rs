use anyhow::Result;
use building_energy::config::NormalizeScope;
use building_energy::{CellValue, Config, ConvertError, InputRow, Pipeline, VecSource};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn row(index: usize, number: CellValue, name: &str, score: CellValue, grade: &str) -> InputRow {
    InputRow {
        row_index: index,
        street_number: number,
        street_name: CellValue::text(name),
        score,
        grade: CellValue::text(grade),
    }
}

fn sample_rows() -> Vec<InputRow> {
    vec![
        row(1, CellValue::Number(42.0), "Elm Street", CellValue::Number(85.0), "B"),
        row(
            2,
            CellValue::Missing,
            "BROADWAY",
            CellValue::Text("missing required benchmarking\ninformation".to_string()),
            "F",
        ),
        row(3, CellValue::Number(350.0), "5 AVENUE", CellValue::Number(77.0), "B"),
        row(4, CellValue::Number(1.0), "WEST 21 STREET", CellValue::Missing, ""),
    ]
}

fn config_with_output(output: &Path) -> Config {
    Config::default().with_overrides(None, Some(output.to_path_buf()), None)
}

#[test]
fn test_pipeline_writes_records_in_row_order() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("building_energy_data.json");

    let pipeline = Pipeline::new(config_with_output(&output));
    let result = pipeline.run_with_source(&mut VecSource::new(sample_rows()))?;

    assert_eq!(result.total_rows, 4);
    assert_eq!(result.missing_benchmarking, 1);
    assert_eq!(result.output_file, output);

    let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(
        parsed,
        json!([
            {"addr": "42 Elm Street", "score": 85, "grade": "B"},
            {"addr": "BROADWAY", "score": "missing required benchmarking information", "grade": "F"},
            {"addr": "350 5th AVENUE", "score": 77, "grade": "B"},
            {"addr": "1 WEST 21st STREET", "score": null, "grade": null}
        ])
    );
    Ok(())
}

#[test]
fn test_output_objects_have_exact_keys() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("out.json");

    Pipeline::new(config_with_output(&output)).run_with_source(&mut VecSource::new(sample_rows()))?;

    let parsed: Vec<serde_json::Map<String, Value>> =
        serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(parsed.len(), 4);

    let expected: BTreeSet<&str> = ["addr", "score", "grade"].into_iter().collect();
    for object in &parsed {
        let keys: BTreeSet<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, expected);
    }
    Ok(())
}

#[test]
fn test_output_is_indented_with_four_spaces() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("out.json");

    let rows = vec![row(1, CellValue::Number(1.0), "Main Street", CellValue::Number(90.0), "A")];
    Pipeline::new(config_with_output(&output)).run_with_source(&mut VecSource::new(rows))?;

    let text = std::fs::read_to_string(&output)?;
    assert!(text.starts_with("[\n    {\n        \"addr\": \"1 Main Street\","));
    Ok(())
}

#[test]
fn test_address_scope_ordinalizes_street_number() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("out.json");

    let mut config = config_with_output(&output);
    config.transform.normalize_scope = NormalizeScope::Address;

    let rows = vec![row(1, CellValue::Number(42.0), "Elm Street", CellValue::Number(85.0), "B")];
    Pipeline::new(config).run_with_source(&mut VecSource::new(rows))?;

    let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(parsed[0]["addr"], json!("42nd Elm Street"));
    Ok(())
}

#[test]
fn test_fatal_row_writes_no_output() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("out.json");

    let mut rows = sample_rows();
    rows.push(row(5, CellValue::text("12A"), "Main Street", CellValue::Missing, "C"));

    let err = Pipeline::new(config_with_output(&output))
        .run_with_source(&mut VecSource::new(rows))
        .unwrap_err();

    assert!(matches!(err, ConvertError::NonNumericStreetNumber { row: 5, .. }));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_missing_input_file_writes_no_output() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("out.json");
    let input = temp_dir.path().join("building_energy.xlsx");

    let config = Config::default().with_overrides(Some(input), Some(output.clone()), None);
    let err = Pipeline::new(config).run().unwrap_err();

    assert!(matches!(err, ConvertError::Spreadsheet(_)));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_output_parent_directories_are_created() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("nested").join("dir").join("out.json");

    let result = Pipeline::new(config_with_output(&output)).run_with_source(&mut VecSource::new(Vec::new()))?;

    assert_eq!(result.total_rows, 0);
    assert_eq!(std::fs::read_to_string(&output)?, "[]");
    Ok(())
}

fn fixture_workbook() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/building_energy.xlsx")
}

fn expected_workbook_records() -> Value {
    json!([
        {"addr": "42 Elm Street", "score": 85, "grade": "B"},
        {"addr": "WEST 21st STREET", "score": "missing required benchmarking information", "grade": "F"},
        {"addr": "2 1st AVENUE", "score": 72.5, "grade": "C"}
    ])
}

#[test]
fn test_workbook_first_sheet_by_default() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("building_energy_data.json");

    let config = Config::default().with_overrides(Some(fixture_workbook()), Some(output.clone()), None);
    let result = Pipeline::new(config).run()?;

    assert_eq!(result.total_rows, 3);
    assert_eq!(result.missing_benchmarking, 1);

    let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(parsed, expected_workbook_records());
    Ok(())
}

#[test]
fn test_workbook_named_sheet() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("building_energy_data.json");

    let config = Config::default().with_overrides(
        Some(fixture_workbook()),
        Some(output.clone()),
        Some("CBL".to_string()),
    );
    Pipeline::new(config).run()?;

    let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(parsed, expected_workbook_records());
    Ok(())
}

#[test]
fn test_workbook_unknown_sheet_writes_no_output() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("building_energy_data.json");

    let config = Config::default().with_overrides(
        Some(fixture_workbook()),
        Some(output.clone()),
        Some("Nope".to_string()),
    );
    let err = Pipeline::new(config).run().unwrap_err();

    assert!(matches!(err, ConvertError::Spreadsheet(_)));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_workbook_sheet_without_disclosure_headers() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("building_energy_data.json");

    let config = Config::default().with_overrides(
        Some(fixture_workbook()),
        Some(output.clone()),
        Some("Notes".to_string()),
    );
    let err = Pipeline::new(config).run().unwrap_err();

    match err {
        ConvertError::MissingColumn { header, available } => {
            assert_eq!(header, "Street\nNumber");
            assert_eq!(available, vec!["Source".to_string()]);
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
    assert!(!output.exists());
    Ok(())
}
