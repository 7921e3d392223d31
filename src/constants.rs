/// File and column constants for the LL33 energy disclosure format.
/// These match the 2022 Covered Buildings List published by NYC Buildings.

// Default file names, used when neither config nor CLI overrides them
pub const DEFAULT_INPUT_FILE: &str = "building_energy.xlsx";
pub const DEFAULT_OUTPUT_FILE: &str = "building_energy_data.json";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

// Column headers, exact text including the embedded line breaks
pub const STREET_NUMBER_HEADER: &str = "Street\nNumber";
pub const STREET_NAME_HEADER: &str = "Street Name";
pub const SCORE_HEADER: &str = "Energy Star 1 to 100 Score";
pub const GRADE_HEADER: &str = "Energy\nEfficiency\nGrade";

/// Score text the disclosure uses for buildings that did not benchmark
pub const SOURCE_MISSING_SCORE: &str = "missing required benchmarking\ninformation";

/// Canonical replacement written to the output
pub const MISSING_SCORE: &str = "missing required benchmarking information";

