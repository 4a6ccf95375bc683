//! CSV loader for batch salary input.
//!
//! ## CSV Format
//!
//! The expected CSV format uses the following columns. Column order does **not**
//! matter (headers are matched by name). All header names are case-sensitive
//! and must match exactly.
//!
//! | Column       | Required | Type    | Notes                                  |
//! |--------------|----------|---------|----------------------------------------|
//! | `gross`      | yes      | decimal | Monthly gross salary in VND            |
//! | `dependents` | no       | integer | Registered dependents, empty means `0` |
//! | `region`     | no       | integer | Wage region id 1 to 4, empty means `1` |
//!
//! ### Minimal example
//!
//! ```csv
//! gross
//! 20000000
//! ```
//!
//! ### Full example
//!
//! ```csv
//! gross,dependents,region
//! 20000000,0,1
//! 50000000,2,3
//! ```
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use pit_core::Region;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    gross: Decimal,
    dependents: Option<u32>,
    region: Option<u8>,
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One validated row, ready to assess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInput {
    pub gross: Decimal,
    pub dependents: u32,
    pub region: Region,
}

/// Errors that can occur while loading batch input.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `region` cell named a wage region outside 1 to 4. The `usize` is
    /// the 1-based row number (header = row 0).
    #[error("unknown wage region {region} on row {row}, expected 1 to 4")]
    InvalidRegion { region: u8, row: usize },

    /// The input source could not be read at all.
    #[error("failed to read '{path}'")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a BatchInput.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<BatchInput, CsvLoadError> {
    let region = match row.region {
        Some(id) => Region::from_id(id).ok_or(CsvLoadError::InvalidRegion {
            region: id,
            row: row_number,
        })?,
        None => Region::default(),
    };

    Ok(BatchInput {
        gross: row.gross,
        dependents: row.dependents.unwrap_or(0),
        region,
    })
}

/// Parse CSV text (the full file contents as a &str) and return a vector of
/// BatchInput. Rows are returned in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [CsvLoadError::InvalidRegion] – if any row names a wage region id
///   outside 1 to 4.
pub fn load_from_str(input: &str) -> Result<Vec<BatchInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    let inputs: Vec<BatchInput> = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            let row_number = idx + 1; // 1-based for user-facing messages
            convert_row(row, row_number)
        })
        .collect::<Result<_, _>>()?;

    debug!(rows = inputs.len(), "Loaded batch input");
    Ok(inputs)
}

/// Convenience wrapper: read a file from disk (or stdin when the path is
/// `-`) and delegate to [load_from_str].
pub fn load(path: &Path) -> Result<Vec<BatchInput>, CsvLoadError> {
    let contents = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CsvLoadError::Io {
                path: "-".to_string(),
                source,
            })?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
            path: path.display().to_string(),
            source,
        })?
    };
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    // -----------------------------------------------------------------------
    // Helper: the minimal set of columns
    // -----------------------------------------------------------------------
    const MINIMAL_CSV: &str = "\
gross
20000000
";

    // -----------------------------------------------------------------------
    // Helper: every column populated, several rows
    // -----------------------------------------------------------------------
    const FULL_CSV: &str = "\
gross,dependents,region
20000000,0,1
50000000,2,3
13700000,1,4
";

    // -----------------------------------------------------------------------
    // 1. Minimal CSV – only the gross column, optionals take defaults
    // -----------------------------------------------------------------------
    #[test]
    fn test_minimal_csv_defaults_dependents_and_region() {
        let inputs = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(inputs.len(), 1);
        assert_eq!(
            inputs[0],
            BatchInput {
                gross: dec!(20_000_000),
                dependents: 0,
                region: Region::I,
            }
        );
    }

    // -----------------------------------------------------------------------
    // 2. Full CSV – every column populated, order preserved
    // -----------------------------------------------------------------------
    #[test]
    fn test_full_csv_all_fields_populated() {
        let inputs = load_from_str(FULL_CSV).expect("should parse full CSV");

        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[1].gross, dec!(50_000_000));
        assert_eq!(inputs[1].dependents, 2);
        assert_eq!(inputs[1].region, Region::III);
        assert_eq!(inputs[2].region, Region::IV);
    }

    // -----------------------------------------------------------------------
    // 3. Empty region cell falls back to region I
    // -----------------------------------------------------------------------
    #[test]
    fn test_empty_optional_cells_take_defaults() {
        let csv = "gross,dependents,region\n20000000,,\n";
        let inputs = load_from_str(csv).expect("empty optionals are fine");

        assert_eq!(inputs[0].dependents, 0);
        assert_eq!(inputs[0].region, Region::I);
    }

    // -----------------------------------------------------------------------
    // 4. Error: unknown wage region, with the offending row number
    // -----------------------------------------------------------------------
    #[test]
    fn test_invalid_region_reports_row_number() {
        let csv = "\
gross,dependents,region
20000000,0,1
30000000,1,7
";
        let result = load_from_str(csv);
        assert!(result.is_err());

        match result.unwrap_err() {
            CsvLoadError::InvalidRegion { region, row } => {
                assert_eq!(region, 7);
                assert_eq!(row, 2); // second data row
            }
            other => panic!("expected InvalidRegion, got {:?}", other),
        }
    }

    // -----------------------------------------------------------------------
    // 5. Error: non-numeric value in the gross field
    // -----------------------------------------------------------------------
    #[test]
    fn test_non_numeric_gross_returns_parse_error() {
        let csv = "gross,dependents,region\nnot_a_number,0,1\n";
        let result = load_from_str(csv);
        assert!(result.is_err());

        match result.unwrap_err() {
            CsvLoadError::Parse(_) => { /* expected */ }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    // -----------------------------------------------------------------------
    // 6. Error: missing required column
    // -----------------------------------------------------------------------
    #[test]
    fn test_missing_gross_column_returns_parse_error() {
        let csv = "dependents,region\n0,1\n";
        let result = load_from_str(csv);
        assert!(result.is_err());

        match result.unwrap_err() {
            CsvLoadError::Parse(_) => { /* expected */ }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    // -----------------------------------------------------------------------
    // 7. Header-only and empty inputs yield zero rows
    // -----------------------------------------------------------------------
    #[test]
    fn test_header_only_csv_returns_empty_vec() {
        let inputs = load_from_str("gross,dependents,region\n").expect("header-only is valid");
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_completely_empty_string_returns_empty_vec() {
        let inputs = load_from_str("").expect("empty string yields zero rows");
        assert!(inputs.is_empty());
    }

    // -----------------------------------------------------------------------
    // 8. Whitespace tolerance: spaces around values are trimmed
    // -----------------------------------------------------------------------
    #[test]
    fn test_whitespace_around_values_is_trimmed() {
        let csv = "\
gross , dependents , region
20000000 , 1 , 2
";
        let inputs = load_from_str(csv).expect("should tolerate surrounding whitespace");
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].dependents, 1);
        assert_eq!(inputs[0].region, Region::II);
    }

    // -----------------------------------------------------------------------
    // 9. Column order does not matter
    // -----------------------------------------------------------------------
    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "\
region,gross,dependents
2,45000000,3
";
        let inputs = load_from_str(csv).expect("column order should not matter");
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].gross, dec!(45_000_000));
        assert_eq!(inputs[0].dependents, 3);
        assert_eq!(inputs[0].region, Region::II);
    }
}
