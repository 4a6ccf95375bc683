use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a VND amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for amount parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a VND amount.
///
/// Handles comma as thousands separator (e.g. `"20,000,000"`).
/// Empty or whitespace-only input is treated as 0.
/// Returns an error and logs when the input is invalid.
pub fn parse_vnd(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}
