//! Parsing information from decimal numbers represented as raw text.
//!
//! Structure:
//!     The work happens in two independent stages. [extract] locates the
//! `embedding` field in a raw response and tokenizes its array body into
//! coordinate strings; [classify] derives a mantissa digit count per string
//! and buckets the strings by it. The stages share no state and either can be
//! used on its own. classify accepts any sequence of decimal tokens, not
//! just extractor output.
//!
//! The response is never parsed into a JSON object model. A JSON parser would
//! hand back floats, and floats have already forgotten how many digits the
//! server printed. Everything here stays at the string level.

pub mod classify;
pub mod extract;
pub mod tokens;

pub use classify::{group_by_mantissa_length, mantissa_length};
pub use extract::{extract_coordinate_strings, ExtractError, EXPECTED_DIMENSION};
pub use tokens::Token;

use std::collections::BTreeMap;

/// Extract an embedding's coordinates from a raw response and group them by
/// mantissa length in one call.
pub fn parse_response(response_text: &str) -> Result<BTreeMap<usize, Vec<String>>, ExtractError> {
    let decimals = extract::extract_coordinate_strings(response_text)?;
    Ok(classify::group_by_mantissa_length(decimals))
}
