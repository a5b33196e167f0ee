//! Extraction of coordinate strings from a raw embeddings response
//!
//! This module finds the `embedding` field in raw response text and returns
//! its coordinates as the exact substrings that appeared in the source, in
//! source order. The field is located with a compiled regex; the captured
//! array body is then tokenized by the logos lexer in [crate::parsing::tokens]
//! rather than by splitting on a separator pattern. Both give the same token
//! stream (split on whitespace/comma runs, no empty tokens), the lexer just
//! does it in one pass over the body.

use std::fmt;

use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::tokens::Token;

/// The correct number of coordinates in a text-embedding-ada-002 embedding.
pub const EXPECTED_DIMENSION: usize = 1536;

/// Regex for an embedding in raw JSON text.
///
/// The capture is bounded at the first `]`, so nested or malformed brackets
/// never over-capture. Only the first match in the text is used.
static EMBEDDING_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""embedding": \[([^\]]+)\]"#).unwrap());

/// Errors that can occur while extracting coordinates from a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// No `embedding` field with a bracketed array anywhere in the text
    CoordinatesNotFound,
    /// The array was found but holds the wrong number of coordinates
    WrongDimension { expected: usize, actual: usize },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::CoordinatesNotFound => {
                write!(f, "JSON array of coordinates not found")
            }
            ExtractError::WrongDimension { expected, actual } => {
                write!(f, "expected dimension {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Get an embedding's coordinates as strings from a raw JSON response.
pub fn extract_coordinate_strings(response_text: &str) -> Result<Vec<String>, ExtractError> {
    let raw_array = extract_raw_coordinate_array(response_text)?;
    let decimals = tokenize(raw_array);
    check_dimension(decimals.len())?;
    Ok(decimals)
}

/// Get the embedding JSON array body as a substring of a raw JSON response.
fn extract_raw_coordinate_array(response_text: &str) -> Result<&str, ExtractError> {
    let captures = EMBEDDING_ARRAY
        .captures(response_text)
        .ok_or(ExtractError::CoordinatesNotFound)?;
    Ok(captures.get(1).map_or("", |group| group.as_str()))
}

/// Tokenize an array body into decimal strings, preserving source order.
fn tokenize(raw_array: &str) -> Vec<String> {
    let mut lexer = Token::lexer(raw_array);
    let mut decimals = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(Token::Decimal) = result {
            decimals.push(lexer.slice().to_string());
        }
    }

    decimals
}

/// Reject a coordinate count that is wrong for text-embedding-ada-002.
fn check_dimension(dimension: usize) -> Result<(), ExtractError> {
    if dimension != EXPECTED_DIMENSION {
        return Err(ExtractError::WrongDimension {
            expected: EXPECTED_DIMENSION,
            actual: dimension,
        });
    }
    Ok(())
}
