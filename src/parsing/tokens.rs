//! Token definitions for raw coordinate array bodies
//!
//! The tokens are defined using the logos derive macro. The grammar is tiny:
//! a coordinate array body alternates between separator runs and decimal
//! literals, and the two patterns partition the input, so the lexer can never
//! produce an empty token or skip a byte.

use logos::Logos;

/// All possible tokens in the body of a raw JSON coordinate array
#[derive(Logos, Debug, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
pub enum Token {
    /// A run of whitespace and/or commas between coordinates
    #[regex(r"[\s,]+")]
    Separator,

    /// A maximal run of anything else: one decimal number exactly as written
    #[regex(r"[^\s,]+")]
    Decimal,
}

impl Token {
    /// Check if this token separates two coordinates
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Separator)
    }

    /// Check if this token is a decimal literal
    pub fn is_decimal(&self) -> bool {
        matches!(self, Token::Decimal)
    }
}
