//! Shared code to read the OpenAI API key.
//!
//! Two places are searched, in this order:
//!
//! 1. The content of the `OPENAI_API_KEY` environment variable.
//!
//! 2. The `.api_key` file in the repository root.
//!
//! The API key must NOT be committed to this repository. The `.api_key`
//! filename is excluded in `.gitignore` so the fallback file can be used in
//! development scenarios.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the environment variable searched first.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Name of the fallback key file in the repository root.
pub const API_KEY_FILE: &str = ".api_key";

/// Errors that can occur while looking up the API key
#[derive(Debug)]
pub enum KeyError {
    /// Neither the environment variable nor the key file held a non-empty key
    Missing,
    /// The fallback key file could not be read
    Io(io::Error),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::Missing => write!(
                f,
                "no API key: {} is unset and {} is empty or absent",
                API_KEY_VAR, API_KEY_FILE
            ),
            KeyError::Io(error) => write!(f, "failed to read {}: {}", API_KEY_FILE, error),
        }
    }
}

impl std::error::Error for KeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KeyError::Missing => None,
            KeyError::Io(error) => Some(error),
        }
    }
}

impl From<io::Error> for KeyError {
    fn from(error: io::Error) -> Self {
        KeyError::Io(error)
    }
}

/// Get the user's OpenAI API key.
///
/// The environment variable wins when it holds anything non-empty after
/// trimming; otherwise the key file is read and trimmed. A read failure on
/// the fallback (file absent, unreadable) is propagated as [KeyError::Io].
pub fn get_api_key() -> Result<String, KeyError> {
    match env_api_key() {
        Some(key) => Ok(key),
        None => file_api_key(Path::new(API_KEY_FILE)),
    }
}

/// Read a trimmed, non-empty key from the environment, if there is one.
fn env_api_key() -> Option<String> {
    env::var(API_KEY_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read a trimmed key from a key file.
fn file_api_key(path: &Path) -> Result<String, KeyError> {
    let contents = fs::read_to_string(path)?;
    let key = contents.trim().to_string();
    if key.is_empty() {
        return Err(KeyError::Missing);
    }
    Ok(key)
}
