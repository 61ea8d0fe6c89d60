//! User handle normalisation and validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Handles are 1-15 characters of ASCII letters, digits and underscores.
static HANDLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{1,15}$").expect("valid handle regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
    #[error("Please enter a username")]
    Empty,
    #[error("Username must be 1-15 characters, letters, numbers and underscores only")]
    Invalid,
}

impl HandleError {
    /// Dialog title shown alongside the message.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        "Invalid Username"
    }
}

/// Trim surrounding whitespace and drop a single leading `@`.
#[must_use]
pub fn normalize(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed)
}

/// Check a normalised handle against the allowed character set and length.
#[must_use]
pub fn is_valid(handle: &str) -> bool {
    HANDLE_PATTERN.is_match(handle)
}

/// A validated user handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle(String);

impl Handle {
    /// Normalise and validate raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`HandleError::Empty`] for blank input and
    /// [`HandleError::Invalid`] when the handle has the wrong shape.
    pub fn parse(input: &str) -> Result<Self, HandleError> {
        let handle = normalize(input);
        if handle.is_empty() {
            return Err(HandleError::Empty);
        }
        if !is_valid(handle) {
            return Err(HandleError::Invalid);
        }
        Ok(Self(handle.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the profile page for this handle.
    #[must_use]
    pub fn profile_path(&self) -> String {
        format!("/{}", urlencoding::encode(&self.0))
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
