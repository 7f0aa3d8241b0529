//! Driver license number value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{LICENSE_NUMBER_LENGTH, LICENSE_PREFIX_LETTERS};
use crate::error::{DomainError, DomainResult};

/// A validated driver license number.
///
/// Format: three uppercase ASCII letters followed by five digits,
/// e.g. `ABC12345`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicenseNumber(String);

impl LicenseNumber {
    /// Parse and validate a raw license number.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if !raw.is_ascii() || raw.len() != LICENSE_NUMBER_LENGTH {
            return Err(DomainError::validation(format!(
                "License number must be exactly {} characters",
                LICENSE_NUMBER_LENGTH
            )));
        }

        let (prefix, digits) = raw.split_at(LICENSE_PREFIX_LETTERS);

        if !prefix.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "First {} characters of the license number must be uppercase letters",
                LICENSE_PREFIX_LETTERS
            )));
        }

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "Last {} characters of the license number must be digits",
                LICENSE_NUMBER_LENGTH - LICENSE_PREFIX_LETTERS
            )));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for LicenseNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LicenseNumber> for String {
    fn from(license: LicenseNumber) -> Self {
        license.0
    }
}

impl fmt::Display for LicenseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
