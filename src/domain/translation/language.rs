//! Language code value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidLanguageError;

/// ISO 639 language code with an optional region subtag.
///
/// The primary subtag is normalised to lowercase and the region to uppercase,
/// so `EN` and `en` compare equal while `zh-cn` becomes `zh-CN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Build from a code known to be valid and normalised
    pub(crate) fn from_static(code: &'static str) -> Self {
        Self(code.to_string())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag without region (`zh` for `zh-CN`)
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = InvalidLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || InvalidLanguageError {
            input: s.to_string(),
        };

        let (primary, region) = match input.split_once(['-', '_']) {
            Some((p, r)) => (p, Some(r)),
            None => (input, None),
        };

        if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut code = primary.to_ascii_lowercase();

        if let Some(region) = region {
            if !(2..=4).contains(&region.len()) || !region.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid());
            }
            code.push('-');
            code.push_str(&region.to_ascii_uppercase());
        }

        Ok(Self(code))
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = InvalidLanguageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
