use std::fmt;

use super::ValidationError;

/// A 4-digit numeric lock code.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub const LENGTH: usize = 4;

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.len() == Self::LENGTH && raw.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPin)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the secret itself.
impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}
