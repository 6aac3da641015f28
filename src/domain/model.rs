use crate::utils::error::{AgeGateError, Result};
use std::fmt;
use std::str::FromStr;

/// Lower bound of a valid age.
pub const MIN_AGE: f32 = 0.0;
/// First age that is accepted.
pub const ADULT_AGE: f32 = 18.0;

/// An age as entered by the user. Any finite or infinite value is allowed;
/// NaN is rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Age(f32);

impl Age {
    pub fn value(self) -> f32 {
        self.0
    }

    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        match trimmed.parse::<f32>() {
            Ok(value) if !value.is_nan() => Ok(Self(value)),
            _ => Err(AgeGateError::ParseError {
                input: trimmed.to_string(),
            }),
        }
    }

    pub fn classify(self) -> Classification {
        classify(self.0)
    }
}

impl FromStr for Age {
    type Err = AgeGateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Invalid,
    Underage,
    Accepted,
}

impl Classification {
    pub fn message(self) -> &'static str {
        match self {
            Classification::Invalid => "Invalid age",
            Classification::Underage => "You are below 18",
            Classification::Accepted => "Accepted",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Half-open ranges: (-inf, 0) invalid, [0, 18) underage, [18, +inf) accepted.
pub fn classify(age: f32) -> Classification {
    if age < MIN_AGE {
        Classification::Invalid
    } else if age < ADULT_AGE {
        Classification::Underage
    } else {
        Classification::Accepted
    }
}
