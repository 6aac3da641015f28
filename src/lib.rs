pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Settings};

pub use crate::core::classifier::{AgeClassifier, DEFAULT_PROMPT};
pub use crate::domain::model::{classify, Age, Classification, ADULT_AGE, MIN_AGE};
pub use crate::utils::error::{AgeGateError, Result};
