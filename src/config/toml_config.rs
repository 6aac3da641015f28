use crate::core::classifier::DEFAULT_PROMPT;
use crate::utils::error::{AgeGateError, Result};
use crate::utils::validation::{validate_log_level, validate_non_empty_string, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub prompt: PromptConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub text: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AgeGateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AgeGateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("prompt.text", &self.prompt.text)?;
        if let Some(level) = &self.logging.level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

/// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AgeGateError::ConfigValidationError {
        field: "env_substitution".to_string(),
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert_eq!(config.prompt.text, DEFAULT_PROMPT);
        assert!(config.logging.level.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_sections() {
        let config = FileConfig::from_toml_str(
            r#"
            [prompt]
            text = "How old are you? "

            [logging]
            level = "info"
            "#,
        )
        .unwrap();
        assert_eq!(config.prompt.text, "How old are you? ");
        assert_eq!(config.logging.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("AGE_GATE_TEST_PROMPT", "Age please: ");
        let config =
            FileConfig::from_toml_str("[prompt]\ntext = \"${AGE_GATE_TEST_PROMPT}\"\n").unwrap();
        assert_eq!(config.prompt.text, "Age please: ");

        let untouched =
            FileConfig::from_toml_str("[prompt]\ntext = \"${AGE_GATE_UNSET_VAR_XYZ}\"\n").unwrap();
        assert_eq!(untouched.prompt.text, "${AGE_GATE_UNSET_VAR_XYZ}");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            FileConfig::from_toml_str("[prompt\n"),
            Err(AgeGateError::ConfigValidationError { .. })
        ));

        let config = FileConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(AgeGateError::InvalidConfigValueError { field, .. }) if field == "logging.level"
        ));

        let config = FileConfig::from_toml_str("[prompt]\ntext = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
