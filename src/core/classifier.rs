use crate::core::{Age, Classification};
use crate::utils::error::{AgeGateError, Result};
use std::io::{BufRead, Write};

pub const DEFAULT_PROMPT: &str = "Enter your age: ";

pub struct AgeClassifier {
    prompt: String,
}

impl AgeClassifier {
    pub fn new() -> Self {
        Self::with_prompt(DEFAULT_PROMPT)
    }

    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Prompts, reads one age, and writes its verdict followed by a newline.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Classification> {
        output.write_all(self.prompt.as_bytes())?;
        output.flush()?;

        let token = read_token(input)?.ok_or(AgeGateError::EmptyInput)?;
        tracing::debug!("Read token {:?}", token);

        let age = Age::parse(&token)?;
        let verdict = age.classify();
        tracing::info!("Age {} classified as {:?}", age.value(), verdict);

        writeln!(output, "{}", verdict)?;
        output.flush()?;
        Ok(verdict)
    }
}

impl Default for AgeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the first whitespace-delimited token, skipping blank lines.
/// `None` means the input ended first.
pub fn read_token<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}
