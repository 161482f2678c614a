//! The interactive prompts that collect a [`PasswordConfig`].

use std::io::{BufRead, Write};

use anyhow::Context;
use passinator::{PasswordConfig, MIN_PASSWORD_LENGTH};

use crate::ProgError;

pub(crate) struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(input: R, output: W) -> Session<R, W> {
        Session { input, output }
    }

    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask for the length, then for each character class in canonical order.
    pub(crate) fn prompt_config(&mut self) -> Result<PasswordConfig, ProgError> {
        let length = self.prompt_length()?;
        Ok(PasswordConfig {
            length,
            use_lowercase: self.prompt_yes_no("Include lowercase letters? (y/n): ")?,
            use_uppercase: self.prompt_yes_no("Include uppercase letters? (y/n): ")?,
            use_numbers: self.prompt_yes_no("Include numbers? (y/n): ")?,
            use_special: self.prompt_yes_no("Include special characters? (y/n): ")?,
        })
    }

    /// Read the password length. Input that isn't a number falls back to the minimum length; a
    /// number below the minimum, negative ones included, is returned as-is for the generator to
    /// reject.
    fn prompt_length(&mut self) -> Result<isize, ProgError> {
        let answer = self.prompt(&format!(
            "Enter password length (minimum {}): ",
            MIN_PASSWORD_LENGTH
        ))?;
        match parse_length(&answer) {
            Some(length) => Ok(length),
            None => {
                log::warn!("unparseable length {answer:?}; using {MIN_PASSWORD_LENGTH}");
                writeln!(
                    self.output,
                    "Error: Invalid length. Using minimum length of {}",
                    MIN_PASSWORD_LENGTH
                )
                .context("failed to write to stdout")?;
                Ok(MIN_PASSWORD_LENGTH)
            }
        }
    }

    fn prompt_yes_no(&mut self, prompt: &str) -> Result<bool, ProgError> {
        loop {
            let answer = self.prompt(prompt)?;
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(yes),
                None => writeln!(self.output, "Please enter 'y' or 'n'")
                    .context("failed to write to stdout")?,
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, ProgError> {
        write!(self.output, "{}", prompt)
            .and_then(|()| self.output.flush())
            .context("failed to write prompt to stdout")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read your answer from stdin")?;
        if read == 0 {
            return Err(ProgError::EndOfInput);
        }
        Ok(line.trim().to_owned())
    }
}

fn parse_length(answer: &str) -> Option<isize> {
    answer.trim().parse().ok()
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
