use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::Parser;

mod output;
mod session;

/// Generate a cryptographically secure password, answering a few questions about what it should
/// contain.
#[derive(Parser)]
#[command(version)]
struct Args {}

fn run() -> Result<(), ProgError> {
    let Args {} = Args::parse();

    let stdout = io::stdout();
    output::display_banner(stdout.lock()).context("failed to write to stdout")?;

    let mut session = session::Session::new(io::stdin().lock(), stdout.lock());
    let config = session.prompt_config()?;
    let password = passinator::generate(&config)?;
    output::display_password(&password, session.output()).context("failed to write to stdout")?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let code = exit_code(run(), io::stderr().lock());
    if code != 0 {
        process::exit(code);
    }
}

/// Report the outcome of `run` on `errors`, and return the process exit status for it.
fn exit_code(result: Result<(), ProgError>, mut errors: impl Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(ProgError::Generation(err)) => {
            log::debug!("generation failed: {err:?}");
            let _ = writeln!(errors, "Error generating password: {err}");
            1
        }
        Err(err) => {
            let _ = writeln!(errors, "{err}");
            1
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error(transparent)]
    Generation(#[from] passinator::GenerationError),
    #[error("Input ended before all questions were answered.")]
    EndOfInput,
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

#[cfg(test)]
mod tests {
    use passinator::GenerationError;

    use super::*;

    fn report(result: Result<(), ProgError>) -> (i32, String) {
        let mut errors = Vec::new();
        let code = exit_code(result, &mut errors);
        (code, String::from_utf8(errors).unwrap())
    }

    #[test]
    fn success_exits_zero_silently() {
        assert_eq!(report(Ok(())), (0, String::new()));
    }

    #[test]
    fn generation_errors_exit_one() {
        let (code, errors) = report(Err(GenerationError::NoCharacterClassSelected.into()));
        assert_eq!(code, 1);
        assert_eq!(
            errors,
            "Error generating password: at least one character type must be selected\n"
        );

        let (code, errors) = report(Err(GenerationError::InvalidLength {
            length: -4,
            minimum: 6,
        }
        .into()));
        assert_eq!(code, 1);
        assert_eq!(
            errors,
            "Error generating password: password length must be at least 6 characters (got -4)\n"
        );
    }

    #[test]
    fn other_errors_exit_one() {
        let (code, errors) = report(Err(ProgError::EndOfInput));
        assert_eq!(code, 1);
        assert_eq!(errors, "Input ended before all questions were answered.\n");
    }
}
