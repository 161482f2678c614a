//! Utilities for generating passwords.

use zeroize::Zeroizing;

use crate::password::PasswordConfig;
use crate::random::{RandomSource, RngError, SecureRandom};

/// Generate a password from the operating system's entropy source.
pub fn generate(config: &PasswordConfig) -> Result<crate::Secret, GenerationError> {
    generate_password(&mut SecureRandom::os(), config)
}

/// Generate a password containing at least one character of every class `config` enables, and
/// nothing from the classes it doesn't.
///
/// The configuration is validated before `rng` is touched. One character per enabled class is
/// drawn first, the remainder is filled from the combined alphabet, and the whole buffer is then
/// Fisher-Yates shuffled so a character's position reveals nothing about its class.
///
/// Any failure of `rng` aborts generation; no partial password is returned.
pub fn generate_password<S>(
    rng: &mut S,
    config: &PasswordConfig,
) -> Result<crate::Secret, GenerationError>
where
    S: RandomSource + ?Sized,
{
    let length = config.validate()?;

    let alphabet = config.alphabet();
    let mut password = Zeroizing::new(Vec::<char>::with_capacity(length));
    log::debug!(
        "generating a {}-character password from {} character classes",
        length,
        config.enabled_classes().count(),
    );

    for class in config.enabled_classes() {
        password.push(pick(rng, class.chars().as_bytes())?);
    }

    let remaining = length.saturating_sub(password.len());
    for _ in 0..remaining {
        let idx = rng.random_index(alphabet.len())?;
        password.push(alphabet[idx]);
    }

    for i in (1..password.len()).rev() {
        let j = rng.random_index(i + 1)?;
        password.swap(i, j);
    }

    Ok(crate::Secret(password.iter().collect()))
}

fn pick<S>(rng: &mut S, table: &[u8]) -> Result<char, RngError>
where
    S: RandomSource + ?Sized,
{
    let idx = rng.random_index(table.len())?;
    Ok(char::from(table[idx]))
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("password length must be at least {minimum} characters (got {length})")]
    InvalidLength { length: isize, minimum: isize },
    #[error("at least one character type must be selected")]
    NoCharacterClassSelected,
    #[error("failed to draw secure random index: {0}")]
    Rng(#[from] RngError),
}
