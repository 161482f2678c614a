use crate::charset::CharacterClass;
use crate::password_generation::GenerationError;

/// The shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: isize = 6;

/// What to generate: how long the password is, and which character classes it may contain.
///
/// `length` is signed so that a negative request reaches [`PasswordConfig::validate`] and is
/// rejected there, like any other length below the minimum.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PasswordConfig {
    pub length: isize,
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_numbers: bool,
    pub use_special: bool,
}

impl PasswordConfig {
    /// Check the configuration without consuming any randomness, returning the number of
    /// characters to generate.
    ///
    /// A length below [`MIN_PASSWORD_LENGTH`] is rejected, not clamped; clamping is the caller's
    /// business.
    pub fn validate(&self) -> Result<usize, GenerationError> {
        if self.length < MIN_PASSWORD_LENGTH {
            return Err(GenerationError::InvalidLength {
                length: self.length,
                minimum: MIN_PASSWORD_LENGTH,
            });
        }
        if !(self.use_lowercase || self.use_uppercase || self.use_numbers || self.use_special) {
            return Err(GenerationError::NoCharacterClassSelected);
        }
        // Non-negative past the first check.
        Ok(self.length.unsigned_abs())
    }

    pub fn uses(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.use_lowercase,
            CharacterClass::Uppercase => self.use_uppercase,
            CharacterClass::Number => self.use_numbers,
            CharacterClass::Symbol => self.use_special,
        }
    }

    /// The enabled classes, in canonical order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.uses(*class))
    }

    /// The concatenation of every enabled class's characters, in canonical order.
    pub fn alphabet(&self) -> Vec<char> {
        self.enabled_classes()
            .flat_map(|class| class.chars().chars())
            .collect()
    }
}
