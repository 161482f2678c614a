pub mod charset;
mod password;
pub mod password_generation;
pub mod random;

pub use charset::CharacterClass;
pub use password::{PasswordConfig, MIN_PASSWORD_LENGTH};
pub use password_generation::{generate, generate_password, GenerationError};
pub use random::{RandomSource, RngError, SecureRandom};

use zeroize::Zeroize;

/// A generated password. The contents are wiped from memory when dropped, and never shown by
/// `Debug`.
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
