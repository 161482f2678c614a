//! The fixed character classes a password can draw from.

pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static NUMBERS: &str = "0123456789";
pub static SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four disjoint sets of characters a password can be built from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Number,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order used both for composing the alphabet and for the
    /// guaranteed-inclusion draws.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Number,
        CharacterClass::Symbol,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Number => NUMBERS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// The class a character belongs to, if any.
    pub fn of(ch: char) -> Option<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.chars().contains(ch))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(NUMBERS.len(), 10);
        assert_eq!(SYMBOLS.len(), 26);
    }

    #[test]
    fn tables_are_ascii() {
        for class in CharacterClass::ALL {
            assert!(class.chars().is_ascii(), "{class:?} is not ASCII");
        }
    }

    #[test]
    fn classes_are_disjoint() {
        let mut seen = HashSet::new();
        for class in CharacterClass::ALL {
            for ch in class.chars().chars() {
                assert!(seen.insert(ch), "{ch:?} appears in more than one class");
            }
        }
        assert_eq!(seen.len(), 88);
    }

    #[test]
    fn class_of() {
        assert_eq!(CharacterClass::of('q'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::of('Q'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::of('7'), Some(CharacterClass::Number));
        assert_eq!(CharacterClass::of('|'), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::of(' '), None);
        assert_eq!(CharacterClass::of('~'), None);
    }
}
