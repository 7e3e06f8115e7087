//! Error types for the enigma library.

use std::fmt;

/// Errors produced by the enigma library.
///
/// Every failure is terminal for the current operation: the core performs no
/// retries and no partial recovery, and a failed call leaves machine state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// A character is not part of the configured alphabet.
    NotInAlphabet(char),
    /// An index is outside the valid range `[0, size)`.
    OutOfRange { index: usize, size: usize },
    /// Cycle notation is syntactically invalid or names a foreign character.
    MalformedCycle(String),
    /// A rotor name has no match in the catalog.
    UnknownRotor(String),
    /// A rotor setting string has the wrong length or a foreign character.
    InvalidSetting(String),
    /// The machine or rotor configuration is structurally invalid.
    InvalidConfiguration(String),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::NotInAlphabet(c) => {
                write!(f, "Character '{}' is not in the alphabet", c)
            }
            EnigmaError::OutOfRange { index, size } => {
                write!(f, "Index {} is outside the range 0..{}", index, size)
            }
            EnigmaError::MalformedCycle(detail) => {
                write!(f, "Malformed cycle notation: {}", detail)
            }
            EnigmaError::UnknownRotor(name) => {
                write!(f, "No rotor named '{}' in the catalog", name)
            }
            EnigmaError::InvalidSetting(detail) => {
                write!(f, "Invalid rotor setting: {}", detail)
            }
            EnigmaError::InvalidConfiguration(detail) => {
                write!(f, "Invalid machine configuration: {}", detail)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_in_alphabet() {
        let err = EnigmaError::NotInAlphabet('q');
        assert_eq!(format!("{}", err), "Character 'q' is not in the alphabet");
    }

    #[test]
    fn test_display_out_of_range() {
        let err = EnigmaError::OutOfRange { index: 26, size: 26 };
        assert_eq!(format!("{}", err), "Index 26 is outside the range 0..26");
    }

    #[test]
    fn test_display_malformed_cycle() {
        let err = EnigmaError::MalformedCycle("unbalanced parentheses".into());
        assert_eq!(
            format!("{}", err),
            "Malformed cycle notation: unbalanced parentheses"
        );
    }

    #[test]
    fn test_display_unknown_rotor() {
        let err = EnigmaError::UnknownRotor("IX".into());
        assert_eq!(format!("{}", err), "No rotor named 'IX' in the catalog");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EnigmaError::NotInAlphabet('A'),
            EnigmaError::NotInAlphabet('A')
        );
        assert_ne!(
            EnigmaError::NotInAlphabet('A'),
            EnigmaError::NotInAlphabet('B')
        );
    }

    #[test]
    fn test_error_clone() {
        let err = EnigmaError::UnknownRotor("Beta".into());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
