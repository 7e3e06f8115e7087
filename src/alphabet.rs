//! Alphabet: bidirectional mapping between characters and dense indices.
//!
//! Every Permutation and Rotor is built against one Alphabet; index `i`
//! always means the i-th character of the alphabet string (0-based).

use std::collections::HashMap;

use crate::error::EnigmaError;

/// An ordered alphabet of encodable characters.
///
/// Maps characters to and from indices in `0..size()`. Immutable after
/// construction; cloning is cheap enough that every component that needs
/// the alphabet owns its own copy.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
    indices: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates an alphabet from a string of distinct characters.
    ///
    /// The k-th character of `chars` has index k.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] if `chars` is empty or
    /// contains a duplicate character. Duplicates would alias two indices to
    /// one character and silently break the bijection every permutation
    /// relies on, so they are rejected here rather than left to callers.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// let alphabet = Alphabet::new("ABCD").unwrap();
    /// assert_eq!(alphabet.size(), 4);
    /// assert!(Alphabet::new("ABCA").is_err());
    /// ```
    pub fn new(chars: &str) -> Result<Self, EnigmaError> {
        if chars.is_empty() {
            return Err(EnigmaError::InvalidConfiguration(
                "alphabet must contain at least one character".into(),
            ));
        }
        let mut indices = HashMap::new();
        let mut ordered = Vec::new();
        for c in chars.chars() {
            if indices.insert(c, ordered.len()).is_some() {
                return Err(EnigmaError::InvalidConfiguration(format!(
                    "duplicate character '{}' in alphabet",
                    c
                )));
            }
            ordered.push(c);
        }
        Ok(Alphabet {
            chars: ordered,
            indices,
        })
    }

    /// Creates the default alphabet of the 26 upper-case letters A-Z.
    pub fn upper() -> Self {
        Self::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").expect("A-Z has no duplicates")
    }

    /// Returns the number of characters in the alphabet.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if `ch` is in this alphabet.
    pub fn contains(&self, ch: char) -> bool {
        self.indices.contains_key(&ch)
    }

    /// Returns the character at `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::OutOfRange`] unless `index < size()`.
    pub fn to_char(&self, index: usize) -> Result<char, EnigmaError> {
        self.chars
            .get(index)
            .copied()
            .ok_or_else(|| EnigmaError::OutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Returns the index of `ch`. Inverse of [`to_char`](Self::to_char).
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInAlphabet`] if `ch` is not in the alphabet.
    pub fn to_int(&self, ch: char) -> Result<usize, EnigmaError> {
        self.indices
            .get(&ch)
            .copied()
            .ok_or(EnigmaError::NotInAlphabet(ch))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::upper()
    }
}
