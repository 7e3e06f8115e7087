//! Permutation: a bijection over an alphabet's index space.
//!
//! Built from cycle notation such as `(AELTPHQXRU) (BKNW) (S)`. Parsing
//! eagerly builds full forward and inverse lookup tables, so applying the
//! permutation is a single array access. The machine calls `permute`/`invert`
//! once per rotor per input character, which makes table lookup the right
//! representation rather than re-walking cycle text per query.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;

/// A permutation of the indices `0..alphabet.size()`, in cycle notation.
///
/// Characters absent from every cycle map to themselves. The plugboard and
/// every rotor wiring are instances of this type.
#[derive(Debug, Clone)]
pub struct Permutation {
    alphabet: Alphabet,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// Creates a permutation of `alphabet` from the cycle-notation `cycles`.
    ///
    /// Each parenthesized group `(c0 c1 .. cm)` maps `c0→c1→..→cm→c0`.
    /// Whitespace between and around groups is ignored. A single-character
    /// group, or any character never mentioned, maps to itself.
    ///
    /// # Errors
    /// Returns [`EnigmaError::MalformedCycle`] when parentheses are
    /// unbalanced, a group is empty, a character appears outside any group,
    /// a character is not in `alphabet`, or a character appears in more than
    /// one position (the cycles must be disjoint to stay a bijection).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Permutation};
    ///
    /// let alphabet = Alphabet::new("ABCD").unwrap();
    /// let p = Permutation::new("(BACD)", &alphabet).unwrap();
    /// assert_eq!(p.permute_char('A').unwrap(), 'C');
    /// assert_eq!(p.invert_char('C').unwrap(), 'A');
    /// ```
    pub fn new(cycles: &str, alphabet: &Alphabet) -> Result<Self, EnigmaError> {
        let size = alphabet.size();
        let mut forward: Vec<usize> = (0..size).collect();
        let mut used = vec![false; size];
        let mut group: Vec<usize> = Vec::new();
        let mut in_group = false;

        for ch in cycles.chars() {
            match ch {
                c if c.is_whitespace() => {}
                '(' => {
                    if in_group {
                        return Err(EnigmaError::MalformedCycle(
                            "nested '(' inside a cycle".into(),
                        ));
                    }
                    in_group = true;
                    group.clear();
                }
                ')' => {
                    if !in_group {
                        return Err(EnigmaError::MalformedCycle(
                            "')' without a matching '('".into(),
                        ));
                    }
                    if group.is_empty() {
                        return Err(EnigmaError::MalformedCycle("empty cycle '()'".into()));
                    }
                    for (i, &from) in group.iter().enumerate() {
                        forward[from] = group[(i + 1) % group.len()];
                    }
                    in_group = false;
                }
                c => {
                    if !in_group {
                        return Err(EnigmaError::MalformedCycle(format!(
                            "character '{}' outside any cycle",
                            c
                        )));
                    }
                    let index = alphabet.to_int(c).map_err(|_| {
                        EnigmaError::MalformedCycle(format!(
                            "character '{}' is not in the alphabet",
                            c
                        ))
                    })?;
                    if used[index] {
                        return Err(EnigmaError::MalformedCycle(format!(
                            "character '{}' appears more than once",
                            c
                        )));
                    }
                    used[index] = true;
                    group.push(index);
                }
            }
        }
        if in_group {
            return Err(EnigmaError::MalformedCycle(
                "'(' without a matching ')'".into(),
            ));
        }

        let mut inverse = vec![0usize; size];
        for (from, &to) in forward.iter().enumerate() {
            inverse[to] = from;
        }

        Ok(Permutation {
            alphabet: alphabet.clone(),
            forward,
            inverse,
        })
    }

    /// Creates the identity permutation of `alphabet` (every character maps
    /// to itself). This is the default plugboard.
    pub fn identity(alphabet: &Alphabet) -> Self {
        let size = alphabet.size();
        Permutation {
            alphabet: alphabet.clone(),
            forward: (0..size).collect(),
            inverse: (0..size).collect(),
        }
    }

    /// Returns the size of the alphabet this permutation operates on.
    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    /// Returns the alphabet used to build this permutation.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Reduces `p` modulo the alphabet size into `0..size()`.
    ///
    /// Negative and overflowing values wrap around, modeling the circular
    /// contact ring of a physical rotor.
    pub fn wrap(&self, p: i32) -> usize {
        p.rem_euclid(self.size() as i32) as usize
    }

    /// Applies the permutation to index `p` (wrapped modulo the size).
    pub fn permute(&self, p: i32) -> i32 {
        self.forward[self.wrap(p)] as i32
    }

    /// Applies the inverse permutation to index `c` (wrapped modulo the size).
    pub fn invert(&self, c: i32) -> i32 {
        self.inverse[self.wrap(c)] as i32
    }

    /// Applies the permutation to a character.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInAlphabet`] if `p` is not in the alphabet.
    pub fn permute_char(&self, p: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.to_int(p)?;
        self.alphabet.to_char(self.forward[index])
    }

    /// Applies the inverse permutation to a character.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInAlphabet`] if `c` is not in the alphabet.
    pub fn invert_char(&self, c: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.to_int(c)?;
        self.alphabet.to_char(self.inverse[index])
    }

    /// Returns true iff no index maps to itself.
    ///
    /// Reflector wirings must be derangements: a fixed point would send a
    /// signal straight back through the contact it entered.
    pub fn derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &to)| i != to)
    }
}
