//! Machine: rotor slots, plugboard, stepping rule, and signal path.
//!
//! A machine is built once with an alphabet, a slot count, a pawl count, and
//! the full catalog of known rotors. `insert_rotors` seats a named subset
//! into the slots (slot 0 is the reflector), `set_rotors` dials the initial
//! positions, and `convert` runs one keystroke: advance the rotors, then
//! trace the signal through plugboard, rotors, reflector, and back.
//!
//! The catalog is stored in a `Vec` and slots hold indices into it, so the
//! machine can mutate seated rotors without self-referential borrows.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// A complete Enigma-style machine.
///
/// Mutable single-threaded state: every [`convert`](Self::convert) call
/// advances rotor offsets before touching the signal path, so conversion is
/// a stream cipher over evolving state. The machine is reusable across
/// messages; re-run [`set_rotors`](Self::set_rotors) to return to a known
/// position. It must not be shared across threads without external
/// synchronization.
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Alphabet,
    num_rotors: usize,
    pawls: usize,
    catalog: Vec<Rotor>,
    /// Indices into `catalog`; empty until `insert_rotors` succeeds.
    slots: Vec<usize>,
    plugboard: Permutation,
}

impl Machine {
    /// Creates a machine with `num_rotors` slots, `pawls` pawls, and the
    /// given rotor catalog. The plugboard starts as the identity.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] when `num_rotors <= 1`,
    /// `pawls >= num_rotors`, or the catalog is empty.
    pub fn new(
        alphabet: Alphabet,
        num_rotors: usize,
        pawls: usize,
        catalog: Vec<Rotor>,
    ) -> Result<Self, EnigmaError> {
        if num_rotors <= 1 {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "need at least 2 rotor slots, got {}",
                num_rotors
            )));
        }
        if pawls >= num_rotors {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "pawls ({}) must be fewer than rotor slots ({})",
                pawls, num_rotors
            )));
        }
        if catalog.is_empty() {
            return Err(EnigmaError::InvalidConfiguration(
                "rotor catalog is empty".into(),
            ));
        }
        let plugboard = Permutation::identity(&alphabet);
        Ok(Machine {
            alphabet,
            num_rotors,
            pawls,
            catalog,
            slots: Vec::new(),
            plugboard,
        })
    }

    /// Returns the number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls, i.e. of rightmost slots whose rotor the
    /// stepping mechanism can advance.
    pub fn num_pawls(&self) -> usize {
        self.pawls
    }

    /// Returns the machine's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Seats the rotors named in `names` into the slots, in order
    /// (`names[0]` is the reflector). Seated rotors are reset to position 0.
    ///
    /// Duplicate names across slots are a caller error the configuration
    /// layer rejects before reaching this method.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownRotor`] when a name has no catalog match.
    /// - [`EnigmaError::InvalidConfiguration`] when `names` does not have
    ///   exactly `num_rotors` entries, slot 0 is not a reflector, a
    ///   reflector is named for a later slot, or a pawl-driven slot gets a
    ///   rotor that cannot advance.
    ///
    /// On error the previous slot assignment is left unchanged.
    pub fn insert_rotors(&mut self, names: &[&str]) -> Result<(), EnigmaError> {
        if names.len() != self.num_rotors {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "expected {} rotor names, got {}",
                self.num_rotors,
                names.len()
            )));
        }
        let mut slots = Vec::with_capacity(self.num_rotors);
        let first_mover = self.num_rotors - self.pawls;
        for (slot, name) in names.iter().enumerate() {
            let index = self
                .catalog
                .iter()
                .position(|r| r.name() == *name)
                .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
            let rotor = &self.catalog[index];
            if slot == 0 && !rotor.reflecting() {
                return Err(EnigmaError::InvalidConfiguration(format!(
                    "slot 0 must hold a reflector, '{}' is not one",
                    name
                )));
            }
            if slot > 0 && rotor.reflecting() {
                return Err(EnigmaError::InvalidConfiguration(format!(
                    "reflector '{}' cannot occupy slot {}",
                    name, slot
                )));
            }
            if slot >= first_mover && !rotor.can_advance() {
                return Err(EnigmaError::InvalidConfiguration(format!(
                    "slot {} is pawl-driven but '{}' cannot advance",
                    slot, name
                )));
            }
            slots.push(index);
        }
        for &index in &slots {
            // set(0) is always in range.
            let _ = self.catalog[index].set(0);
        }
        self.slots = slots;
        Ok(())
    }

    /// Dials the initial position of each non-reflector rotor from
    /// `setting`, left to right.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSetting`] when `setting` is not exactly
    /// `num_rotors - 1` characters or contains a character outside the
    /// alphabet. Rotor positions are unchanged on error.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), EnigmaError> {
        let chars: Vec<char> = setting.chars().collect();
        if chars.len() != self.num_rotors - 1 {
            return Err(EnigmaError::InvalidSetting(format!(
                "expected {} characters, got {}",
                self.num_rotors - 1,
                chars.len()
            )));
        }
        if let Some(&bad) = chars.iter().find(|c| !self.alphabet.contains(**c)) {
            return Err(EnigmaError::InvalidSetting(format!(
                "character '{}' is not in the alphabet",
                bad
            )));
        }
        self.require_configured()?;
        for (i, &c) in chars.iter().enumerate() {
            let slot = self.slots[i + 1];
            self.catalog[slot].set_char(c)?;
        }
        Ok(())
    }

    /// Replaces the plugboard.
    pub fn set_plugboard(&mut self, plugboard: Permutation) {
        self.plugboard = plugboard;
    }

    /// Returns the current top-facing letter of each slot after the
    /// reflector, left to right (e.g. `"AAAA"` on a freshly set 5-slot
    /// machine).
    pub fn rotor_positions(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .map(|&index| {
                let rotor = &self.catalog[index];
                // A rotor's setting is always a valid alphabet index.
                self.alphabet.to_char(rotor.setting()).unwrap_or('?')
            })
            .collect()
    }

    /// Converts one character index: advances the rotors, then traces the
    /// signal through the machine.
    ///
    /// # Errors
    /// - [`EnigmaError::OutOfRange`] when `c >= alphabet.size()`.
    /// - [`EnigmaError::InvalidConfiguration`] when no rotors are seated.
    ///
    /// Validation happens before stepping, so a failed call leaves every
    /// rotor offset exactly as a clean retry expects.
    pub fn convert(&mut self, c: usize) -> Result<usize, EnigmaError> {
        if c >= self.alphabet.size() {
            return Err(EnigmaError::OutOfRange {
                index: c,
                size: self.alphabet.size(),
            });
        }
        self.require_configured()?;
        self.step();
        Ok(self.signal(c))
    }

    /// Converts a whole message, character by character, carrying rotor
    /// state across characters (and across calls).
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInAlphabet`] if any character of `msg` is
    /// not in the alphabet, and [`EnigmaError::InvalidConfiguration`] when
    /// no rotors are seated. The whole message is validated before any rotor
    /// moves, so a failed call never half-advances the machine.
    pub fn convert_message(&mut self, msg: &str) -> Result<String, EnigmaError> {
        let indices = msg
            .chars()
            .map(|c| self.alphabet.to_int(c))
            .collect::<Result<Vec<_>, _>>()?;
        self.require_configured()?;
        let mut result = String::with_capacity(indices.len());
        for index in indices {
            self.step();
            result.push(self.alphabet.to_char(self.signal(index))?);
        }
        Ok(result)
    }

    /// Fails unless `insert_rotors` has seated a full set of rotors.
    fn require_configured(&self) -> Result<(), EnigmaError> {
        if self.slots.len() != self.num_rotors {
            return Err(EnigmaError::InvalidConfiguration(
                "no rotors inserted; call insert_rotors first".into(),
            ));
        }
        Ok(())
    }

    /// Advances the rotors for one keystroke.
    ///
    /// At-notch state is snapshotted before anything moves, then every
    /// qualifying rotor advances at once: the rightmost rotor always, and
    /// for each pawl-driven slot whose right neighbor is at notch, both the
    /// slot and that neighbor. Evaluating before advancing is what produces
    /// the historical double step: a middle rotor at its notch advances
    /// together with its left neighbor on the same keystroke.
    fn step(&mut self) {
        if self.pawls == 0 {
            return;
        }
        let n = self.num_rotors;
        let first_mover = n - self.pawls;
        let mut advances = vec![false; n];
        advances[n - 1] = true;
        for i in first_mover..n - 1 {
            if self.catalog[self.slots[i + 1]].at_notch() {
                advances[i] = true;
                advances[i + 1] = true;
            }
        }
        for (i, &advance) in advances.iter().enumerate() {
            if advance {
                self.catalog[self.slots[i]].advance();
            }
        }
    }

    /// Traces one index through the full signal path: plugboard, forward
    /// through slots right to left, backward through slots left to right
    /// (skipping the reflector), plugboard inverse.
    fn signal(&self, c: usize) -> usize {
        let mut result = self.plugboard.permute(c as i32);
        for i in (0..self.num_rotors).rev() {
            result = self.catalog[self.slots[i]].convert_forward(result);
        }
        for i in 1..self.num_rotors {
            result = self.catalog[self.slots[i]].convert_backward(result);
        }
        self.plugboard.invert(result) as usize
    }
}
