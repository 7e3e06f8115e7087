//! Rotor: a wired permutation disk with a rotational offset.
//!
//! Three variants exist, modeled as a closed tagged enum rather than open
//! subclassing: moving rotors (advanced by pawls, carry notches), fixed
//! rotors (settable but never advanced), and reflectors (forward-only,
//! wiring must be a derangement). Signal-path code branches on capability
//! queries, never on a rotor's identity.

use crate::error::EnigmaError;
use crate::permutation::Permutation;

/// The variant of a rotor, with the capabilities it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Advanced by the stepping mechanism; carries notch positions.
    Moving { notches: Vec<usize> },
    /// Settable to an initial position but never advanced.
    Fixed,
    /// Leftmost slot only; participates in the forward pass only.
    Reflector,
}

/// A rotor: one wired permutation plus a current rotational offset.
///
/// The offset models the physical rotation of the wired disk relative to the
/// fixed entry and exit contacts: a signal entering at contact `p` reaches
/// wire `p + offset`, and leaves shifted back by the same amount.
#[derive(Debug, Clone)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    kind: RotorKind,
    setting: usize,
}

impl Rotor {
    /// Creates a moving rotor with the given notch characters.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInAlphabet`] if a notch character is not in
    /// the permutation's alphabet.
    pub fn moving(
        name: &str,
        permutation: Permutation,
        notches: &str,
    ) -> Result<Self, EnigmaError> {
        let notches = notches
            .chars()
            .map(|c| permutation.alphabet().to_int(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Rotor {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Moving { notches },
            setting: 0,
        })
    }

    /// Creates a fixed (non-advancing) rotor.
    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        Rotor {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Fixed,
            setting: 0,
        }
    }

    /// Creates a reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] if the wiring is not a
    /// derangement. A reflector with a fixed point would bounce a signal
    /// back out of the contact it entered, which no physical reflector does.
    pub fn reflector(name: &str, permutation: Permutation) -> Result<Self, EnigmaError> {
        if !permutation.derangement() {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "reflector '{}' wiring is not a derangement",
                name
            )));
        }
        Ok(Rotor {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Reflector,
            setting: 0,
        })
    }

    /// Returns the rotor's catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rotor's wiring permutation.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Returns the rotor's variant.
    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    /// Returns the size of the alphabet this rotor operates on.
    pub fn size(&self) -> usize {
        self.permutation.size()
    }

    /// Returns true if the stepping mechanism may advance this rotor.
    pub fn can_advance(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Returns true if this rotor carries notch positions.
    pub fn has_notches(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { ref notches } if !notches.is_empty())
    }

    /// Returns true if this rotor is a reflector (forward pass only).
    pub fn reflecting(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// Returns the current rotational offset, in `0..size()`.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Sets the offset to `posn` directly (initial setting, not stepping).
    ///
    /// # Errors
    /// Returns [`EnigmaError::OutOfRange`] unless `posn < size()`.
    pub fn set(&mut self, posn: usize) -> Result<(), EnigmaError> {
        if posn >= self.size() {
            return Err(EnigmaError::OutOfRange {
                index: posn,
                size: self.size(),
            });
        }
        self.setting = posn;
        Ok(())
    }

    /// Sets the offset to the position of `cposn` in the alphabet.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInAlphabet`] if `cposn` is not in the
    /// alphabet.
    pub fn set_char(&mut self, cposn: char) -> Result<(), EnigmaError> {
        self.setting = self.permutation.alphabet().to_int(cposn)?;
        Ok(())
    }

    /// Returns true iff the rotor's top-facing letter is one of its notches.
    ///
    /// Only moving rotors have notches; the other variants always return
    /// false.
    pub fn at_notch(&self) -> bool {
        match self.kind {
            RotorKind::Moving { ref notches } => notches.contains(&self.setting),
            _ => false,
        }
    }

    /// Advances the offset by one position, wrapping at the alphabet size.
    ///
    /// # Panics
    /// Panics if the rotor cannot advance (fixed rotor or reflector). The
    /// stepping mechanism must only drive pawl-capable rotors; reaching this
    /// on another variant is a caller bug, not a recoverable state.
    pub fn advance(&mut self) {
        assert!(
            self.can_advance(),
            "advance() called on non-advancing rotor '{}'",
            self.name
        );
        self.setting = (self.setting + 1) % self.size();
    }

    /// Converts an index through the rotor toward the reflector.
    ///
    /// The contact shift by the current offset models the disk's rotation:
    /// `wrap(permute(p + setting) - setting)`.
    pub fn convert_forward(&self, p: i32) -> i32 {
        let setting = self.setting as i32;
        let contact = self.permutation.permute(p + setting);
        self.permutation.wrap(contact - setting) as i32
    }

    /// Converts an index through the rotor away from the reflector.
    ///
    /// # Panics
    /// Panics on a reflector, which is a forward-only device; the machine
    /// skips slot 0 in the backward pass.
    pub fn convert_backward(&self, c: i32) -> i32 {
        assert!(
            !self.reflecting(),
            "convert_backward() called on reflector '{}'",
            self.name
        );
        let setting = self.setting as i32;
        let contact = self.permutation.invert(c + setting);
        self.permutation.wrap(contact - setting) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    fn perm(cycles: &str) -> Permutation {
        Permutation::new(cycles, &Alphabet::upper()).unwrap()
    }

    /// Rotor I of the historical catalog.
    fn rotor_i() -> Rotor {
        Rotor::moving(
            "I",
            perm("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"),
            "Q",
        )
        .unwrap()
    }

    #[test]
    fn test_capabilities_moving() {
        let r = rotor_i();
        assert!(r.can_advance());
        assert!(r.has_notches());
        assert!(!r.reflecting());
    }

    #[test]
    fn test_capabilities_fixed() {
        let r = Rotor::fixed("Beta", perm("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)"));
        assert!(!r.can_advance());
        assert!(!r.has_notches());
        assert!(!r.reflecting());
    }

    #[test]
    fn test_capabilities_reflector() {
        let p = perm(
            "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
        );
        let r = Rotor::reflector("B", p).unwrap();
        assert!(!r.can_advance());
        assert!(!r.has_notches());
        assert!(r.reflecting());
    }

    #[test]
    fn test_reflector_rejects_non_derangement() {
        assert!(matches!(
            Rotor::reflector("bad", perm("(AB) (CD)")),
            Err(EnigmaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_moving_rejects_foreign_notch() {
        assert_eq!(
            Rotor::moving("I", perm("(AB)"), "?").err(),
            Some(EnigmaError::NotInAlphabet('?'))
        );
    }

    #[test]
    fn test_convert_forward_at_zero_offset() {
        let r = rotor_i();
        // A -> E in rotor I wiring.
        assert_eq!(r.convert_forward(0), 4);
        assert_eq!(r.convert_backward(4), 0);
    }

    #[test]
    fn test_convert_forward_with_offset() {
        let mut r = rotor_i();
        r.set_char('B').unwrap();
        // Entering at contact 0 with offset 1: wire B -> K, minus offset = J.
        assert_eq!(r.convert_forward(0), 9);
        assert_eq!(r.convert_backward(9), 0);
    }

    #[test]
    fn test_forward_backward_inverse_at_every_offset() {
        let mut r = rotor_i();
        for offset in 0..26 {
            r.set(offset).unwrap();
            for p in 0..26 {
                assert_eq!(r.convert_backward(r.convert_forward(p)), p);
            }
        }
    }

    #[test]
    fn test_set_out_of_range() {
        let mut r = rotor_i();
        assert!(r.set(25).is_ok());
        assert_eq!(
            r.set(26),
            Err(EnigmaError::OutOfRange {
                index: 26,
                size: 26
            })
        );
    }

    #[test]
    fn test_set_char_not_in_alphabet() {
        let mut r = rotor_i();
        assert_eq!(r.set_char('q'), Err(EnigmaError::NotInAlphabet('q')));
    }

    #[test]
    fn test_advance_wraps() {
        let mut r = rotor_i();
        r.set(25).unwrap();
        r.advance();
        assert_eq!(r.setting(), 0);
    }

    #[test]
    fn test_at_notch() {
        let mut r = rotor_i();
        assert!(!r.at_notch());
        r.set_char('Q').unwrap();
        assert!(r.at_notch());
        r.advance();
        assert!(!r.at_notch());
    }

    #[test]
    fn test_multiple_notches() {
        let r = {
            let mut r = Rotor::moving("VI", perm("(AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)"), "ZM")
                .unwrap();
            r.set_char('M').unwrap();
            r
        };
        assert!(r.at_notch());
    }

    #[test]
    #[should_panic(expected = "advance() called on non-advancing rotor")]
    fn test_advance_on_fixed_panics() {
        let mut r = Rotor::fixed("Beta", perm("(AB)"));
        r.advance();
    }

    #[test]
    #[should_panic(expected = "convert_backward() called on reflector")]
    fn test_backward_on_reflector_panics() {
        let p = perm(
            "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
        );
        let r = Rotor::reflector("B", p).unwrap();
        r.convert_backward(0);
    }

    #[test]
    fn test_fixed_rotor_applies_caller_set_offset() {
        let mut r = Rotor::fixed("Beta", perm("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)"));
        r.set_char('C').unwrap();
        for p in 0..26 {
            assert_eq!(r.convert_backward(r.convert_forward(p)), p);
        }
    }
}
