//! Historical rotor wirings of the naval Enigma.
//!
//! The standard catalog: moving rotors I-VIII with their turnover notches,
//! the fixed greek rotors Beta and Gamma, and reflectors B and C, all over
//! the upper-case alphabet. Callers assembling a machine from their own
//! configuration source can ignore this module entirely; it exists so that
//! the common historical setup is one function call away.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// The upper-case alphabet the naval catalog is wired over.
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Rotor kind tag used by the wiring table.
enum Kind {
    Moving(&'static str),
    Fixed,
    Reflector,
}

/// Name, kind (with notches for moving rotors), and cycle notation for each
/// rotor of the naval machine.
const NAVAL_WIRINGS: &[(&str, Kind, &str)] = &[
    (
        "I",
        Kind::Moving("Q"),
        "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)",
    ),
    (
        "II",
        Kind::Moving("E"),
        "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)",
    ),
    (
        "III",
        Kind::Moving("V"),
        "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)",
    ),
    (
        "IV",
        Kind::Moving("J"),
        "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)",
    ),
    (
        "V",
        Kind::Moving("Z"),
        "(AVOLDRWFIUQ) (BZKSMNHYC) (EGTJPX)",
    ),
    (
        "VI",
        Kind::Moving("ZM"),
        "(AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)",
    ),
    (
        "VII",
        Kind::Moving("ZM"),
        "(ANOUPFRIMBZTLWKSVEGCJYDHXQ)",
    ),
    (
        "VIII",
        Kind::Moving("ZM"),
        "(AFLSETWUNDHOZVICQ) (BKJ) (GXY) (MPR)",
    ),
    ("Beta", Kind::Fixed, "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)"),
    ("Gamma", Kind::Fixed, "(AFNIRLBSQWVXGUZDKMTPEHYC) (JO)"),
    (
        "B",
        Kind::Reflector,
        "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
    ),
    (
        "C",
        Kind::Reflector,
        "(AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW) (QZ) (SX) (UY)",
    ),
];

/// Builds the full naval rotor catalog over `alphabet`.
///
/// # Errors
/// Returns an error if `alphabet` does not contain every character the
/// wirings mention; with [`Alphabet::upper`] (or any superset of [`UPPER`])
/// construction always succeeds.
///
/// # Examples
///
/// ```
/// use enigma::{wiring, Alphabet};
///
/// let catalog = wiring::naval_catalog(&Alphabet::upper()).unwrap();
/// assert!(catalog.iter().any(|r| r.name() == "III"));
/// ```
pub fn naval_catalog(alphabet: &Alphabet) -> Result<Vec<Rotor>, EnigmaError> {
    NAVAL_WIRINGS
        .iter()
        .map(|(name, kind, cycles)| {
            let permutation = Permutation::new(cycles, alphabet)?;
            match kind {
                Kind::Moving(notches) => Rotor::moving(name, permutation, notches),
                Kind::Fixed => Ok(Rotor::fixed(name, permutation)),
                Kind::Reflector => Rotor::reflector(name, permutation),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let catalog = naval_catalog(&Alphabet::upper()).unwrap();
        assert_eq!(catalog.len(), 12);
        for name in [
            "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "Beta", "Gamma", "B", "C",
        ] {
            assert!(
                catalog.iter().any(|r| r.name() == name),
                "missing rotor {}",
                name
            );
        }
    }

    #[test]
    fn test_moving_rotors_advance() {
        let catalog = naval_catalog(&Alphabet::upper()).unwrap();
        for name in ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"] {
            let rotor = catalog.iter().find(|r| r.name() == name).unwrap();
            assert!(rotor.can_advance(), "{} should advance", name);
            assert!(rotor.has_notches(), "{} should carry notches", name);
        }
    }

    #[test]
    fn test_greek_rotors_fixed() {
        let catalog = naval_catalog(&Alphabet::upper()).unwrap();
        for name in ["Beta", "Gamma"] {
            let rotor = catalog.iter().find(|r| r.name() == name).unwrap();
            assert!(!rotor.can_advance());
            assert!(!rotor.reflecting());
        }
    }

    #[test]
    fn test_reflectors_are_derangements() {
        let catalog = naval_catalog(&Alphabet::upper()).unwrap();
        for name in ["B", "C"] {
            let rotor = catalog.iter().find(|r| r.name() == name).unwrap();
            assert!(rotor.reflecting());
            assert!(rotor.permutation().derangement());
        }
    }

    #[test]
    fn test_wirings_are_bijections() {
        let catalog = naval_catalog(&Alphabet::upper()).unwrap();
        for rotor in &catalog {
            let p = rotor.permutation();
            for i in 0..26 {
                assert_eq!(p.invert(p.permute(i)), i, "rotor {}", rotor.name());
            }
        }
    }

    #[test]
    fn test_fails_on_too_small_alphabet() {
        let alphabet = Alphabet::new("ABCD").unwrap();
        assert!(naval_catalog(&alphabet).is_err());
    }
}
