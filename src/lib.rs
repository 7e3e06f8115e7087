//! Enigma rotor cipher machine simulation.
//!
//! Simulates an electromechanical rotor cipher machine: given a rotor and
//! reflector configuration and a starting position, it deterministically
//! encodes or decodes a stream of characters one at a time, advancing the
//! rotor state after every character. The stepping mechanism reproduces the
//! historical double-stepping anomaly.
//!
//! This crate is the simulation core only. Command-line handling,
//! configuration-file parsing, file I/O, and output formatting are left to
//! callers, which hand the core already-validated values.
//!
//! # Architecture
//!
//! ```text
//! Alphabet     (character <-> index mapping)
//!     ↑ shared by
//! Permutation  (bijection over indices, built from cycle notation)
//!     ↑ wrapped by
//! Rotor        (permutation + rotational offset + notches; Moving/Fixed/Reflector)
//!     ↑ seated in
//! Machine      (rotor slots + plugboard — stepping rule and full signal path)
//! ```
//!
//! The signal path for one character: plugboard, then forward through every
//! rotor from the rightmost slot to the reflector, back through every rotor
//! except the reflector, then the plugboard inverse.
//!
//! # Examples
//!
//! Encode a message and decode it with a second machine in the same
//! configuration:
//!
//! ```
//! use enigma::{wiring, Alphabet, Machine};
//!
//! let alphabet = Alphabet::upper();
//! let catalog = wiring::naval_catalog(&alphabet).unwrap();
//! let mut encoder = Machine::new(alphabet.clone(), 5, 3, catalog.clone()).unwrap();
//! encoder.insert_rotors(&["B", "Beta", "I", "II", "III"]).unwrap();
//! encoder.set_rotors("AAAA").unwrap();
//!
//! let cipher = encoder.convert_message("HELLO").unwrap();
//! assert_eq!(cipher, "ILBDA");
//!
//! let mut decoder = Machine::new(alphabet, 5, 3, catalog).unwrap();
//! decoder.insert_rotors(&["B", "Beta", "I", "II", "III"]).unwrap();
//! decoder.set_rotors("AAAA").unwrap();
//! assert_eq!(decoder.convert_message(&cipher).unwrap(), "HELLO");
//! ```
//!
//! A plugboard is an ordinary [`Permutation`] applied at both ends of the
//! signal path:
//!
//! ```
//! use enigma::{wiring, Alphabet, Machine, Permutation};
//!
//! let alphabet = Alphabet::upper();
//! let catalog = wiring::naval_catalog(&alphabet).unwrap();
//! let mut machine = Machine::new(alphabet.clone(), 5, 3, catalog).unwrap();
//! machine.insert_rotors(&["B", "Beta", "I", "II", "III"]).unwrap();
//! machine.set_rotors("AAAA").unwrap();
//! machine.set_plugboard(Permutation::new("(BD) (CR)", &alphabet).unwrap());
//!
//! assert_eq!(machine.convert_message("B").unwrap(), "M");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod wiring;

mod alphabet;
mod machine;
mod permutation;
mod rotor;

pub use alphabet::Alphabet;
pub use error::EnigmaError;
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};
