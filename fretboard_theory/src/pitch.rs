// Pitch classes of the 12-tone equal-tempered system.
//
// A `PitchClass` is an index 0-11 (0 = C, 1 = C#, ... 11 = B). All
// arithmetic on it wraps modulo 12, so transposing by an octave returns the
// same pitch class. Names are sharps-only, matching the fixed table the web
// API accepts and returns; flats are not recognized.
//
// On the wire a pitch class is its name string ("C#"), not its index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TheoryError;

/// Canonical note names indexed by pitch class.
pub const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the 12 pitch classes. The inner value is always in 0..12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const E: PitchClass = PitchClass(4);
    pub const A: PitchClass = PitchClass(9);

    /// Build from any integer index, wrapping into 0..12.
    pub const fn from_index(index: i32) -> Self {
        PitchClass(index.rem_euclid(12) as u8)
    }

    /// Look up a canonical name ("C", "F#", ...). Case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        PITCH_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| PitchClass(i as u8))
            .ok_or_else(|| TheoryError::InvalidNote(name.to_string()))
    }

    /// Like `from_name`, but reports the failure as a bad root.
    pub fn from_root_name(name: &str) -> Result<Self, TheoryError> {
        Self::from_name(name).map_err(|_| TheoryError::InvalidRoot(name.to_string()))
    }

    /// All 12 pitch classes in ascending order from C.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0u8..12).map(PitchClass)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        PITCH_NAMES[self.0 as usize]
    }

    /// Move up (or down, for negative values) by a number of semitones.
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_index(i32::from(self.0) + semitones)
    }

    /// Ascending semitone distance from `self` to `other`, in 0..12.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PitchClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        assert_eq!(PitchClass::from_name("C").unwrap().index(), 0);
        assert_eq!(PitchClass::from_name("F#").unwrap().index(), 6);
        assert_eq!(PitchClass::from_name("B").unwrap().index(), 11);
        assert_eq!("A#".parse::<PitchClass>().unwrap().index(), 10);
    }

    #[test]
    fn test_unknown_names_rejected() {
        for bad in ["", "H", "Db", "c", "C##", "E#"] {
            assert_eq!(
                PitchClass::from_name(bad),
                Err(TheoryError::InvalidNote(bad.to_string())),
                "{bad:?} should not be a pitch class"
            );
        }
        assert_eq!(
            PitchClass::from_root_name("X"),
            Err(TheoryError::InvalidRoot("X".to_string()))
        );
    }

    #[test]
    fn test_octave_and_unison_identity() {
        for pc in PitchClass::all() {
            assert_eq!(pc.transpose(12), pc);
            assert_eq!(pc.transpose(0), pc);
            assert_eq!(pc.transpose(-12), pc);
        }
    }

    #[test]
    fn test_transpose_wraps() {
        let b = PitchClass::from_name("B").unwrap();
        assert_eq!(b.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-1), b);
        assert_eq!(PitchClass::E.transpose(5), PitchClass::A);
    }

    #[test]
    fn test_interval_to() {
        let g = PitchClass::from_name("G").unwrap();
        assert_eq!(PitchClass::C.interval_to(g), 7);
        // G up to C is a fourth, not a negative fifth.
        assert_eq!(g.interval_to(PitchClass::C), 5);
        assert_eq!(g.interval_to(g), 0);
    }

    #[test]
    fn test_names_roundtrip_through_all() {
        let names: Vec<&str> = PitchClass::all().map(PitchClass::name).collect();
        assert_eq!(names, PITCH_NAMES);
        for pc in PitchClass::all() {
            assert_eq!(pc.to_string().parse::<PitchClass>().unwrap(), pc);
        }
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&PitchClass::from_name("G#").unwrap()).unwrap();
        assert_eq!(json, "\"G#\"");
        let back: PitchClass = serde_json::from_str("\"D#\"").unwrap();
        assert_eq!(back.index(), 3);
        assert!(serde_json::from_str::<PitchClass>("\"Eb\"").is_err());
    }
}
