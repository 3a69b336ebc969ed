// Chord definitions.
//
// Same shape and fallback policy as scales: a fixed offset list per chord
// type, built into a `NoteCollection`, with unknown names treated as major.

use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;
use crate::scale::NoteCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChordType {
    #[default]
    #[serde(rename = "major")]
    Major,
    #[serde(rename = "minor")]
    Minor,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "aug")]
    Augmented,
    #[serde(rename = "7")]
    Dominant7,
    #[serde(rename = "maj7")]
    Major7,
    #[serde(rename = "m7")]
    Minor7,
    /// Half-diminished seventh.
    #[serde(rename = "m7b5")]
    Minor7Flat5,
}

impl ChordType {
    pub const ALL: [ChordType; 8] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Dominant7,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::Minor7Flat5,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Dominant7 => "7",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "m7",
            ChordType::Minor7Flat5 => "m7b5",
        }
    }

    /// Semitone offsets from the root.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::Minor7Flat5 => &[0, 3, 6, 10],
        }
    }

    pub fn from_name(name: &str) -> Option<ChordType> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Look up a chord by name, using major for anything unrecognized.
    pub fn from_name_or_default(name: &str) -> ChordType {
        Self::from_name(name).unwrap_or_default()
    }
}

/// The notes of `chord_type` built on `root`.
pub fn chord(root: PitchClass, chord_type: ChordType) -> NoteCollection {
    NoteCollection::from_offsets(root, chord_type.intervals())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_names(root: &str, chord_type: &str) -> Vec<&'static str> {
        let root = PitchClass::from_name(root).unwrap();
        chord(root, ChordType::from_name_or_default(chord_type))
            .notes
            .into_iter()
            .map(PitchClass::name)
            .collect()
    }

    #[test]
    fn test_a_minor() {
        assert_eq!(note_names("A", "minor"), ["A", "C", "E"]);
    }

    #[test]
    fn test_all_chord_shapes_on_c() {
        assert_eq!(note_names("C", "major"), ["C", "E", "G"]);
        assert_eq!(note_names("C", "dim"), ["C", "D#", "F#"]);
        assert_eq!(note_names("C", "aug"), ["C", "E", "G#"]);
        assert_eq!(note_names("C", "7"), ["C", "E", "G", "A#"]);
        assert_eq!(note_names("C", "maj7"), ["C", "E", "G", "B"]);
        assert_eq!(note_names("C", "m7"), ["C", "D#", "G", "A#"]);
        assert_eq!(note_names("C", "m7b5"), ["C", "D#", "F#", "A#"]);
    }

    #[test]
    fn test_wraps_past_b() {
        assert_eq!(note_names("B", "major"), ["B", "D#", "F#"]);
        assert_eq!(note_names("G#", "7"), ["G#", "C", "D#", "F#"]);
    }

    #[test]
    fn test_unknown_name_falls_back_to_major() {
        assert_eq!(note_names("D", "sus4"), note_names("D", "major"));
        assert_eq!(ChordType::from_name_or_default("Minor"), ChordType::Major);
    }

    #[test]
    fn test_interval_labels() {
        let c7 = chord(PitchClass::C, ChordType::Minor7Flat5);
        let labels: Vec<&str> = c7.intervals.iter().map(|i| i.interval_name.as_str()).collect();
        assert_eq!(labels, ["1P", "3m", "5d", "7m"]);
    }

    #[test]
    fn test_serde_names_match_query_names() {
        for chord_type in ChordType::ALL {
            let json = serde_json::to_string(&chord_type).unwrap();
            assert_eq!(json, format!("\"{}\"", chord_type.name()));
            assert_eq!(ChordType::from_name(chord_type.name()), Some(chord_type));
        }
    }
}
