// Scale definitions and the note-collection result shared with chords.
//
// Each scale is a fixed list of semitone offsets from the root, ascending.
// A scale built on a root is returned as a `NoteCollection`: the plain note
// list plus each note paired with its interval above the root, both in the
// definition's order.
//
// Unknown scale names are not an error: `ScaleType::from_name_or_default`
// falls back to major, so `scale("C", "bogus")` is the C major scale.

use serde::{Deserialize, Serialize};

use crate::interval::IntervalNote;
use crate::pitch::PitchClass;

/// The supported scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    /// Ionian: W W H W W W H
    #[default]
    Major,
    /// Natural minor (aeolian)
    Minor,
    PentatonicMajor,
    PentatonicMinor,
    /// Minor pentatonic plus the flat fifth
    Blues,
}

impl ScaleType {
    pub const ALL: [ScaleType; 5] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::PentatonicMajor,
        ScaleType::PentatonicMinor,
        ScaleType::Blues,
    ];

    /// Name used in queries and JSON.
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::PentatonicMajor => "pentatonic_major",
            ScaleType::PentatonicMinor => "pentatonic_minor",
            ScaleType::Blues => "blues",
        }
    }

    /// Semitone offsets from the root, ascending.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::PentatonicMajor => &[0, 2, 4, 7, 9],
            ScaleType::PentatonicMinor => &[0, 3, 5, 7, 10],
            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }

    pub fn from_name(name: &str) -> Option<ScaleType> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Look up a scale by name, using major for anything unrecognized.
    pub fn from_name_or_default(name: &str) -> ScaleType {
        Self::from_name(name).unwrap_or_default()
    }
}

/// Notes built from a root and a list of offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCollection {
    pub notes: Vec<PitchClass>,
    pub intervals: Vec<IntervalNote>,
}

impl NoteCollection {
    /// Stack `offsets` on `root`, keeping their order.
    pub fn from_offsets(root: PitchClass, offsets: &[u8]) -> Self {
        let intervals: Vec<IntervalNote> = offsets
            .iter()
            .map(|&semitones| IntervalNote::above(root, semitones))
            .collect();
        NoteCollection {
            notes: intervals.iter().map(|i| i.note).collect(),
            intervals,
        }
    }
}

/// The notes of `scale_type` starting on `root`.
pub fn scale(root: PitchClass, scale_type: ScaleType) -> NoteCollection {
    NoteCollection::from_offsets(root, scale_type.intervals())
}
